//! Construct names recognized by the rewrite passes
//!
//! Each construct has a stable key (`thm`, `itemize`, ...) that is used both
//! in the LaTeX source and as the key of its configuration entry.

use phf::phf_map;
use std::fmt;

/// A LaTeX structural unit eligible for conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstructName {
    Chapter,
    Section,
    Subsection,
    Exercise,
    Proof,
    Theorem,
    Lemma,
    Proposition,
    Itemize,
    Enumerate,
    Lstlisting,
}

/// Construct kind, deciding which pass handles it and how content is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    Header,
    TheoremLike,
    List,
    Auxiliary,
}

/// Configuration key -> construct
pub static CONSTRUCT_KEYS: phf::Map<&'static str, ConstructName> = phf_map! {
    "chapter" => ConstructName::Chapter,
    "section" => ConstructName::Section,
    "subsection" => ConstructName::Subsection,
    "exer" => ConstructName::Exercise,
    "proof" => ConstructName::Proof,
    "thm" => ConstructName::Theorem,
    "lem" => ConstructName::Lemma,
    "prop" => ConstructName::Proposition,
    "itemize" => ConstructName::Itemize,
    "enumerate" => ConstructName::Enumerate,
    "lstlisting" => ConstructName::Lstlisting,
};

impl ConstructName {
    /// Every construct, in pass order
    pub const ALL: [ConstructName; 11] = [
        ConstructName::Itemize,
        ConstructName::Enumerate,
        ConstructName::Exercise,
        ConstructName::Proof,
        ConstructName::Theorem,
        ConstructName::Lemma,
        ConstructName::Proposition,
        ConstructName::Chapter,
        ConstructName::Section,
        ConstructName::Subsection,
        ConstructName::Lstlisting,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ConstructName::Chapter => "chapter",
            ConstructName::Section => "section",
            ConstructName::Subsection => "subsection",
            ConstructName::Exercise => "exer",
            ConstructName::Proof => "proof",
            ConstructName::Theorem => "thm",
            ConstructName::Lemma => "lem",
            ConstructName::Proposition => "prop",
            ConstructName::Itemize => "itemize",
            ConstructName::Enumerate => "enumerate",
            ConstructName::Lstlisting => "lstlisting",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        CONSTRUCT_KEYS.get(key).copied()
    }

    pub fn kind(self) -> ConstructKind {
        match self {
            ConstructName::Chapter | ConstructName::Section | ConstructName::Subsection => {
                ConstructKind::Header
            }
            ConstructName::Itemize | ConstructName::Enumerate => ConstructKind::List,
            ConstructName::Lstlisting => ConstructKind::Auxiliary,
            _ => ConstructKind::TheoremLike,
        }
    }

    /// Constructs handled by a given kind, in pattern alternation order
    pub fn of_kind(kind: ConstructKind) -> impl Iterator<Item = ConstructName> {
        Self::ALL.into_iter().filter(move |name| name.kind() == kind)
    }
}

impl fmt::Display for ConstructName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

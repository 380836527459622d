//! Environment matching and block content layout
//!
//! An environment is `\begin{NAME}`, an optional bracket group, the content,
//! and the first `\end{NAME}` that follows. The content is never searched for
//! nested environments: the first matching end tag closes the block, so
//! improperly nested lists of the same name produce truncated matches.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::fixups::ignored_spans;
use crate::data::{BlockConfig, ConstructKind, ConstructName};
use crate::utils::error::ConversionWarning;

lazy_static! {
    /// `\begin{itemize}` / `\begin{enumerate}`
    pub static ref LIST_OPEN: Regex = open_pattern(ConstructKind::List);
    /// Theorem-like environments, keyed by their short names
    pub static ref THEOREM_OPEN: Regex = open_pattern(ConstructKind::TheoremLike);
    /// Auxiliary blocks (code listings)
    pub static ref AUX_OPEN: Regex = open_pattern(ConstructKind::Auxiliary);
}

/// `\begin{a|b|...}` over every construct of `kind`
fn open_pattern(kind: ConstructKind) -> Regex {
    let names: Vec<&str> = ConstructName::of_kind(kind).map(ConstructName::key).collect();
    Regex::new(&format!(r"\\begin\{{(?P<name>{})\}}", names.join("|"))).unwrap()
}

/// What a `[...]` group right after the opening marker means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketGroup {
    /// Captured as the block title
    Title,
    /// Discarded (list settings such as `[(a)]`)
    Settings,
    /// Not recognized; left in the content
    Ignored,
}

/// A recognized environment occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMatch<'a> {
    pub name: ConstructName,
    pub title: Option<&'a str>,
    pub content: &'a str,
    /// Byte span of the whole environment, end tag included
    pub start: usize,
    pub end: usize,
}

fn end_tag(name: ConstructName) -> String {
    format!("\\end{{{}}}", name.key())
}

/// Try to close the environment whose opening marker spans `open_start..open_end`.
fn close_block(
    text: &str,
    name: ConstructName,
    open_start: usize,
    open_end: usize,
    brackets: BracketGroup,
) -> Option<BlockMatch<'_>> {
    let rest = &text[open_end..];
    let end_tag = end_tag(name);

    // The bracket group ends at the first `]`; if no end tag follows it, the
    // group is treated as ordinary content instead.
    if brackets != BracketGroup::Ignored && rest.starts_with('[') {
        if let Some(close) = rest[1..].find(']').map(|i| i + 1) {
            let body_start = close + 1;
            if let Some(len) = rest[body_start..].find(&end_tag) {
                let title = match brackets {
                    BracketGroup::Title => Some(&rest[1..close]).filter(|t| !t.is_empty()),
                    _ => None,
                };
                return Some(BlockMatch {
                    name,
                    title,
                    content: &rest[body_start..body_start + len],
                    start: open_start,
                    end: open_end + body_start + len + end_tag.len(),
                });
            }
        }
    }

    rest.find(&end_tag).map(|len| BlockMatch {
        name,
        title: None,
        content: &rest[..len],
        start: open_start,
        end: open_end + len + end_tag.len(),
    })
}

/// Leftmost, non-overlapping environment matches for `open`, in order.
///
/// An opening marker with no end tag is skipped and scanning resumes right
/// after its backslash.
pub fn find_blocks<'a>(
    text: &'a str,
    open: &Regex,
    brackets: BracketGroup,
) -> Vec<BlockMatch<'a>> {
    let mut found = Vec::new();
    let mut search_from = 0;

    while let Some(caps) = open.captures_at(text, search_from) {
        let (Some(whole), Some(key)) = (caps.get(0), caps.name("name")) else {
            break;
        };
        let Some(name) = ConstructName::from_key(key.as_str()) else {
            search_from = whole.start() + 1;
            continue;
        };

        match close_block(text, name, whole.start(), whole.end(), brackets) {
            Some(block) => {
                search_from = block.end;
                found.push(block);
            }
            None => {
                debug!(construct = %name, offset = whole.start(), "unterminated block");
                search_from = whole.start() + 1;
            }
        }
    }

    found
}

/// Replace every environment matched by `open` with `render(block)`.
pub fn rewrite_blocks<F>(
    text: &str,
    open: &Regex,
    brackets: BracketGroup,
    mut render: F,
) -> String
where
    F: FnMut(&BlockMatch<'_>) -> String,
{
    let blocks = find_blocks(text, open, brackets);
    if blocks.is_empty() {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for block in &blocks {
        output.push_str(&text[cursor..block.start]);
        output.push_str(&render(block));
        cursor = block.end;
    }
    output.push_str(&text[cursor..]);
    output
}

/// Warnings for recognized opening markers that never find their end tag.
/// Markers inside `% LaTeX2Markdown IGNORE` regions are not reported.
pub fn find_unterminated(text: &str) -> Vec<ConversionWarning> {
    let ignored = ignored_spans(text);
    let mut warnings = Vec::new();
    for open in [&*LIST_OPEN, &*THEOREM_OPEN, &*AUX_OPEN] {
        for caps in open.captures_iter(text) {
            let (Some(whole), Some(key)) = (caps.get(0), caps.name("name")) else {
                continue;
            };
            if ignored.iter().any(|span| span.contains(&whole.start())) {
                continue;
            }
            let Some(name) = ConstructName::from_key(key.as_str()) else {
                continue;
            };
            if !text[whole.end()..].contains(&end_tag(name)) {
                let line = text[..whole.start()].matches('\n').count() + 1;
                warnings.push(ConversionWarning::unterminated(name.key(), line));
            }
        }
    }
    warnings.sort_by_key(|w| w.line);
    warnings
}

/// Lay out theorem-like and auxiliary content: every line trimmed and
/// prefixed with `line_indent_char`.
pub fn format_block_contents(config: &BlockConfig, content: &str) -> String {
    let mut output = String::new();
    for line in content.trim().split('\n') {
        output.push_str(&config.line_indent_char);
        output.push_str(line.trim());
        output.push('\n');
    }
    output
}

/// Lay out list content: every line trimmed, `\item` replaced by
/// `list_heading`.
pub fn format_list_contents(config: &BlockConfig, content: &str) -> String {
    let mut output = String::new();
    for line in content.trim().split('\n') {
        output.push_str(&line.trim().replace(r"\item", &config.list_heading));
        output.push('\n');
    }
    output
}

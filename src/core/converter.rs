//! The LaTeX subset -> Markdown converter
//!
//! Conversion is a fixed sequence of pattern rewrites over the main matter:
//! lists, theorem-like blocks, headers, auxiliary blocks, then the cosmetic
//! fixups. There is no parse tree; text outside a recognized construct is
//! copied through untouched.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use super::blocks::{
    find_unterminated, format_block_contents, format_list_contents, rewrite_blocks,
    BlockMatch, BracketGroup, AUX_OPEN, LIST_OPEN, THEOREM_OPEN,
};
use super::counter::BlockCounter;
use super::fixups;
use crate::data::{ConstructKind, ConstructName, Configuration};
use crate::utils::error::{ConversionError, ConversionOutput, ConversionResult};

lazy_static! {
    static ref MAIN_MATTER: Regex =
        Regex::new(r"(?s)\\begin\{document\}(?P<main>.*)\\end\{document\}").unwrap();
    static ref HEADER: Regex =
        Regex::new(r"(?s)\\(?P<name>chapter|section|subsection)\{(?P<title>.*?)\}").unwrap();
}

/// Text between `\begin{document}` and the last `\end{document}`
pub fn extract_main_matter(document: &str) -> ConversionResult<&str> {
    MAIN_MATTER
        .captures(document)
        .and_then(|caps| caps.name("main"))
        .map(|m| m.as_str())
        .ok_or(ConversionError::MissingDocumentBoundaries)
}

/// Converts one LaTeX document to Markdown.
///
/// # Example
///
/// ```rust
/// use latex2md::Converter;
///
/// let latex = "\\begin{document}\\begin{thm}[Euler]\nA fact.\n\\end{thm}\\end{document}";
/// let markdown = Converter::new(latex).convert().unwrap();
/// assert_eq!(markdown, "#### Theorem 1 (Euler)\n\n> A fact.");
/// ```
///
/// Numbering continues across documents when the counter is handed on:
///
/// ```rust
/// use latex2md::Converter;
///
/// let chapter = "\\begin{document}\\begin{thm}x\\end{thm}\\end{document}";
/// let mut first = Converter::new(chapter);
/// first.convert().unwrap();
///
/// let mut second = Converter::new(chapter).with_counter(first.into_counter());
/// assert!(second.convert().unwrap().starts_with("#### Theorem 2"));
/// ```
#[derive(Debug, Clone)]
pub struct Converter<'a> {
    document: &'a str,
    config: &'a Configuration,
    counter: BlockCounter,
}

impl<'a> Converter<'a> {
    /// Converter using the built-in configuration and a fresh counter
    pub fn new(document: &'a str) -> Self {
        Self::with_config(document, Configuration::builtin())
    }

    pub fn with_config(document: &'a str, config: &'a Configuration) -> Self {
        Self {
            document,
            config,
            counter: BlockCounter::new(),
        }
    }

    /// Continue numbering from an existing counter
    pub fn with_counter(mut self, counter: BlockCounter) -> Self {
        self.counter = counter;
        self
    }

    pub fn counter(&self) -> &BlockCounter {
        &self.counter
    }

    /// Give the counter back, e.g. to pass it to the next document's converter
    pub fn into_counter(self) -> BlockCounter {
        self.counter
    }

    /// Run the full pipeline and return trimmed Markdown
    pub fn convert(&mut self) -> ConversionResult<String> {
        let main = extract_main_matter(self.document)?;
        debug!(bytes = main.len(), "extracted main matter");

        let output = rewrite_blocks(main, &LIST_OPEN, BracketGroup::Settings, |block| {
            self.render_block(block)
        });
        debug!("rewrote lists");

        let output = rewrite_blocks(&output, &THEOREM_OPEN, BracketGroup::Title, |block| {
            self.render_block(block)
        });
        debug!("rewrote theorem-like blocks");

        let output = HEADER
            .replace_all(&output, |caps: &Captures<'_>| self.render_header(caps))
            .into_owned();
        debug!("rewrote headers");

        let output = rewrite_blocks(&output, &AUX_OPEN, BracketGroup::Ignored, |block| {
            self.render_block(block)
        });
        debug!("rewrote auxiliary blocks");

        let output = fixups::apply_all(&output);
        Ok(output.trim().to_string())
    }

    /// Like [`convert`](Self::convert), also reporting unterminated blocks
    pub fn convert_with_warnings(&mut self) -> ConversionResult<ConversionOutput> {
        let warnings = find_unterminated(extract_main_matter(self.document)?);
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        let content = self.convert()?;
        Ok(ConversionOutput::with_warnings(content, warnings))
    }

    /// Heading text: markdown heading, pretty name, running number, `(title)`.
    fn format_heading(&mut self, name: ConstructName, title: Option<&str>) -> String {
        let entry = self.config.get(name);
        let mut parts = vec![entry.markdown_heading.clone(), entry.pretty_name.clone()];
        if entry.show_count {
            parts.push(self.counter.next(name).to_string());
        }
        if let Some(title) = title {
            parts.push(format!("({})", title));
        }

        parts
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_block(&mut self, block: &BlockMatch<'_>) -> String {
        let heading = self.format_heading(block.name, block.title);
        let entry = self.config.get(block.name);
        let contents = match block.name.kind() {
            ConstructKind::List => format_list_contents(entry, block.content),
            _ => format_block_contents(entry, block.content),
        };
        format!("{}\n\n{}", heading, contents)
    }

    fn render_header(&mut self, caps: &Captures<'_>) -> String {
        let (Some(name), Some(title)) = (
            caps.name("name")
                .and_then(|m| ConstructName::from_key(m.as_str())),
            caps.name("title"),
        ) else {
            return caps[0].to_string();
        };

        let heading = self.format_heading(name, None);
        let separator = if self.config.get(name).show_count {
            "-"
        } else {
            ""
        };
        format!("{} {} {}\n", heading, separator, title.as_str())
    }
}

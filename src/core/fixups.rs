//! Cosmetic rewrites applied after the structural passes
//!
//! Each rule is a global substitution over the whole text. Order matters:
//! later rules see the output of earlier ones.

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use std::ops::Range;

lazy_static! {
    /// A line break ` \\` inside math
    static ref LINE_BREAK: Regex = Regex::new(r" \\\\").unwrap();
    static ref ALIGN_STAR: Regex = Regex::new(r"align\*").unwrap();
    static ref EMPH: Regex = Regex::new(r"\\emph\{(.*?)\}").unwrap();
    static ref TEXTBF: Regex = Regex::new(r"\\textbf\{(.*?)\}").unwrap();
    static ref TEXTTT: Regex = Regex::new(r"\\texttt\{(.*?)\}").unwrap();
    static ref ESCAPED_PERCENT: Regex = Regex::new(r"\\%").unwrap();
    static ref ARG_OPERATOR: Regex = Regex::new(r"\\arg(max|min)").unwrap();
    static ref IGNORE_REGION: Regex =
        Regex::new(r"(?s)% LaTeX2Markdown IGNORE.*?% LaTeX2Markdown END").unwrap();
}

/// Double ` \\` to ` \\\\` so MathJax still sees a line break after Markdown
/// unescaping.
pub fn double_line_breaks(text: &str) -> String {
    LINE_BREAK.replace_all(text, NoExpand(r" \\\\")).into_owned()
}

/// `align*` -> `align`, on both begin and end tags
pub fn unstar_align(text: &str) -> String {
    ALIGN_STAR.replace_all(text, "align").into_owned()
}

/// `\emph`, `\textbf` and `\texttt` to Markdown inline markup
pub fn inline_markup(text: &str) -> String {
    let text = EMPH.replace_all(text, "*${1}*");
    let text = TEXTBF.replace_all(&text, "**${1}**");
    TEXTTT.replace_all(&text, "`${1}`").into_owned()
}

pub fn unescape_percent(text: &str) -> String {
    ESCAPED_PERCENT.replace_all(text, NoExpand("%")).into_owned()
}

/// `\argmax`/`\argmin` -> `\text{argmax}`/`\text{argmin}`
pub fn arg_operators(text: &str) -> String {
    ARG_OPERATOR
        .replace_all(text, r"\text{arg${1}}")
        .into_owned()
}

/// Drop `% LaTeX2Markdown IGNORE` ... `% LaTeX2Markdown END`, markers included
pub fn strip_ignored(text: &str) -> String {
    IGNORE_REGION.replace_all(text, "").into_owned()
}

/// Byte spans of the regions [`strip_ignored`] removes
pub fn ignored_spans(text: &str) -> Vec<Range<usize>> {
    IGNORE_REGION.find_iter(text).map(|m| m.range()).collect()
}

/// All cosmetic rules, in order
pub fn apply_all(text: &str) -> String {
    let text = double_line_breaks(text);
    let text = unstar_align(&text);
    let text = inline_markup(&text);
    let text = unescape_percent(&text);
    let text = arg_operators(&text);
    strip_ignored(&text)
}

//! # latex2md
//!
//! Converts a constrained subset of AMS-LaTeX documents to Markdown, leaving
//! math intact for MathJax.
//!
//! ## Supported constructs
//!
//! - **Headers**: `\chapter`, `\section`, `\subsection`
//! - **Theorem-like blocks**: `thm`, `lem`, `prop`, `proof`, `exer`, with an
//!   optional `[title]`
//! - **Lists**: `itemize`, `enumerate`
//! - **Code listings**: `lstlisting`
//! - **Inline markup**: `\emph`, `\textbf`, `\texttt`, `\%`, `\argmax`/`\argmin`
//! - **Hidden regions**: `% LaTeX2Markdown IGNORE` ... `% LaTeX2Markdown END`
//!
//! Everything else is copied through as-is.
//!
//! ## Usage Examples
//!
//! ```rust
//! use latex2md::latex_to_markdown;
//!
//! let markdown = latex_to_markdown(r"
//!     \documentclass{article}
//!     \begin{document}
//!     Some \emph{prose}.
//!     \end{document}
//! ").unwrap();
//! assert_eq!(markdown, "Some *prose*.");
//! ```
//!
//! ### Custom configuration
//!
//! ```rust
//! use latex2md::{BlockConfig, Configuration, ConstructName, Converter};
//!
//! let config = Configuration::default().with_entry(
//!     ConstructName::Theorem,
//!     BlockConfig::new("###", "Satz", true).with_line_indent("> "),
//! );
//! let latex = "\\begin{document}\\begin{thm}\nx\n\\end{thm}\\end{document}";
//! let markdown = Converter::with_config(latex, &config).convert().unwrap();
//! assert_eq!(markdown, "### Satz 1\n\n> x");
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - construct names and configuration
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

pub use core::{extract_main_matter, BlockCounter, Converter};
pub use data::{BlockConfig, Configuration, ConstructKind, ConstructName};
pub use utils::error::{
    ConfigError, ConversionError, ConversionOutput, ConversionResult, ConversionWarning,
};

/// Convert a complete LaTeX document with the built-in configuration and a
/// fresh counter
pub fn latex_to_markdown(input: &str) -> ConversionResult<String> {
    Converter::new(input).convert()
}

/// Convert a complete LaTeX document with a custom configuration
pub fn latex_to_markdown_with_config(
    input: &str,
    config: &Configuration,
) -> ConversionResult<String> {
    Converter::with_config(input, config).convert()
}

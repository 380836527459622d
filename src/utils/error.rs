//! Error handling for latex2md conversions
//!
//! This module provides the error types for conversion and configuration
//! loading, plus the non-fatal warning/output pair returned by
//! [`Converter::convert_with_warnings`](crate::Converter::convert_with_warnings).

use std::fmt;

use thiserror::Error;

/// Conversion error type
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The document has no `\begin{document}` ... `\end{document}` pair
    #[error("malformed document: missing document boundaries")]
    MissingDocumentBoundaries,
    /// The configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Reading or writing a named file failed
    #[error("IO error: cannot {action} '{path}': {source}")]
    File {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConversionError {
    pub fn read(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::File {
            action: "read",
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn write(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::File {
            action: "write",
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Configuration loading error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A construct used by the rewrite rules has no configuration entry
    #[error("configuration error: no entry for construct '{name}'")]
    MissingConstruct { name: &'static str },
    /// The table names a construct the converter does not know about
    #[error("configuration error: unknown construct '{name}'")]
    UnknownConstruct { name: String },
    #[error("configuration error: invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("configuration error: invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("configuration error: cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    pub message: String,
    /// 1-based line within the main matter
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl ConversionWarning {
    /// Warning for an opening marker that never finds its closing marker
    pub fn unterminated(construct: &str, line: usize) -> Self {
        Self {
            message: format!("unterminated '{}' block left unconverted", construct),
            line: Some(line),
            suggestion: Some(format!("add a matching \\end{{{}}}", construct)),
        }
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(l) = self.line {
            write!(f, "Warning at line {}: {}", l, self.message)?;
        } else {
            write!(f, "Warning: {}", self.message)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Conversion output with optional warnings
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The converted Markdown
    pub content: String,
    /// Any warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionOutput {
    pub fn with_warnings(content: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

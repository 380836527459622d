//! Utility modules

pub mod error;

// Re-export commonly used items
pub use error::{ConfigError, ConversionError, ConversionOutput, ConversionResult, ConversionWarning};

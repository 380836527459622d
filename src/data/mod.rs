//! Data layer - construct names and their rendering configuration

pub mod config;
pub mod constructs;

// Re-export commonly used items
pub use config::{BlockConfig, Configuration};
pub use constructs::{ConstructKind, ConstructName, CONSTRUCT_KEYS};

//! Core conversion modules
//!
//! - `converter`: the rewrite pipeline (`Converter`)
//! - `blocks`: environment matching and content layout
//! - `fixups`: cosmetic substitutions run after the structural passes
//! - `counter`: running numbers for counted constructs

pub mod blocks;
pub mod converter;
pub mod counter;
pub mod fixups;

pub use converter::{extract_main_matter, Converter};
pub use counter::BlockCounter;

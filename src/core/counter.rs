//! Per-construct running numbers

use fxhash::FxHashMap;

use crate::data::ConstructName;

/// Running number for each counted construct.
///
/// Every construct starts at 1. A counter belongs to one [`Converter`] unless
/// the caller moves it on to the next one, which keeps numbering continuous
/// across several documents (chapters of a book, for instance).
///
/// [`Converter`]: crate::Converter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockCounter {
    counts: FxHashMap<ConstructName, u32>,
}

impl BlockCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number the next emission of `name` will carry
    pub fn peek(&self, name: ConstructName) -> u32 {
        self.counts.get(&name).copied().unwrap_or(1)
    }

    /// Return the current number for `name`, then advance it
    pub fn next(&mut self, name: ConstructName) -> u32 {
        let count = self.counts.entry(name).or_insert(1);
        let current = *count;
        *count += 1;
        current
    }
}

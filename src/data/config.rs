//! Construct configuration
//!
//! `config.json` is embedded into the crate and parsed once per process; it is
//! what [`Configuration::builtin`] returns. Alternative tables can be loaded
//! from JSON, YAML or TOML. Every table is validated on load: each construct
//! the rewrite passes know about must have an entry, and no unknown keys are
//! accepted.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::constructs::ConstructName;
use crate::utils::error::ConfigError;

const DEFAULT_JSON: &str = include_str!("config.json");

lazy_static! {
    static ref BUILTIN: Configuration = Configuration::from_json_str(DEFAULT_JSON)
        .expect("embedded config.json must be a complete configuration");
}

/// How a single construct renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockConfig {
    /// Markdown heading prefix (e.g. `###`) or list marker
    pub markdown_heading: String,
    pub pretty_name: String,
    pub show_count: bool,
    /// Prefix for every content line of a non-list block
    #[serde(default)]
    pub line_indent_char: String,
    /// Replacement for `\item` in list blocks
    #[serde(default)]
    pub list_heading: String,
}

impl BlockConfig {
    pub fn new(markdown_heading: &str, pretty_name: &str, show_count: bool) -> Self {
        Self {
            markdown_heading: markdown_heading.to_string(),
            pretty_name: pretty_name.to_string(),
            show_count,
            line_indent_char: String::new(),
            list_heading: String::new(),
        }
    }

    pub fn with_line_indent(mut self, line_indent_char: &str) -> Self {
        self.line_indent_char = line_indent_char.to_string();
        self
    }

    pub fn with_list_heading(mut self, list_heading: &str) -> Self {
        self.list_heading = list_heading.to_string();
        self
    }
}

/// Validated table of construct configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    entries: IndexMap<ConstructName, BlockConfig>,
}

impl Configuration {
    /// The embedded default table
    pub fn builtin() -> &'static Configuration {
        &BUILTIN
    }

    /// Build a configuration from `(key, entry)` pairs, validating the keys
    pub fn from_table<I>(table: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, BlockConfig)>,
    {
        let mut entries = IndexMap::new();
        for (key, entry) in table {
            let name = ConstructName::from_key(&key)
                .ok_or(ConfigError::UnknownConstruct { name: key })?;
            entries.insert(name, entry);
        }

        if let Some(missing) = ConstructName::ALL
            .iter()
            .find(|name| !entries.contains_key(*name))
        {
            return Err(ConfigError::MissingConstruct {
                name: missing.key(),
            });
        }

        Ok(Self { entries })
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let table: IndexMap<String, BlockConfig> = serde_json::from_str(source)?;
        Self::from_table(table)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let table: IndexMap<String, BlockConfig> = serde_yaml::from_str(source)?;
        Self::from_table(table)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let table: IndexMap<String, BlockConfig> = toml::from_str(source)?;
        Self::from_table(table)
    }

    /// Load a table from disk, picking the format from the file extension.
    /// Anything other than `.yaml`, `.yml` or `.toml` is read as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source),
            Some("toml") => Self::from_toml_str(&source),
            _ => Self::from_json_str(&source),
        }
    }

    /// Replace one entry, keeping the table complete
    pub fn with_entry(mut self, name: ConstructName, entry: BlockConfig) -> Self {
        self.entries.insert(name, entry);
        self
    }

    pub fn get(&self, name: ConstructName) -> &BlockConfig {
        // Completeness is checked in `from_table`, and entries are never removed.
        &self.entries[&name]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConstructName, &BlockConfig)> {
        self.entries.iter().map(|(name, entry)| (*name, entry))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::builtin().clone()
    }
}

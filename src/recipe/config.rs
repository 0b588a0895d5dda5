// src/recipe/config.rs

//! Parser configuration
//!
//! Defaults match stock Arch PKGBUILDs. A config can also be loaded from
//! TOML:
//!
//! ```toml
//! # Fields whose entries are "name: description" notes
//! note_fields = ["optdepends"]
//!
//! comment_marker = "#"
//!
//! # Directive lines to collect into the record's macro list
//! macro_prefixes = ["%define", "# @"]
//! ```

use crate::error::{Error, Result};
use crate::recipe::field::Field;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling how a PKGBUILD is decoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Fields decoded as dependency notes when their entries match `name: description`
    pub note_fields: Vec<Field>,

    /// Prefix marking a comment line for preamble capture
    pub comment_marker: String,

    /// Line prefixes collected as macros; empty disables macro capture
    pub macro_prefixes: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            note_fields: vec![Field::Optdepends],
            comment_marker: "#".to_string(),
            macro_prefixes: Vec::new(),
        }
    }
}

impl ParserConfig {
    /// Parse a config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid parser config: {}", e)))?;

        if config.comment_marker.is_empty() {
            return Err(Error::ConfigError(
                "comment_marker cannot be empty".to_string(),
            ));
        }

        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::IoError(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Set the fields decoded as dependency notes
    pub fn with_note_fields(mut self, fields: Vec<Field>) -> Self {
        self.note_fields = fields;
        self
    }

    /// Set the comment marker used for preamble capture
    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = marker.into();
        self
    }

    /// Set the line prefixes collected as macros
    pub fn with_macro_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.macro_prefixes = prefixes;
        self
    }

    pub fn is_note_field(&self, field: Field) -> bool {
        self.note_fields.contains(&field)
    }
}

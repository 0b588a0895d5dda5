// src/error.rs

//! Crate-level error type

use thiserror::Error;

/// Errors surfaced to callers of the crate
///
/// Missing fields, functions, and sub-packages are never errors; they decode
/// to empty values. Per-field decode failures are collected on the record as
/// [`crate::recipe::FieldError`] instead of aborting the parse.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a PKGBUILD or config file failed
    #[error("I/O error: {0}")]
    IoError(String),

    /// A request named something that is not part of the PKGBUILD vocabulary
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Parser configuration could not be loaded
    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;

// src/lib.rs

//! Conary PKGBUILD extraction
//!
//! Reads Arch Linux PKGBUILDs into typed records for the rest of the Conary
//! packaging toolchain (converters, dependency resolution, builders).
//!
//! # Architecture
//!
//! - Text-only: no Bash is executed and no variables are expanded
//! - Shape by content: a field's value type is inferred from how it is written
//! - Absence is data: missing fields decode to [`FieldValue::Absent`], and a
//!   malformed field is reported without discarding the rest of the record

mod error;
pub mod recipe;

pub use error::{Error, Result};
pub use recipe::{
    parse_pkgbuild, read_pkgbuild, DependencyNote, Field, FieldError, FieldValue, Function,
    ParserConfig, Pkgbuild, SubPackage,
};

// src/recipe/mod.rs

//! PKGBUILD recipe extraction
//!
//! Pulls structured metadata out of Arch Linux PKGBUILDs without running Bash.
//!
//! # Pipeline
//!
//! - **Split**: `package_<name>()` blocks are cut out of the document
//! - **Locate**: each known variable or function is found by a line scan
//! - **Decode**: assignment text becomes a scalar, a list, or dependency notes
//! - **Assemble**: everything is collected into a [`Pkgbuild`] record
//!
//! # Example
//!
//! ```
//! use conary_pkgbuild::recipe::{Field, FieldValue, Function, Pkgbuild};
//!
//! let pkg = Pkgbuild::parse("pkgname=hello\narch=('x86_64' 'aarch64')\n\nbuild() {\n  make\n}\n");
//! assert_eq!(pkg.name(), Some("hello"));
//! assert_eq!(
//!     pkg.field(Field::Arch),
//!     &FieldValue::List(vec!["x86_64".to_string(), "aarch64".to_string()])
//! );
//! assert_eq!(pkg.function(Function::Build), "  make\n");
//! ```

mod config;
mod field;
pub mod pkgbuild;
pub mod span;
mod subpackage;
mod value;

pub use config::ParserConfig;
pub use field::{Field, Function};
pub use pkgbuild::{parse_pkgbuild, read_pkgbuild, read_pkgbuild_with, Pkgbuild};
pub use span::{extract_assignment, extract_function, locate, Span, SpanMode};
pub use subpackage::{split_subpackages, Split, SubPackage};
pub use value::{decode, DependencyNote, FieldError, FieldValue};

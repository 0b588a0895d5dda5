// src/recipe/pkgbuild.rs

//! PKGBUILD metadata record
//!
//! Assembles the decoded fields and function bodies of an Arch Linux PKGBUILD
//! into a [`Pkgbuild`] record.
//!
//! # PKGBUILD Format
//!
//! PKGBUILDs are Bash scripts with specific variables and functions:
//!
//! ```bash
//! # Maintainer: Someone <someone@example.com>
//! pkgname=nano
//! pkgver=8.5
//! pkgrel=2
//! pkgdesc="A small and friendly text editor"
//! url="https://www.nano-editor.org"
//! arch=('x86_64')
//! license=('GPL')
//! depends=('ncurses' 'file')
//! optdepends=('bash-completion: tab completion')
//! source=("https://nano-editor.org/dist/v${pkgver%.*}/nano-$pkgver.tar.xz")
//! sha256sums=('abc123...')
//!
//! build() {
//!     cd "$pkgname-$pkgver"
//!     ./configure --prefix=/usr
//!     make
//! }
//!
//! package() {
//!     cd "$pkgname-$pkgver"
//!     make DESTDIR="$pkgdir" install
//! }
//! ```
//!
//! # Limitations
//!
//! - Values are taken literally; `$pkgver` and friends are not expanded
//! - Sub-package blocks are parsed on request and do not inherit main values
//! - Bash beyond single and double quotes is not understood

use crate::error::{Error, Result};
use crate::recipe::config::ParserConfig;
use crate::recipe::field::{Field, Function};
use crate::recipe::span::{extract_assignment, extract_function};
use crate::recipe::subpackage::{split_subpackages, SubPackage};
use crate::recipe::value::{decode, FieldError, FieldValue};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Metadata extracted from one PKGBUILD
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pkgbuild {
    /// One entry per [`Field`], absent fields included
    pub fields: BTreeMap<Field, FieldValue>,
    /// One body per [`Function`], empty when not defined
    pub functions: BTreeMap<Function, String>,
    /// Leading comment block (maintainer lines and the like)
    pub preamble: String,
    /// Directive lines matched by [`ParserConfig::macro_prefixes`]
    pub macros: Vec<String>,
    /// `package_<name>()` blocks cut out of the main package
    pub subpackages: Vec<SubPackage>,
    /// Fields that could not be decoded and were left absent
    pub failures: Vec<FieldError>,
}

impl Pkgbuild {
    /// Parse with the default configuration
    pub fn parse(content: &str) -> Self {
        Self::parse_with(content, &ParserConfig::default())
    }

    pub fn parse_with(content: &str, config: &ParserConfig) -> Self {
        let split = split_subpackages(content);
        let main = split.main.as_str();

        let mut fields = BTreeMap::new();
        let mut failures = Vec::new();

        for field in Field::ALL {
            let span = extract_assignment(field.as_str(), main);
            let value = match decode(field, &span, config) {
                Ok(value) => {
                    if !value.is_absent() {
                        debug!("PKGBUILD field {} = {}", field, value);
                    }
                    value
                }
                Err(e) => {
                    warn!("Skipping PKGBUILD field: {}", e);
                    failures.push(e);
                    FieldValue::Absent
                }
            };
            fields.insert(field, value);
        }

        let functions = Function::ALL
            .into_iter()
            .map(|func| {
                let body = extract_function(func.as_str(), main);
                if !body.is_empty() {
                    debug!("PKGBUILD function {}() has {} lines", func, body.lines().count());
                }
                (func, body)
            })
            .collect();

        Self {
            fields,
            functions,
            preamble: capture_preamble(main, &config.comment_marker),
            macros: capture_macros(main, &config.macro_prefixes),
            subpackages: split.subpackages,
            failures,
        }
    }

    pub fn field(&self, field: Field) -> &FieldValue {
        static ABSENT: FieldValue = FieldValue::Absent;
        self.fields.get(&field).unwrap_or(&ABSENT)
    }

    pub fn function(&self, func: Function) -> &str {
        self.functions.get(&func).map(String::as_str).unwrap_or("")
    }

    /// `pkgname`, or the first entry of a split package's `pkgname` array
    pub fn name(&self) -> Option<&str> {
        self.field(Field::Pkgname).values().first().copied()
    }

    /// Full version in `[epoch:]pkgver[-pkgrel]` form
    pub fn full_version(&self) -> Option<String> {
        let pkgver = self.field(Field::Pkgver).as_scalar()?;
        let mut version = match self.field(Field::Epoch).as_scalar() {
            Some(epoch) => format!("{}:{}", epoch, pkgver),
            None => pkgver.to_string(),
        };
        if let Some(pkgrel) = self.field(Field::Pkgrel).as_scalar() {
            version.push('-');
            version.push_str(pkgrel);
        }
        Some(version)
    }

    pub fn is_split(&self) -> bool {
        !self.subpackages.is_empty()
    }
}

/// Parse PKGBUILD content with the default configuration
pub fn parse_pkgbuild(content: &str) -> Pkgbuild {
    Pkgbuild::parse(content)
}

/// Read and parse a PKGBUILD file
pub fn read_pkgbuild(path: &Path) -> Result<Pkgbuild> {
    read_pkgbuild_with(path, &ParserConfig::default())
}

pub fn read_pkgbuild_with(path: &Path, config: &ParserConfig) -> Result<Pkgbuild> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::IoError(format!("Failed to read PKGBUILD {}: {}", path.display(), e))
    })?;

    Ok(Pkgbuild::parse_with(&content, config))
}

/// Leading comment lines, each newline-terminated
///
/// An empty marker captures nothing.
fn capture_preamble(content: &str, marker: &str) -> String {
    if marker.is_empty() {
        return String::new();
    }

    content
        .split('\n')
        .take_while(|line| line.starts_with(marker))
        .fold(String::new(), |mut preamble, line| {
            preamble.push_str(line);
            preamble.push('\n');
            preamble
        })
}

fn capture_macros(content: &str, prefixes: &[String]) -> Vec<String> {
    if prefixes.is_empty() {
        return Vec::new();
    }

    content
        .lines()
        .map(str::trim)
        .filter(|line| prefixes.iter().any(|p| line.starts_with(p.as_str())))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::value::DependencyNote;

    const NANO: &str = r#"# Maintainer: Jane Doe <jane@example.com>
# Contributor: John Doe <john@example.com>

pkgname=nano
pkgver=8.5
pkgrel=2
pkgdesc="A small and friendly text editor"
url='https://www.nano-editor.org'
arch=('x86_64' 'aarch64')
license=('GPL')
depends=('ncurses' 'file' 'sh')
optdepends=('bash-completion: tab completion')
source=("https://nano-editor.org/dist/v8/nano-$pkgver.tar.xz"
        "https://nano-editor.org/dist/v8/nano-$pkgver.tar.xz.asc")
sha256sums=('abc123'
            'SKIP')

build() {
    cd "$pkgname-$pkgver"
    ./configure --prefix=/usr
    make
}

package() {
    cd "$pkgname-$pkgver"
    make DESTDIR="$pkgdir" install
}
"#;

    #[test]
    fn test_parse_simple_pkgbuild() {
        let pkg = Pkgbuild::parse(NANO);
        assert_eq!(pkg.name(), Some("nano"));
        assert_eq!(pkg.full_version().as_deref(), Some("8.5-2"));
        assert_eq!(
            pkg.field(Field::Pkgdesc).as_scalar(),
            Some("A small and friendly text editor")
        );
        assert_eq!(pkg.field(Field::Url).as_scalar(), Some("https://www.nano-editor.org"));
        assert_eq!(pkg.field(Field::Arch).values(), vec!["x86_64", "aarch64"]);
        assert_eq!(pkg.field(Field::Depends).values(), vec!["ncurses", "file", "sh"]);
        assert_eq!(
            pkg.field(Field::Optdepends),
            &FieldValue::Note(DependencyNote::new("bash-completion", "tab completion"))
        );
        assert_eq!(pkg.field(Field::Source).values().len(), 2);
        assert_eq!(pkg.field(Field::Sha256sums).values(), vec!["abc123", "SKIP"]);
        assert!(pkg.failures.is_empty());
        assert!(!pkg.is_split());
    }

    #[test]
    fn test_every_field_has_a_slot() {
        let pkg = Pkgbuild::parse(NANO);
        assert_eq!(pkg.fields.len(), Field::ALL.len());
        assert_eq!(pkg.functions.len(), Function::ALL.len());
        assert!(pkg.field(Field::Pkgbase).is_absent());
        assert!(pkg.field(Field::B2sums).is_absent());
    }

    #[test]
    fn test_functions_extracted() {
        let pkg = Pkgbuild::parse(NANO);
        assert_eq!(
            pkg.function(Function::Build),
            "    cd \"$pkgname-$pkgver\"\n    ./configure --prefix=/usr\n    make\n"
        );
        assert!(pkg.function(Function::Package).contains("DESTDIR=\"$pkgdir\""));
        assert_eq!(pkg.function(Function::Check), "");
        assert_eq!(pkg.function(Function::Pkgver), "");
    }

    #[test]
    fn test_preamble_stops_at_first_non_comment() {
        let pkg = Pkgbuild::parse(NANO);
        assert_eq!(
            pkg.preamble,
            "# Maintainer: Jane Doe <jane@example.com>\n# Contributor: John Doe <john@example.com>\n"
        );

        let pkg = Pkgbuild::parse("pkgname=foo\n# not a preamble\n");
        assert_eq!(pkg.preamble, "");
    }

    #[test]
    fn test_empty_input() {
        let pkg = Pkgbuild::parse("");
        assert!(Field::ALL.iter().all(|f| pkg.field(*f).is_absent()));
        assert!(Function::ALL.iter().all(|f| pkg.function(*f).is_empty()));
        assert!(pkg.preamble.is_empty());
        assert!(pkg.macros.is_empty());
        assert!(pkg.failures.is_empty());
        assert_eq!(pkg.name(), None);
        assert_eq!(pkg.full_version(), None);
    }

    #[test]
    fn test_bad_field_does_not_blank_record() {
        let content = "pkgname=foo\ndepends=('glibc'\n        'zlib'\n\npkgver=1.0\n";
        let pkg = Pkgbuild::parse(content);
        assert_eq!(pkg.name(), Some("foo"));
        assert_eq!(pkg.field(Field::Pkgver).as_scalar(), Some("1.0"));
        assert!(pkg.field(Field::Depends).is_absent());
        assert_eq!(pkg.failures.len(), 1);
        assert_eq!(pkg.failures[0].field(), Field::Depends);
    }

    #[test]
    fn test_epoch_in_full_version() {
        let pkg = Pkgbuild::parse("epoch=1\npkgver=2.0\npkgrel=3\n");
        assert_eq!(pkg.full_version().as_deref(), Some("1:2.0-3"));
    }

    #[test]
    fn test_macros_disabled_by_default() {
        let pkg = Pkgbuild::parse("%define foo bar\npkgname=foo\n");
        assert!(pkg.macros.is_empty());
    }

    #[test]
    fn test_macros_with_prefixes() {
        let config = ParserConfig::default().with_macro_prefixes(vec!["%".to_string()]);
        let pkg = Pkgbuild::parse_with("%define foo bar\npkgname=foo\n  %global x 1\n", &config);
        assert_eq!(pkg.macros, vec!["%define foo bar", "%global x 1"]);
    }

    #[test]
    fn test_split_package_main_fields_not_shadowed() {
        let content = "\
pkgbase=foo
pkgname=('foo' 'foo-docs')
pkgdesc='Main description'
pkgver=1.0

package_foo-docs() {
  pkgdesc='Docs description'
}
";
        let pkg = Pkgbuild::parse(content);
        assert!(pkg.is_split());
        assert_eq!(pkg.name(), Some("foo"));
        assert_eq!(pkg.field(Field::Pkgdesc).as_scalar(), Some("Main description"));

        let docs = pkg.subpackages[0].parse(&ParserConfig::default());
        assert_eq!(docs.field(Field::Pkgdesc).as_scalar(), Some("Docs description"));
        assert!(docs.field(Field::Pkgver).is_absent());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_pkgbuild(Path::new("/nonexistent/PKGBUILD")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}

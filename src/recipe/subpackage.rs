// src/recipe/subpackage.rs

//! Split-package handling
//!
//! Split PKGBUILDs define one `package_<name>()` function per output package.
//! Those blocks may override metadata for their package:
//!
//! ```bash
//! pkgbase=foo
//! pkgname=('foo' 'foo-docs')
//!
//! package_foo-docs() {
//!   pkgdesc="Documentation for foo"
//!   arch=('any')
//!   make DESTDIR="$pkgdir" install-docs
//! }
//! ```
//!
//! The blocks are cut out before the main package is parsed so their
//! overrides don't shadow the top-level definitions.

use crate::recipe::config::ParserConfig;
use crate::recipe::pkgbuild::Pkgbuild;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;
use std::sync::LazyLock;
use tracing::debug;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^package_(\S*?)\(\)\s*\{\s*$").unwrap());

/// One `package_<name>() { ... }` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubPackage {
    /// Suffix after `package_`
    pub name: String,
    /// Header line through the closing `}` line
    pub text: String,
    /// Zero-based line range of the block in the document
    pub lines: Range<usize>,
}

impl SubPackage {
    /// Lines between the header and the closing brace
    pub fn body(&self) -> String {
        let lines: Vec<&str> = self.text.split('\n').collect();
        match lines.len() {
            0..=2 => String::new(),
            n => lines[1..n - 1].join("\n"),
        }
    }

    /// Parse this block's own assignments and functions
    ///
    /// Values the block does not override stay absent; nothing is inherited
    /// from the main package.
    pub fn parse(&self, config: &ParserConfig) -> Pkgbuild {
        debug!("Parsing sub-package {}", self.name);
        Pkgbuild::parse_with(&self.body(), config)
    }
}

/// A document separated into sub-package blocks and the main package text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub subpackages: Vec<SubPackage>,
    /// The document with every sub-package block's lines removed
    pub main: String,
}

/// Separate `package_<name>()` blocks from the rest of the document
///
/// A header without a closing `}` line is left in the main text.
pub fn split_subpackages(content: &str) -> Split {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut subpackages = Vec::new();
    let mut idx = 0;

    while idx < lines.len() {
        let closing = HEADER_RE.captures(lines[idx]).and_then(|caps| {
            lines[idx + 1..]
                .iter()
                .position(|line| *line == "}")
                .map(|offset| (caps[1].to_string(), idx + offset + 2))
        });

        match closing {
            Some((name, end)) => {
                debug!("Found sub-package {} at lines {}..{}", name, idx, end);
                subpackages.push(SubPackage {
                    name,
                    text: lines[idx..end].join("\n"),
                    lines: idx..end,
                });
                idx = end;
            }
            None => idx += 1,
        }
    }

    if subpackages.is_empty() {
        return Split {
            subpackages,
            main: content.to_string(),
        };
    }

    let main = lines
        .iter()
        .enumerate()
        .filter(|(i, _)| !subpackages.iter().any(|sub| sub.lines.contains(i)))
        .map(|(_, line)| *line)
        .collect::<Vec<_>>()
        .join("\n");

    Split { subpackages, main }
}

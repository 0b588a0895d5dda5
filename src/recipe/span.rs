// src/recipe/span.rs

//! Line-oriented span location for PKGBUILD assignments and functions
//!
//! PKGBUILDs are Bash, but the metadata we care about follows two simple
//! shapes that can be found without a shell parser:
//!
//! ```bash
//! depends=('glibc'
//!          'ncurses')      # assignment span: begin line up to a blank line
//!                          # or the next assignment
//! build() {
//!     make                 # function span: the lines between the header
//! }                        # and a line holding only `}`
//! ```
//!
//! Each lookup runs a two-state scan (seeking the begin line, then inside the
//! span looking for the end line) over the region's lines.

use std::ops::Range;

/// Which kind of span to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanMode {
    /// `name=value`, `name=(...)`, optionally indented
    Assignment,
    /// `name() {` ... `}`
    Function,
}

impl SpanMode {
    fn is_begin(self, name: &str, line: &str) -> bool {
        match self {
            SpanMode::Assignment => line
                .trim_start()
                .strip_prefix(name)
                .is_some_and(|rest| rest.starts_with('=')),
            SpanMode::Function => function_header_rest(name, line)
                .is_some_and(|rest| rest.trim().is_empty()),
        }
    }

    fn is_end(self, line: &str) -> bool {
        match self {
            SpanMode::Assignment => line.trim().is_empty() || starts_new_definition(line),
            SpanMode::Function => line == "}",
        }
    }
}

/// Text after the `{` of a `name() {` line
fn function_header_rest<'a>(name: &str, line: &'a str) -> Option<&'a str> {
    line.strip_prefix(name)?
        .strip_prefix("()")?
        .trim_start()
        .strip_prefix('{')
}

/// A line starting another assignment (`word=`) or function (`word(`)
fn starts_new_definition(line: &str) -> bool {
    let trimmed = line.trim_start();
    let word_len = trimmed
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(trimmed.len());

    word_len > 0 && matches!(trimmed[word_len..].chars().next(), Some('=') | Some('('))
}

#[derive(Clone, Copy)]
enum ScanState {
    Seeking,
    InSpan { begin: usize },
}

/// Lines belonging to one assignment or function body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<'a> {
    lines: Vec<&'a str>,
    range: Range<usize>,
}

impl<'a> Span<'a> {
    fn new(all_lines: &[&'a str], range: Range<usize>) -> Self {
        Self {
            lines: all_lines[range.clone()].to_vec(),
            range,
        }
    }

    /// Zero-based line range within the searched region
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Span lines joined with newlines, without a trailing newline
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Span lines as they appear in the document, each newline-terminated
    pub fn body(&self) -> String {
        self.lines.iter().fold(String::new(), |mut body, line| {
            body.push_str(line);
            body.push('\n');
            body
        })
    }
}

/// Find the span of `name` in `region`
///
/// Assignment spans include the `name=` line. Function spans exclude both the
/// `name() {` header and the closing `}`. A span with no end line runs to the
/// end of the region. Returns `None` if `name` is not defined in the region.
pub fn locate<'a>(name: &str, region: &'a str, mode: SpanMode) -> Option<Span<'a>> {
    let lines: Vec<&str> = region.split('\n').collect();
    let mut state = ScanState::Seeking;

    for (idx, line) in lines.iter().enumerate() {
        match state {
            ScanState::Seeking => {
                if mode.is_begin(name, line) {
                    let begin = match mode {
                        SpanMode::Assignment => idx,
                        SpanMode::Function => idx + 1,
                    };
                    state = ScanState::InSpan { begin };
                }
            }
            ScanState::InSpan { begin } => {
                if mode.is_end(line) {
                    return Some(Span::new(&lines, begin..idx));
                }
            }
        }
    }

    match state {
        ScanState::InSpan { begin } => Some(Span::new(&lines, begin..lines.len())),
        ScanState::Seeking => None,
    }
}

/// Text of the assignment to `name`, or an empty string if it is not set
pub fn extract_assignment(name: &str, region: &str) -> String {
    locate(name, region, SpanMode::Assignment)
        .map(|span| span.text())
        .unwrap_or_default()
}

/// Body of the shell function `name`, or an empty string if it is not defined
///
/// The body is returned verbatim; it is opaque to this crate. A one-line
/// definition such as `build() { make; }` yields its inline commands as a
/// single newline-terminated line.
pub fn extract_function(name: &str, region: &str) -> String {
    locate(name, region, SpanMode::Function)
        .map(|span| span.body())
        .or_else(|| inline_function(name, region))
        .unwrap_or_default()
}

fn inline_function(name: &str, region: &str) -> Option<String> {
    region.split('\n').find_map(|line| {
        let inner = function_header_rest(name, line)?
            .trim_end()
            .strip_suffix('}')?
            .trim();
        Some(if inner.is_empty() {
            String::new()
        } else {
            format!("{}\n", inner)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_single_line_assignment() {
        let content = "pkgname=nano\npkgver=8.5\npkgrel=2\n";
        let span = locate("pkgver", content, SpanMode::Assignment).unwrap();
        assert_eq!(span.range(), 1..2);
        assert_eq!(span.text(), "pkgver=8.5");
    }

    #[test]
    fn test_locate_first_line_is_found() {
        let span = locate("pkgname", "pkgname=nano\npkgver=8.5", SpanMode::Assignment).unwrap();
        assert_eq!(span.range(), 0..1);
        assert_eq!(span.text(), "pkgname=nano");
    }

    #[test]
    fn test_locate_trailing_assignment_without_newline() {
        let span = locate("pkgrel", "pkgver=8.5\npkgrel=2", SpanMode::Assignment).unwrap();
        assert_eq!(span.text(), "pkgrel=2");
    }

    #[test]
    fn test_locate_multiline_array() {
        let content = "\
depends=('glibc'
         'ncurses'
         'file')
makedepends=('gcc')";
        let span = locate("depends", content, SpanMode::Assignment).unwrap();
        assert_eq!(span.range(), 0..3);
        assert_eq!(span.lines()[2].trim(), "'file')");
    }

    #[test]
    fn test_locate_indented_assignment() {
        let content = "package_foo() {\n  pkgdesc='Foo'\n  depends=('bar')\n}";
        assert_eq!(extract_assignment("pkgdesc", content), "  pkgdesc='Foo'");
    }

    #[test]
    fn test_assignment_ends_at_blank_line() {
        let content = "url='https://example.com'\n# comment\n\nlicense=('GPL')";
        let span = locate("url", content, SpanMode::Assignment).unwrap();
        assert_eq!(span.range(), 0..2);
    }

    #[test]
    fn test_assignment_ends_at_function_header() {
        let content = "pkgrel=1\nbuild() {\n  make\n}";
        assert_eq!(extract_assignment("pkgrel", content), "pkgrel=1");
    }

    #[test]
    fn test_prefix_names_do_not_match() {
        let content = "makedepends=('gcc')\n";
        assert!(locate("depends", content, SpanMode::Assignment).is_none());
        assert_eq!(extract_assignment("depends", content), "");
    }

    #[test]
    fn test_extract_function_body() {
        assert_eq!(extract_function("build", "build() {\n  make\n}"), "  make\n");
    }

    #[test]
    fn test_extract_function_skips_other_functions() {
        let content = "\
prepare() {
  patch -p1 < fix.patch
}

build() {
  ./configure --prefix=/usr
  make
}";
        assert_eq!(
            extract_function("build", content),
            "  ./configure --prefix=/usr\n  make\n"
        );
    }

    #[test]
    fn test_extract_function_missing() {
        assert_eq!(extract_function("check", "build() {\n  make\n}"), "");
        assert_eq!(extract_function("build", ""), "");
    }

    #[test]
    fn test_extract_function_empty_body() {
        assert_eq!(extract_function("check", "check() {\n}\n"), "");
    }

    #[test]
    fn test_function_header_requires_line_start() {
        let content = "  build() {\n  make\n}";
        assert!(locate("build", content, SpanMode::Function).is_none());
    }

    #[test]
    fn test_one_line_function_does_not_absorb_next() {
        let content = "build() { make; }\n\npackage() {\n  install\n}\n";
        assert!(locate("build", content, SpanMode::Function).is_none());
        assert_eq!(extract_function("build", content), "make;\n");
        assert_eq!(extract_function("package", content), "  install\n");
    }

    #[test]
    fn test_header_with_trailing_commands_is_not_a_block() {
        let content = "check() { make test\n}\n";
        assert!(locate("check", content, SpanMode::Function).is_none());
        assert_eq!(extract_function("check", content), "");
    }

    #[test]
    fn test_pkgver_function_and_variable_are_distinct() {
        let content = "pkgver=1.0\n\npkgver() {\n  git describe\n}\n";
        assert_eq!(extract_assignment("pkgver", content), "pkgver=1.0");
        assert_eq!(extract_function("pkgver", content), "  git describe\n");
    }
}

// src/recipe/value.rs

//! Decoding of PKGBUILD assignment values
//!
//! The same variable can be written as a scalar or as an array depending on
//! the PKGBUILD, so the shape of a value is inferred from its text:
//!
//! ```bash
//! pkgver=8.5                                  # Scalar("8.5")
//! pkgdesc="A small text editor"               # Scalar("A small text editor")
//! arch=('x86_64' 'aarch64')                   # List(["x86_64", "aarch64"])
//! arch=(x86_64 aarch64)                       # List(["x86_64", "aarch64"])
//! optdepends=('bash: shell completion')       # Note
//! optdepends=('bash: completion'
//!             'python: helper scripts')       # NoteList
//! ```
//!
//! Note shapes are only produced for fields listed in
//! [`ParserConfig::note_fields`]; everywhere else a colon is ordinary text.

use crate::recipe::config::ParserConfig;
use crate::recipe::field::Field;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static NOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^([^:]+):\s+(.*)$").unwrap());

/// An optional dependency with the reason it is wanted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyNote {
    pub pkgname: String,
    pub desc: String,
}

impl DependencyNote {
    pub fn new(pkgname: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            pkgname: pkgname.into(),
            desc: desc.into(),
        }
    }

    /// Parse `"name: description"`, returning `None` for any other shape
    pub fn parse(s: &str) -> Option<Self> {
        let caps = NOTE_RE.captures(s)?;
        Some(Self::new(&caps[1], &caps[2]))
    }
}

impl fmt::Display for DependencyNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pkgname, self.desc)
    }
}

/// Decoded value of one PKGBUILD field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Not set, or set to nothing
    #[default]
    Absent,
    Scalar(String),
    List(Vec<String>),
    Note(DependencyNote),
    NoteList(Vec<DependencyNote>),
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Flatten to plain strings; notes contribute their package name
    pub fn values(&self) -> Vec<&str> {
        match self {
            FieldValue::Absent => Vec::new(),
            FieldValue::Scalar(s) => vec![s.as_str()],
            FieldValue::List(items) => items.iter().map(String::as_str).collect(),
            FieldValue::Note(note) => vec![note.pkgname.as_str()],
            FieldValue::NoteList(notes) => notes.iter().map(|n| n.pkgname.as_str()).collect(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => Ok(()),
            FieldValue::Scalar(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(" ")),
            FieldValue::Note(note) => write!(f, "{}", note),
            FieldValue::NoteList(notes) => {
                for (i, note) in notes.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", note)?;
                }
                Ok(())
            }
        }
    }
}

// Absent serializes as the empty string so records keep one slot per field.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Absent => serializer.serialize_str(""),
            FieldValue::Scalar(s) => s.serialize(serializer),
            FieldValue::List(items) => items.serialize(serializer),
            FieldValue::Note(note) => note.serialize(serializer),
            FieldValue::NoteList(notes) => notes.serialize(serializer),
        }
    }
}

/// A field whose text could not be decoded
///
/// These are collected per field so one malformed assignment does not discard
/// the rest of the record.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldError {
    #[error("{field}: array is never closed: {span}")]
    UnclosedArray { field: Field, span: String },

    #[error("{field}: expected 'name: description', found '{token}'")]
    MalformedNote { field: Field, token: String },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::UnclosedArray { field, .. } | FieldError::MalformedNote { field, .. } => {
                *field
            }
        }
    }
}

/// Decode the span text of an assignment to `field`
pub fn decode(field: Field, span: &str, config: &ParserConfig) -> Result<FieldValue, FieldError> {
    if span.is_empty() {
        return Ok(FieldValue::Absent);
    }

    let Some(text) = assigned_text(field, span)? else {
        return Ok(FieldValue::Absent);
    };

    let tokens = quoted_tokens(&text);
    let notes = config.is_note_field(field);

    match tokens.as_slice() {
        [] => {
            let text = text.trim();
            if text.is_empty() {
                Ok(FieldValue::Absent)
            } else if text.contains(char::is_whitespace) {
                Ok(FieldValue::List(
                    text.split_whitespace().map(str::to_string).collect(),
                ))
            } else {
                Ok(FieldValue::Scalar(text.to_string()))
            }
        }
        [single] => {
            if single.is_empty() {
                return Ok(FieldValue::Absent);
            }
            match DependencyNote::parse(single).filter(|_| notes) {
                Some(note) => Ok(FieldValue::Note(note)),
                None => Ok(FieldValue::Scalar(single.to_string())),
            }
        }
        [first, ..] => {
            // The first entry decides the shape of the whole array.
            if notes && DependencyNote::parse(first).is_some() {
                tokens
                    .iter()
                    .map(|token| {
                        DependencyNote::parse(token).ok_or_else(|| FieldError::MalformedNote {
                            field,
                            token: token.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(FieldValue::NoteList)
            } else {
                Ok(FieldValue::List(tokens.iter().map(|t| t.to_string()).collect()))
            }
        }
    }
}

/// Text assigned to `field`, with array parentheses removed
///
/// Returns `None` if the span does not start with `field=`.
fn assigned_text(field: Field, span: &str) -> Result<Option<String>, FieldError> {
    let (first, rest) = match span.split_once('\n') {
        Some((first, rest)) => (first, Some(rest)),
        None => (span, None),
    };

    let Some(value) = first
        .trim_start()
        .strip_prefix(field.as_str())
        .and_then(|v| v.strip_prefix('='))
    else {
        return Ok(None);
    };

    match (rest, value.trim_start().strip_prefix('(')) {
        (Some(rest), Some(opened)) => {
            let text = format!("{}\n{}", opened, rest);
            match array_contents(&text) {
                Some(contents) => Ok(Some(contents)),
                None => Err(FieldError::UnclosedArray {
                    field,
                    span: span.to_string(),
                }),
            }
        }
        // Single-line values may or may not be arrays: `arch=('any')` and
        // `pkgdesc="..."` look the same apart from the parentheses.
        _ => {
            let value = value.trim();
            let value = value.strip_prefix('(').unwrap_or(value);
            let value = value.strip_suffix(')').unwrap_or(value);
            Ok(Some(value.to_string()))
        }
    }
}

/// Text of a multi-line array up to its closing `)`, with comments removed
///
/// The closing paren is the first `)` outside quotes and not backslash-escaped.
/// An unquoted `#` at the start of a word comments out the rest of its line,
/// so apostrophes in commented entries don't open a quote.
fn array_contents(text: &str) -> Option<String> {
    let mut contents = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut comment = false;

    for (idx, c) in text.char_indices() {
        if comment {
            if c == '\n' {
                comment = false;
                contents.push(c);
            }
            continue;
        }
        if escaped {
            escaped = false;
            contents.push(c);
            continue;
        }
        match (quote, c) {
            (Some('\''), '\'') => quote = None,
            (Some('\''), _) => {}
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (None, '#') if idx == 0 || text[..idx].ends_with(char::is_whitespace) => {
                comment = true;
                continue;
            }
            (None, '\'' | '"') => quote = Some(c),
            (None, ')') => return Some(contents),
            _ => {}
        }
        contents.push(c);
    }

    None
}

/// Contents of every `'...'` or `"..."` token, in order
fn quoted_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(['\'', '"']) {
        let quote = &rest[open..open + 1];
        let after = &rest[open + 1..];
        match after.find(quote) {
            Some(close) => {
                tokens.push(&after[..close]);
                rest = &after[close + 1..];
            }
            None => break,
        }
    }

    tokens
}

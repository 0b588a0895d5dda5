// src/commands/mod.rs
//! Command handlers for the conary-pkgbuild CLI

mod inspect;
mod subpackages;

pub use inspect::{cmd_field, cmd_function, cmd_show};
pub use subpackages::cmd_subpackages;

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use conary_pkgbuild::recipe::read_pkgbuild_with;
use conary_pkgbuild::{Field, FieldValue, Function, ParserConfig, Pkgbuild};
use std::path::Path;
use tracing::{debug, info};

/// Load the parser configuration, or the defaults if no path was given
pub fn load_config(path: Option<&str>) -> Result<ParserConfig> {
    match path {
        Some(path) => {
            info!("Loading parser config from {}", path);
            ParserConfig::load(Path::new(path))
                .with_context(|| format!("Failed to load parser config: {}", path))
        }
        None => Ok(ParserConfig::default()),
    }
}

/// Read and parse a PKGBUILD, printing per-field failures as warnings
fn load_pkgbuild(path: &str, config: &ParserConfig) -> Result<Pkgbuild> {
    debug!("Parsing PKGBUILD: {}", path);
    let pkg = read_pkgbuild_with(Path::new(path), config)
        .with_context(|| format!("Failed to load PKGBUILD: {}", path))?;

    for failure in &pkg.failures {
        eprintln!("Warning: {}", failure);
    }

    Ok(pkg)
}

/// Render a record in the requested format
fn render(pkg: &Pkgbuild, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(pkg)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(pkg).context("Failed to serialize record to JSON")
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(pkg).context("Failed to serialize record to TOML")
        }
    }
}

fn render_text(pkg: &Pkgbuild) -> String {
    let mut out = String::new();

    if let Some(name) = pkg.name() {
        out.push_str(&format!("Name         : {}\n", name));
    }
    if let Some(version) = pkg.full_version() {
        out.push_str(&format!("Version      : {}\n", version));
    }

    for field in Field::ALL {
        let value = pkg.field(field);
        match value {
            FieldValue::Absent => {}
            FieldValue::NoteList(notes) => {
                out.push_str(&format!("{:<12} :\n", field));
                for note in notes {
                    out.push_str(&format!("    {}\n", note));
                }
            }
            // One hash per line, in source order
            _ if field.is_checksum() => {
                out.push_str(&format!("{:<12} :\n", field));
                for sum in value.values() {
                    out.push_str(&format!("    {}\n", sum));
                }
            }
            _ => out.push_str(&format!("{:<12} : {}\n", field, value)),
        }
    }

    let defined: Vec<&str> = Function::ALL
        .iter()
        .filter(|func| !pkg.function(**func).is_empty())
        .map(|func| func.as_str())
        .collect();
    if !defined.is_empty() {
        out.push_str(&format!("Functions    : {}\n", defined.join(", ")));
    }

    if pkg.is_split() {
        let names: Vec<&str> = pkg.subpackages.iter().map(|s| s.name.as_str()).collect();
        out.push_str(&format!("Sub-packages : {}\n", names.join(", ")));
    }
    if !pkg.macros.is_empty() {
        out.push_str(&format!("Macros       : {}\n", pkg.macros.len()));
    }

    out
}

// src/commands/inspect.rs

//! Commands that print a parsed PKGBUILD or parts of it

use super::{load_pkgbuild, render};
use crate::cli::OutputFormat;
use anyhow::Result;
use conary_pkgbuild::{Field, Function, ParserConfig};

/// Parse a PKGBUILD and print the whole record
///
/// # Arguments
/// * `pkgbuild_path` - Path to the PKGBUILD file
/// * `format` - Output format
pub fn cmd_show(pkgbuild_path: &str, format: OutputFormat, config: &ParserConfig) -> Result<()> {
    let pkg = load_pkgbuild(pkgbuild_path, config)?;
    let output = render(&pkg, format)?;
    print!("{}", output);

    if !pkg.failures.is_empty() {
        eprintln!(
            "{} field(s) could not be decoded - review the PKGBUILD",
            pkg.failures.len()
        );
    }

    Ok(())
}

/// Print one decoded field
pub fn cmd_field(pkgbuild_path: &str, name: &str, config: &ParserConfig) -> Result<()> {
    let field: Field = name.parse()?;
    let pkg = load_pkgbuild(pkgbuild_path, config)?;

    let value = pkg.field(field);
    if value.is_absent() {
        eprintln!("{} is not set", field);
        return Ok(());
    }

    println!("{}", value);
    Ok(())
}

/// Print a function body verbatim
pub fn cmd_function(pkgbuild_path: &str, name: &str, config: &ParserConfig) -> Result<()> {
    let func: Function = name.parse()?;
    let pkg = load_pkgbuild(pkgbuild_path, config)?;

    let body = pkg.function(func);
    if body.is_empty() {
        eprintln!("{}() is not defined", func);
        return Ok(());
    }

    print!("{}", body);
    Ok(())
}

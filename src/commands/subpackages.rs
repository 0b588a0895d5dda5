// src/commands/subpackages.rs

//! Split package listing

use super::{load_pkgbuild, render};
use crate::cli::OutputFormat;
use anyhow::Result;
use conary_pkgbuild::ParserConfig;

/// List the sub-packages of a split PKGBUILD
///
/// With `parse`, each block's own overrides are decoded and printed. Values a
/// block does not set are shown as absent, not inherited from the main package.
pub fn cmd_subpackages(
    pkgbuild_path: &str,
    parse: bool,
    format: OutputFormat,
    config: &ParserConfig,
) -> Result<()> {
    let pkg = load_pkgbuild(pkgbuild_path, config)?;

    if !pkg.is_split() {
        println!("No sub-packages in {}", pkgbuild_path);
        return Ok(());
    }

    for sub in &pkg.subpackages {
        if !parse {
            println!("{} (lines {}-{})", sub.name, sub.lines.start + 1, sub.lines.end);
            continue;
        }

        let record = sub.parse(config);
        for failure in &record.failures {
            eprintln!("Warning: package_{}: {}", sub.name, failure);
        }

        println!("[package_{}]", sub.name);
        print!("{}", render(&record, format)?);
        println!();
    }

    Ok(())
}

// src/cli.rs
//! CLI definitions for conary-pkgbuild
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "conary-pkgbuild")]
#[command(author = "Conary Project")]
#[command(version)]
#[command(about = "Extract metadata from Arch Linux PKGBUILDs", long_about = None)]
pub struct Cli {
    /// Parser configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for parsed records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Toml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a PKGBUILD and print the extracted record
    Show {
        /// Path to the PKGBUILD file
        pkgbuild: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a single decoded field
    Field {
        /// Path to the PKGBUILD file
        pkgbuild: String,

        /// Field name (e.g. pkgver, depends, optdepends)
        name: String,
    },

    /// Print the body of a build function
    Function {
        /// Path to the PKGBUILD file
        pkgbuild: String,

        /// Function name (prepare, build, check, package, pkgver)
        name: String,
    },

    /// List the package_<name>() blocks of a split PKGBUILD
    Subpackages {
        /// Path to the PKGBUILD file
        pkgbuild: String,

        /// Parse each block's own overrides
        #[arg(long)]
        parse: bool,

        /// Output format when parsing
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: PKGBUILD path
fn pkgbuild_arg() -> Arg {
    Arg::new("pkgbuild")
        .required(true)
        .value_name("PKGBUILD")
        .help("Path to the PKGBUILD file")
}

/// Common argument: output format
fn format_arg() -> Arg {
    Arg::new("format")
        .short('f')
        .long("format")
        .value_parser(["text", "json", "toml"])
        .default_value("text")
        .help("Output format")
}

fn build_cli() -> Command {
    Command::new("conary-pkgbuild")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Conary Contributors")
        .about("Extract metadata from Arch Linux PKGBUILDs")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Parser configuration file (TOML)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .help("Enable debug logging (overridden by RUST_LOG)"),
        )
        .subcommand(
            Command::new("show")
                .about("Parse a PKGBUILD and print the extracted record")
                .arg(pkgbuild_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("field")
                .about("Print a single decoded field")
                .arg(pkgbuild_arg())
                .arg(Arg::new("name").required(true).help("Field name (e.g. pkgver, depends)")),
        )
        .subcommand(
            Command::new("function")
                .about("Print the body of a build function")
                .arg(pkgbuild_arg())
                .arg(
                    Arg::new("name")
                        .required(true)
                        .value_parser(["prepare", "build", "check", "package", "pkgver"])
                        .help("Function name"),
                ),
        )
        .subcommand(
            Command::new("subpackages")
                .about("List the package_<name>() blocks of a split PKGBUILD")
                .arg(pkgbuild_arg())
                .arg(
                    Arg::new("parse")
                        .long("parse")
                        .action(clap::ArgAction::SetTrue)
                        .help("Parse each block's own overrides"),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("conary-pkgbuild.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}

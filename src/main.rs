// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber for logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Show { pkgbuild, format }) => commands::cmd_show(&pkgbuild, format, &config),
        Some(Commands::Field { pkgbuild, name }) => commands::cmd_field(&pkgbuild, &name, &config),
        Some(Commands::Function { pkgbuild, name }) => {
            commands::cmd_function(&pkgbuild, &name, &config)
        }
        Some(Commands::Subpackages {
            pkgbuild,
            parse,
            format,
        }) => commands::cmd_subpackages(&pkgbuild, parse, format, &config),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "conary-pkgbuild",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        None => {
            // No command provided, show help
            println!("conary-pkgbuild v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'conary-pkgbuild --help' for usage information");
            Ok(())
        }
    }
}

mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{include, init, inject, IncludeArgs, InitArgs, InjectArgs};
use tracing_subscriber::EnvFilter;

/// Mixin CLI - compose classes by forwarding to mixin fields
#[derive(Parser, Debug)]
#[command(name = "mixin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a mixin.config.json
    Init(InitArgs),

    /// Generate the members a target needs to expose a mixin field
    Include(IncludeArgs),

    /// Thread a mixin field through the target's constructors
    Inject(InjectArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Include(args) => include(args, &cwd),
                Command::Inject(args) => inject(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

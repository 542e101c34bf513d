use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mixin_codegen::Settings;
use mixin_resolver::IndexerPolicy;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Option preset (default, minimal, full)
    #[arg(short, long, default_value = "default")]
    pub preset: String,

    /// Match indexers by parameter types instead of treating all as one
    #[arg(long)]
    pub strict_indexers: bool,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let settings = match args.preset.as_str() {
        "default" => Settings::default(),
        "minimal" => Settings::minimal(),
        "full" => Settings::full(),
        other => {
            return Err(anyhow::anyhow!(
                "Invalid preset: {}. Use: default, minimal, or full",
                other
            ));
        }
    };

    let config = Config {
        settings,
        indexer_policy: if args.strict_indexers {
            IndexerPolicy::BySignature
        } else {
            IndexerPolicy::AnyIndexer
        },
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  1. Describe your types in a JSON file");
    println!("  2. Run: mixin include types.json --target Person --field _name");

    Ok(())
}

pub mod include;
pub mod init;
pub mod inject;

pub use include::{include, IncludeArgs};
pub use init::{init, InitArgs};
pub use inject::{inject, InjectArgs};

use anyhow::{Context, Result};
use clap::Args;
use mixin_codegen::Settings;
use mixin_model::{ClassId, ClassTable, MixinReference, TypeReader};
use std::fs;
use std::path::PathBuf;

/// Arguments naming the target class and its mixin field
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// JSON file describing the types involved
    pub description: PathBuf,

    /// Class receiving the forwarders
    #[arg(short, long)]
    pub target: String,

    /// Field of the target holding the mixin
    #[arg(short, long)]
    pub field: String,

    /// Print machine-readable JSON instead of code
    #[arg(long)]
    pub json: bool,
}

/// Option overrides on top of the config file
#[derive(Debug, Default, Args)]
pub struct SettingsArgs {
    /// Copy documentation comments onto forwarders
    #[arg(long)]
    pub documentation: bool,

    /// Wrap forwarders in a region
    #[arg(long)]
    pub regions: bool,

    /// Keep accessors on a single line
    #[arg(long)]
    pub single_line: bool,

    /// List the mixin's interfaces to add to the target
    #[arg(long)]
    pub interfaces: bool,

    /// Skip constructor injection
    #[arg(long)]
    pub no_inject: bool,
}

impl SettingsArgs {
    pub fn apply(&self, mut settings: Settings) -> Settings {
        settings.include_documentation |= self.documentation;
        settings.create_regions |= self.regions;
        settings.avoid_line_breaks_in_properties |= self.single_line;
        settings.add_interfaces_to_child |= self.interfaces;
        if self.no_inject {
            settings.inject_mixins = false;
        }
        settings
    }
}

/// Target class and mixin reference read from a description file
pub struct Loaded {
    pub table: ClassTable,
    pub target: ClassId,
    pub reference: Option<MixinReference>,
}

pub fn load(args: &TargetArgs, cwd: &str) -> Result<Loaded> {
    let path = PathBuf::from(cwd).join(&args.description);
    let json = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read {}", path.display()))?;

    let mut reader = TypeReader::from_json(&json)
        .with_context(|| format!("Invalid type description {}", path.display()))?;
    let mut table = ClassTable::new();
    let target = reader.read_target(&mut table, &args.target)?;
    let reference = reader.read_mixin_reference(&mut table, target, &args.field)?;

    Ok(Loaded {
        table,
        target,
        reference,
    })
}

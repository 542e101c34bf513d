use super::include::print_injection;
use super::{load, TargetArgs};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mixin_codegen::write_constructors;
use mixin_injection::ConstructorInjector;
use serde_json::json;

#[derive(Debug, Args)]
pub struct InjectArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

pub fn inject(args: InjectArgs, cwd: &str) -> Result<()> {
    let loaded = load(&args.target, cwd)?;

    let Some(reference) = loaded.reference else {
        println!(
            "{} {}.{} does not hold a mixin",
            "⚠️".yellow(),
            args.target.target,
            args.target.field
        );
        return Ok(());
    };

    let class = loaded.table.get(loaded.target);
    let injection = ConstructorInjector::new(&reference).inject(&class.constructors);
    let code = write_constructors(&class.name, &injection.constructors);

    if args.target.json {
        let output = json!({
            "report": injection.report,
            "constructors": injection.constructors,
            "code": code,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_injection(&injection.report, &code);
    Ok(())
}

use super::{load, SettingsArgs, TargetArgs};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mixin_codegen::{
    write_constructors, write_members, ForwardingGenerator, GeneratedMember, ModuleVisibility,
    Settings,
};
use mixin_injection::{ConstructorInjector, InjectionReport};
use mixin_model::{ClassId, ClassTable, Constructor, MixinReference};
use mixin_resolver::{interfaces_to_add, MemberComparer, Mixer};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct IncludeArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Everything one mixin inclusion produces for the target
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeOutput {
    pub reference: String,
    pub members: Vec<GeneratedMember>,
    pub code: String,
    pub interfaces: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injection: Option<InjectionOutput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InjectionOutput {
    pub report: InjectionReport,
    pub constructors: Vec<Constructor>,
    pub code: String,
}

pub fn include(args: IncludeArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let settings = args.settings.apply(config.settings.clone());
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

    let comparer = MemberComparer::new(config.indexer_policy);
    let output = compose(&loaded.table, loaded.target, &reference, &settings, comparer);

    if args.target.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_output(&output, &loaded.table.get(loaded.target).name);
    Ok(())
}

/// Resolve, forward and optionally inject one mixin into `target`.
pub fn compose(
    table: &ClassTable,
    target: ClassId,
    reference: &MixinReference,
    settings: &Settings,
    comparer: MemberComparer,
) -> IncludeOutput {
    let mixer = Mixer::new(table).with_comparer(comparer);
    let members = mixer.include_reference(Some(reference), target);

    let target_class = table.get(target);
    let visibility = ModuleVisibility::new(table, target_class.module.clone());
    let generator = ForwardingGenerator::new(&reference.name, settings, &visibility);
    let generated = generator.generate_all(&members);
    let code = if generated.is_empty() {
        String::new()
    } else {
        write_members(&generated, &reference.name, settings)
    };

    let interfaces = if settings.add_interfaces_to_child {
        interfaces_to_add(table, reference.class, target)
            .into_iter()
            .map(|interface| interface.name)
            .collect()
    } else {
        Vec::new()
    };

    let injection = settings.inject_mixins.then(|| {
        let injection = ConstructorInjector::new(reference).inject(&target_class.constructors);
        InjectionOutput {
            code: write_constructors(&target_class.name, &injection.constructors),
            report: injection.report,
            constructors: injection.constructors,
        }
    });

    IncludeOutput {
        reference: reference.name.clone(),
        members: generated,
        code,
        interfaces,
        injection,
    }
}

fn print_output(output: &IncludeOutput, class_name: &str) {
    if output.members.is_empty() {
        println!(
            "{} Nothing to include, {} already exposes {}",
            "⚠️".yellow(),
            class_name.bright_white(),
            output.reference
        );
    } else {
        println!(
            "{}",
            format!("🔗 {} forwarding members", output.members.len())
                .bright_blue()
                .bold()
        );
        println!();
        print!("{}", output.code);
    }

    if !output.interfaces.is_empty() {
        println!();
        println!("{}", "Interfaces to add:".bright_blue().bold());
        for interface in &output.interfaces {
            println!("  {} {}", "+".green(), interface);
        }
    }

    if let Some(injection) = &output.injection {
        println!();
        print_injection(&injection.report, &injection.code);
    }
}

pub fn print_injection(report: &InjectionReport, code: &str) {
    if report.is_unchanged() {
        println!(
            "{} Constructors already take {}",
            "✓".green(),
            report.parameter_name
        );
        return;
    }

    println!("{}", "🧩 Constructors".bright_blue().bold());
    if report.constructor_synthesized {
        println!("  {} Added a constructor", "✓".green());
    } else {
        println!(
            "  {} {} parameters, {} assignments, {} initializers",
            "✓".green(),
            report.parameters_added,
            report.assignments_added,
            report.initializers_rewritten
        );
    }
    println!();
    print!("{}", code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixin_model::TypeReader;

    fn read(json: &str) -> (ClassTable, ClassId, MixinReference) {
        let mut reader = TypeReader::from_json(json).unwrap();
        let mut table = ClassTable::new();
        let person = reader.read_target(&mut table, "Person").unwrap();
        let reference = reader
            .read_mixin_reference(&mut table, person, "_name")
            .unwrap()
            .unwrap();
        (table, person, reference)
    }

    const PEOPLE: &str = r#"{
        "types": [
            { "name": "Name", "module": "Core", "interfaces": ["INamed"], "members": [
                { "kind": "property", "name": "FirstName", "type": "string" },
                { "kind": "property", "name": "LastName", "type": "string", "get": "public", "set": "internal" }
            ] },
            { "name": "Person", "module": "App",
              "fields": [ { "name": "_name", "type": "Name" } ],
              "constructors": [ { "parameters": [ { "name": "age", "type": "int" } ] } ] }
        ]
    }"#;

    #[test]
    fn test_compose_forwards_and_injects() {
        let (table, person, reference) = read(PEOPLE);

        let output = compose(
            &table,
            person,
            &reference,
            &Settings::default(),
            MemberComparer::default(),
        );

        assert_eq!(output.members.len(), 2);
        // Internal setter of another module is not reachable from Person
        assert!(output.members[1].is_read_only());
        assert!(output.code.contains("public string LastName => _name.LastName;"));
        assert!(output.interfaces.is_empty());

        let injection = output.injection.unwrap();
        assert_eq!(injection.report.parameters_added, 1);
        assert!(injection.code.contains("public Person(int age, Name name = null)"));
    }

    #[test]
    fn test_compose_lists_interfaces_without_injection() {
        let (table, person, reference) = read(PEOPLE);
        let settings = Settings {
            add_interfaces_to_child: true,
            inject_mixins: false,
            ..Settings::default()
        };

        let output = compose(&table, person, &reference, &settings, MemberComparer::default());

        assert_eq!(output.interfaces, vec!["INamed"]);
        assert!(output.injection.is_none());
    }
}

//! Text rendering of generated members and constructors.

use crate::generated::{Accessor, AccessorKind, GeneratedBody, GeneratedMember, Layout, Signature};
use crate::options::Settings;
use mixin_model::{Argument, Constructor, InitializerKind, Parameter};

const INDENT: &str = "    ";

/// Line buffer that prefixes every line with the current indentation
#[derive(Debug, Default)]
pub struct CodeWriter {
    output: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.output.push('\n');
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.output
    }
}

/// Render the forwarders for one mixin reference, separated by blank lines.
pub fn write_members(members: &[GeneratedMember], reference: &str, settings: &Settings) -> String {
    let mut writer = CodeWriter::new();

    if settings.create_regions {
        writer.line(&format!("#region mixin {}", reference));
    }

    for (index, member) in members.iter().enumerate() {
        if index > 0 {
            writer.blank_line();
        }
        write_member(member, &mut writer);
    }

    if settings.create_regions {
        writer.line("#endregion");
    }

    writer.finish()
}

pub fn write_member(member: &GeneratedMember, writer: &mut CodeWriter) {
    if let Some(documentation) = &member.documentation {
        for line in &documentation.lines {
            writer.line(&format!("/// {}", line));
        }
    }

    let header = member_header(member);
    match &member.body {
        GeneratedBody::Expression(expression) => {
            writer.line(&format!("{} => {};", header, expression));
        }
        GeneratedBody::Accessors(accessors) => match member.layout {
            Layout::SingleLine => {
                let rendered: Vec<String> = accessors.iter().map(single_line_accessor).collect();
                writer.line(&format!("{} {{ {} }}", header, rendered.join(" ")));
            }
            Layout::MultiLine => {
                writer.line(&header);
                writer.line("{");
                writer.indent();
                for accessor in accessors {
                    writer.line(&block_accessor(accessor));
                }
                writer.dedent();
                writer.line("}");
            }
        },
    }
}

fn member_header(member: &GeneratedMember) -> String {
    let mut modifiers = member.accessibility.keyword().to_string();
    if member.is_override {
        modifiers.push_str(" override");
    }

    match &member.signature {
        Signature::Property { type_name } => format!("{} {} {}", modifiers, type_name, member.name),
        Signature::Indexer {
            type_name,
            parameters,
        } => format!("{} {} this[{}]", modifiers, type_name, parameter_list(parameters)),
        Signature::Method {
            return_type,
            parameters,
        } => format!(
            "{} {} {}({})",
            modifiers,
            return_type,
            member.name,
            parameter_list(parameters)
        ),
        Signature::Event { event_type } => {
            format!("{} event {} {}", modifiers, event_type, member.name)
        }
    }
}

fn accessor_keyword(accessor: &Accessor) -> String {
    if accessor.is_internal {
        format!("internal {}", accessor.kind.keyword())
    } else {
        accessor.kind.keyword().to_string()
    }
}

fn single_line_accessor(accessor: &Accessor) -> String {
    format!("{} => {};", accessor_keyword(accessor), accessor.expression)
}

fn block_accessor(accessor: &Accessor) -> String {
    match accessor.kind {
        AccessorKind::Get => format!("{} {{ return {}; }}", accessor_keyword(accessor), accessor.expression),
        _ => format!("{} {{ {}; }}", accessor_keyword(accessor), accessor.expression),
    }
}

fn parameter_list(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|p| format!("{} {}", p.type_name, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render constructors of `class_name`, separated by blank lines.
pub fn write_constructors(class_name: &str, constructors: &[Constructor]) -> String {
    let mut writer = CodeWriter::new();
    for (index, constructor) in constructors.iter().enumerate() {
        if index > 0 {
            writer.blank_line();
        }
        write_constructor(class_name, constructor, &mut writer);
    }
    writer.finish()
}

pub fn write_constructor(class_name: &str, constructor: &Constructor, writer: &mut CodeWriter) {
    let parameters: Vec<String> = constructor
        .parameters
        .iter()
        .map(|p| match &p.default_value {
            Some(default) => format!("{} {} = {}", p.type_name, p.name, default),
            None => format!("{} {}", p.type_name, p.name),
        })
        .collect();

    let mut header = if constructor.is_static {
        format!("static {}({})", class_name, parameters.join(", "))
    } else {
        format!(
            "{} {}({})",
            constructor.accessibility.keyword(),
            class_name,
            parameters.join(", ")
        )
    };

    if let Some(initializer) = &constructor.initializer {
        let keyword = match initializer.kind {
            InitializerKind::This => "this",
            InitializerKind::Base => "base",
        };
        let arguments: Vec<String> = initializer.arguments.iter().map(argument).collect();
        header.push_str(&format!(" : {}({})", keyword, arguments.join(", ")));
    }

    writer.line(&header);
    writer.line("{");
    writer.indent();
    for statement in &constructor.body {
        writer.line(statement);
    }
    writer.dedent();
    writer.line("}");
}

fn argument(argument: &Argument) -> String {
    match &argument.name {
        Some(name) => format!("{}: {}", name, argument.expression),
        None => argument.expression.clone(),
    }
}

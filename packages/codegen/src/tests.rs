use crate::{
    write_constructors, write_members, AccessorKind, AccessorVisibility, AllVisible,
    ForwardingGenerator, GeneratedBody, Layout, ModuleVisibility, Settings,
};
use mixin_model::{
    Argument, Class, ClassTable, Constructor, ConstructorInitializer, ConstructorParameter,
    Documentation, Member, Method, Parameter, Property,
};

struct InternalHidden;

impl AccessorVisibility for InternalHidden {
    fn can_access_internal(&self, _member: &Member) -> bool {
        false
    }
}

fn render(member: Member, reference: &str, settings: &Settings) -> String {
    let generator = ForwardingGenerator::new(reference, settings, &AllVisible);
    let generated = generator.generate_all(&[member]);
    write_members(&generated, reference, settings)
}

#[test]
fn test_read_only_property_is_expression_bodied() {
    let member = Member::property("FullName", Property::read_only("string"));

    let result = render(member, "_name", &Settings::default());

    assert_eq!(result, "public string FullName => _name.FullName;\n");
}

#[test]
fn test_read_write_property_has_both_accessors() {
    let member = Member::property("FirstName", Property::new("string"));

    let result = render(member, "_name", &Settings::default());

    println!("Generated code:\n{}", result);
    assert_eq!(
        result,
        "public string FirstName\n{\n    get { return _name.FirstName; }\n    set { _name.FirstName = value; }\n}\n"
    );
}

#[test]
fn test_single_line_accessors() {
    let settings = Settings {
        avoid_line_breaks_in_properties: true,
        ..Settings::default()
    };
    let member = Member::property("FirstName", Property::new("string"));

    let result = render(member, "_name", &settings);

    assert_eq!(
        result,
        "public string FirstName { get => _name.FirstName; set => _name.FirstName = value; }\n"
    );
}

#[test]
fn test_unreachable_internal_setter_forwards_read_only() {
    let settings = Settings::default();
    let member = Member::property("LastName", Property::new("string").with_internal_setter());
    let generator = ForwardingGenerator::new("_name", &settings, &InternalHidden);

    let generated = generator.generate(&member).unwrap();

    assert!(generated.is_read_only());
    assert_eq!(
        generated.body,
        GeneratedBody::Expression("_name.LastName".to_string())
    );
}

#[test]
fn test_reachable_internal_setter_keeps_modifier() {
    let member = Member::property("LastName", Property::new("string").with_internal_setter());

    let result = render(member, "_name", &Settings::default());

    assert!(result.contains("    get { return _name.LastName; }"));
    assert!(result.contains("    internal set { _name.LastName = value; }"));
}

#[test]
fn test_unreachable_internal_getter_leaves_setter() {
    let settings = Settings::default();
    let member = Member::property("Password", Property::new("string").with_internal_getter());
    let generator = ForwardingGenerator::new("_account", &settings, &InternalHidden);

    let generated = generator.generate(&member).unwrap();

    assert!(generated.accessor(AccessorKind::Get).is_none());
    assert_eq!(
        generated.accessor(AccessorKind::Set).unwrap().expression,
        "_account.Password = value"
    );
}

#[test]
fn test_no_reachable_accessor_emits_nothing() {
    let settings = Settings::default();
    let member = Member::property(
        "Token",
        Property::new("string")
            .with_internal_getter()
            .with_internal_setter(),
    );
    let generator = ForwardingGenerator::new("_account", &settings, &InternalHidden);

    assert!(generator.generate(&member).is_none());
    assert!(generator.generate_all(&[member]).is_empty());
}

#[test]
fn test_read_only_indexer() {
    let member = Member::indexer(
        Property::read_only("string"),
        vec![Parameter::new("index", "int")],
    );

    let result = render(member, "_lookup", &Settings::default());

    assert_eq!(result, "public string this[int index] => _lookup[index];\n");
}

#[test]
fn test_read_write_indexer_with_two_parameters() {
    let member = Member::indexer(
        Property::new("double"),
        vec![Parameter::new("row", "int"), Parameter::new("column", "int")],
    );

    let result = render(member, "_matrix", &Settings::default());

    assert!(result.starts_with("public double this[int row, int column]\n"));
    assert!(result.contains("get { return _matrix[row, column]; }"));
    assert!(result.contains("set { _matrix[row, column] = value; }"));
}

#[test]
fn test_method_forwards_arguments() {
    let member = Member::method(
        "Add",
        Method::new(
            "int",
            vec![Parameter::new("a", "int"), Parameter::new("b", "int")],
        ),
    );

    let result = render(member, "_calculator", &Settings::default());

    assert_eq!(result, "public int Add(int a, int b) => _calculator.Add(a, b);\n");
}

#[test]
fn test_escaped_parameter_names_are_kept() {
    let member = Member::method(
        "Create",
        Method::new("void", vec![Parameter::new("new", "bool")]),
    );

    let result = render(member, "_factory", &Settings::default());

    assert_eq!(result, "public void Create(bool @new) => _factory.Create(@new);\n");
}

#[test]
fn test_override_from_abstract_member() {
    let member = Member::method("Work", Method::new("void", vec![]))
        .with_abstract(true)
        .cloned_for_inclusion(true);

    let result = render(member, "_worker", &Settings::default());

    assert_eq!(result, "public override void Work() => _worker.Work();\n");
}

#[test]
fn test_root_object_override_is_forwarded_as_override() {
    let mut method = Method::new("string", vec![]);
    method.is_override_from_root_object = true;
    let member = Member::method("ToString", method)
        .with_override(true)
        .cloned_for_inclusion(false);

    let result = render(member, "_name", &Settings::default());

    assert_eq!(result, "public override string ToString() => _name.ToString();\n");
}

#[test]
fn test_event_has_add_and_remove() {
    let member = Member::event("Changed", "EventHandler");

    let result = render(member, "_model", &Settings::default());

    assert_eq!(
        result,
        "public event EventHandler Changed\n{\n    add { _model.Changed += value; }\n    remove { _model.Changed -= value; }\n}\n"
    );
}

#[test]
fn test_internal_member_keeps_accessibility() {
    let member = Member::property("Count", Property::new("int").with_internal_setter())
        .with_internal(true);
    let settings = Settings::default();
    let generator = ForwardingGenerator::new("_counter", &settings, &AllVisible);

    let generated = generator.generate(&member).unwrap();
    let result = write_members(&[generated.clone()], "_counter", &settings);

    assert!(result.starts_with("internal int Count\n"));
    assert!(!generated.accessor(AccessorKind::Set).unwrap().is_internal);
}

#[test]
fn test_documentation_follows_setting() {
    let documentation = Documentation::parse("/// <summary>The first name</summary>");
    let member = Member::property("FirstName", Property::read_only("string"))
        .with_documentation(documentation);

    let without = render(member.clone(), "_name", &Settings::default());
    assert!(!without.contains("///"));

    let settings = Settings {
        include_documentation: true,
        ..Settings::default()
    };
    let with = render(member, "_name", &settings);
    assert_eq!(
        with,
        "/// <summary>The first name</summary>\npublic string FirstName => _name.FirstName;\n"
    );
}

#[test]
fn test_regions_wrap_members() {
    let settings = Settings {
        create_regions: true,
        ..Settings::default()
    };
    let generator = ForwardingGenerator::new("_name", &settings, &AllVisible);
    let generated = generator.generate_all(&[
        Member::property("FullName", Property::read_only("string")),
        Member::method("Clear", Method::new("void", vec![])),
    ]);

    let result = write_members(&generated, "_name", &settings);

    assert_eq!(
        result,
        "#region mixin _name\npublic string FullName => _name.FullName;\n\npublic void Clear() => _name.Clear();\n#endregion\n"
    );
}

#[test]
fn test_layout_follows_setting() {
    let settings = Settings {
        avoid_line_breaks_in_properties: true,
        ..Settings::default()
    };
    let generator = ForwardingGenerator::new("_model", &settings, &AllVisible);

    let generated = generator
        .generate(&Member::event("Changed", "EventHandler"))
        .unwrap();
    assert_eq!(generated.layout, Layout::SingleLine);
}

#[test]
fn test_module_visibility() {
    let mut table = ClassTable::new();
    let core = table.insert(
        Class::new("Name")
            .with_module("Core")
            .with_member(Member::property("LastName", Property::new("string").with_internal_setter())),
    );
    let member = table.get(core).members[0].clone();

    assert!(ModuleVisibility::new(&table, Some("Core".to_string())).can_access_internal(&member));
    assert!(!ModuleVisibility::new(&table, Some("App".to_string())).can_access_internal(&member));

    let settings = Settings::default();
    let visibility = ModuleVisibility::new(&table, Some("App".to_string()));
    let generator = ForwardingGenerator::new("_name", &settings, &visibility);
    assert!(generator.generate(&member).unwrap().is_read_only());
}

#[test]
fn test_resolved_members_render_end_to_end() {
    let mut table = ClassTable::new();
    let name = table.insert(
        Class::new("Name")
            .with_member(Member::property("FirstName", Property::new("string")))
            .with_member(Member::property("LastName", Property::new("string")))
            .with_member(Member::property("FullName", Property::read_only("string"))),
    );
    let person = table.insert(
        Class::new("Person")
            .with_member(Member::property("FullName", Property::read_only("string"))),
    );

    let members = mixin_resolver::include(&table, name, person);
    let settings = Settings::default();
    let generator = ForwardingGenerator::new("_name", &settings, &AllVisible);
    let result = write_members(&generator.generate_all(&members), "_name", &settings);

    assert!(result.contains("public string FirstName\n"));
    assert!(result.contains("public string LastName\n"));
    assert!(!result.contains("FullName"));
}

#[test]
fn test_write_constructors() {
    let constructors = vec![
        Constructor::new(vec![
            ConstructorParameter::required("age", "int"),
            ConstructorParameter::optional("name", "Name", "null"),
        ])
        .with_statement("_name = name;"),
        Constructor::new(vec![]).with_initializer(ConstructorInitializer::this(vec![
            Argument::positional("0"),
            Argument::named("name", "name"),
        ])),
    ];

    let result = write_constructors("Person", &constructors);

    assert_eq!(
        result,
        "public Person(int age, Name name = null)\n{\n    _name = name;\n}\n\npublic Person() : this(0, name: name)\n{\n}\n"
    );
}

//! Tests for threading a mixin through constructors

use mixin_codegen::write_constructors;
use mixin_injection::{all_constructors_have_parameter, inject, inject_into, ConstructorInjector};
use mixin_model::{
    Accessibility, Argument, Class, ClassId, ClassTable, Constructor, ConstructorInitializer,
    ConstructorParameter, MixinReference, TypeReader,
};

fn name_reference() -> MixinReference {
    MixinReference::new("_name", ClassId(0), "Name")
}

#[test]
fn test_constructor_without_initializer_gets_parameter_and_assignment() {
    let constructors = vec![Constructor::new(vec![ConstructorParameter::required("age", "int")])
        .with_statement("_age = age;")];

    let injection = inject(&name_reference(), &constructors);

    let constructor = &injection.constructors[0];
    assert_eq!(constructor.parameters.len(), 2);
    assert_eq!(constructor.parameters[1].name, "name");
    assert_eq!(constructor.parameters[1].type_name, "Name");
    assert_eq!(constructor.parameters[1].default_value.as_deref(), Some("null"));
    assert_eq!(constructor.body, vec!["_age = age;", "_name = name;"]);
    assert_eq!(injection.report.parameters_added, 1);
    assert_eq!(injection.report.assignments_added, 1);
}

#[test]
fn test_base_initializer_is_an_entry_point() {
    let constructors = vec![Constructor::new(vec![ConstructorParameter::required("id", "int")])
        .with_initializer(ConstructorInitializer::base(vec![Argument::positional("id")]))];

    let injection = inject(&name_reference(), &constructors);

    let constructor = &injection.constructors[0];
    assert_eq!(constructor.body, vec!["_name = name;"]);
    assert_eq!(
        constructor.initializer,
        Some(ConstructorInitializer::base(vec![Argument::positional("id")]))
    );
    assert_eq!(injection.report.initializers_rewritten, 0);
}

#[test]
fn test_this_chain_passes_parameter_positionally() {
    let constructors = vec![
        Constructor::new(vec![ConstructorParameter::required("age", "int")]),
        Constructor::new(vec![]).with_initializer(ConstructorInitializer::this(vec![
            Argument::positional("0"),
        ])),
    ];

    let injection = inject(&name_reference(), &constructors);

    let delegating = &injection.constructors[1];
    assert!(delegating.body.is_empty());
    assert_eq!(
        delegating.initializer,
        Some(ConstructorInitializer::this(vec![
            Argument::positional("0"),
            Argument::positional("name"),
        ]))
    );
    assert_eq!(injection.report.assignments_added, 1);
    assert_eq!(injection.report.initializers_rewritten, 1);
}

#[test]
fn test_skipped_default_forces_named_argument() {
    let constructors = vec![
        Constructor::new(vec![
            ConstructorParameter::required("age", "int"),
            ConstructorParameter::optional("height", "int", "0"),
        ]),
        Constructor::new(vec![]).with_initializer(ConstructorInitializer::this(vec![
            Argument::positional("18"),
        ])),
    ];

    let injection = inject(&name_reference(), &constructors);

    let arguments = &injection.constructors[1].initializer.as_ref().unwrap().arguments;
    assert_eq!(arguments[1], Argument::named("name", "name"));
}

#[test]
fn test_named_arguments_keep_the_call_named() {
    let constructors = vec![
        Constructor::new(vec![
            ConstructorParameter::optional("age", "int", "0"),
            ConstructorParameter::optional("height", "int", "0"),
        ]),
        Constructor::new(vec![]).with_initializer(ConstructorInitializer::this(vec![
            Argument::named("height", "180"),
        ])),
    ];

    let injection = inject(&name_reference(), &constructors);

    let arguments = &injection.constructors[1].initializer.as_ref().unwrap().arguments;
    assert_eq!(
        arguments,
        &vec![Argument::named("height", "180"), Argument::named("name", "name")]
    );
}

#[test]
fn test_several_matching_constructors_force_named_argument() {
    let constructors = vec![
        Constructor::new(vec![
            ConstructorParameter::required("age", "int"),
            ConstructorParameter::optional("height", "int", "0"),
        ]),
        Constructor::new(vec![ConstructorParameter::required("label", "string")]),
        Constructor::new(vec![]).with_initializer(ConstructorInitializer::this(vec![
            Argument::positional("18"),
        ])),
    ];

    let injection = inject(&name_reference(), &constructors);

    let arguments = &injection.constructors[2].initializer.as_ref().unwrap().arguments;
    assert_eq!(
        arguments,
        &vec![Argument::positional("18"), Argument::named("name", "name")]
    );
}

#[test]
fn test_constructor_already_taking_parameter_is_untouched() {
    let existing = Constructor::new(vec![ConstructorParameter::optional("name", "Name", "null")])
        .with_statement("_name = name;");
    let constructors = vec![existing.clone()];

    let injection = inject(&name_reference(), &constructors);

    assert_eq!(injection.constructors, vec![existing]);
    assert!(injection.report.is_unchanged());
}

#[test]
fn test_injection_is_idempotent() {
    let reference = name_reference();
    let constructors = vec![
        Constructor::new(vec![ConstructorParameter::required("age", "int")]),
        Constructor::new(vec![]).with_initializer(ConstructorInitializer::this(vec![
            Argument::positional("0"),
        ])),
        Constructor::new(vec![]).into_static(),
    ];

    let first = inject(&reference, &constructors);
    assert!(all_constructors_have_parameter(&first.constructors, "name"));

    let second = inject(&reference, &first.constructors);
    assert_eq!(second.constructors, first.constructors);
    assert!(second.report.is_unchanged());
}

#[test]
fn test_static_constructor_is_skipped() {
    let constructors = vec![
        Constructor::new(vec![]).into_static().with_statement("Count = 0;"),
        Constructor::new(vec![]),
    ];

    let injection = inject(&name_reference(), &constructors);

    assert_eq!(injection.constructors[0], constructors[0]);
    assert_eq!(injection.constructors[1].parameters.len(), 1);
}

#[test]
fn test_class_without_constructors_gets_one() {
    let injection = inject(&name_reference(), &[]);

    assert!(injection.report.constructor_synthesized);
    assert_eq!(injection.constructors.len(), 1);

    let constructor = &injection.constructors[0];
    assert_eq!(constructor.accessibility, Accessibility::Public);
    assert_eq!(
        constructor.parameters,
        vec![ConstructorParameter::required("name", "Name")]
    );
    assert_eq!(constructor.body, vec!["_name = name;"]);
}

#[test]
fn test_only_static_constructor_still_synthesizes() {
    let static_ctor = Constructor::new(vec![]).into_static();

    let injection = inject(&name_reference(), &[static_ctor.clone()]);

    assert!(injection.report.constructor_synthesized);
    assert_eq!(injection.constructors[0], static_ctor);
    assert!(all_constructors_have_parameter(&injection.constructors, "name"));
}

#[test]
fn test_reserved_parameter_name_is_escaped() {
    let reference = MixinReference::new("_event", ClassId(0), "Event");
    let injector = ConstructorInjector::new(&reference);

    assert_eq!(injector.parameter_name(), "@event");
    assert_eq!(injector.assignment(), "_event = @event;");
}

#[test]
fn test_read_constructor_with_reserved_parameter_is_untouched() {
    let mut reader = TypeReader::from_json(
        r#"{ "types": [
            { "name": "Event", "members": [] },
            { "name": "Person",
              "fields": [ { "name": "_event", "type": "Event" } ],
              "constructors": [ { "parameters": [ { "name": "event", "type": "Event" } ] } ] }
        ] }"#,
    )
    .unwrap();
    let mut table = ClassTable::new();
    let person = reader.read_target(&mut table, "Person").unwrap();
    let reference = reader
        .read_mixin_reference(&mut table, person, "_event")
        .unwrap()
        .unwrap();

    let injection = inject(&reference, &table.get(person).constructors);

    assert!(injection.report.is_unchanged());
    assert_eq!(injection.constructors[0].parameters.len(), 1);
}

#[test]
fn test_inject_into_table_creates_snapshot() {
    let mut table = ClassTable::new();
    let person = table.insert(
        Class::new("Person").with_constructor(Constructor::new(vec![])),
    );
    let reference = name_reference();

    let (updated, report) = inject_into(&mut table, person, &reference);

    assert_ne!(updated, person);
    assert_eq!(report.parameters_added, 1);
    assert!(table.get(person).constructors[0].parameters.is_empty());
    assert!(all_constructors_have_parameter(&table.get(updated).constructors, "name"));
}

#[test]
fn test_injected_constructors_render() {
    let constructors = vec![
        Constructor::new(vec![ConstructorParameter::required("age", "int")]),
        Constructor::new(vec![]).with_initializer(ConstructorInitializer::this(vec![
            Argument::positional("0"),
        ])),
    ];

    let injection = inject(&name_reference(), &constructors);
    let code = write_constructors("Person", &injection.constructors);

    assert_eq!(
        code,
        "public Person(int age, Name name = null)\n{\n    _name = name;\n}\n\npublic Person(Name name = null) : this(0, name)\n{\n}\n"
    );
}

//! # Type Reader
//!
//! Builds class graphs from JSON type descriptions.
//!
//! A class is always read from the point of view of some other class. The
//! target is read as itself (every non-static member counts), its ancestors as
//! seen by a derived class, and a mixin as seen by an unrelated class. Members
//! the viewer cannot see never reach the class table, so the resolution engine
//! can treat every member it is handed as visible.
//!
//! Generic types are instantiated by substituting the closed type arguments of
//! the reference (`Repository<Person>`) into member, parameter and base types.

use crate::accessibility::Accessibility;
use crate::class::{Class, ClassId, ClassTable, Field, Interface};
use crate::constructor::Constructor;
use crate::documentation::Documentation;
use crate::error::{ModelError, ModelResult};
use crate::keywords::escape_identifier;
use crate::member::{Member, MemberKind, Method, Parameter, Property};
use crate::reference::MixinReference;
use crate::type_ref::{is_root_type, parse_type_ref, substitute_type_parameters};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Methods every type inherits from the root type, by name and arity.
const ROOT_METHODS: &[(&str, usize)] = &[("ToString", 0), ("Equals", 1), ("GetHashCode", 0)];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub types: Vec<TypeDescription>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescription {
    pub name: String,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub members: Vec<MemberDescription>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub constructors: Vec<Constructor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberDescriptionKind {
    Property,
    Indexer,
    Method,
    Event,
}

/// One member as written in a description.
///
/// A property or indexer that lists neither `get` nor `set` is an auto
/// property with public accessors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDescription {
    pub kind: MemberDescriptionKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_override: bool,
    /// Raw documentation comment
    #[serde(default)]
    pub documentation: Option<String>,
    /// Property, indexer and event type
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub get: Option<Accessibility>,
    #[serde(default)]
    pub set: Option<Accessibility>,
    #[serde(default)]
    pub returns: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub overrides_root: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Relation {
    /// The viewing class itself
    Itself,
    /// An ancestor of the viewing class
    Derived,
    /// A class used by, but not inherited by, the viewing class
    Unrelated,
}

/// Who is looking at a class, which decides the members it gets to see.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Perspective {
    relation: Relation,
    viewer_module: Option<String>,
}

impl Perspective {
    pub fn itself(module: Option<String>) -> Self {
        Self {
            relation: Relation::Itself,
            viewer_module: module,
        }
    }

    pub fn unrelated(viewer_module: Option<String>) -> Self {
        Self {
            relation: Relation::Unrelated,
            viewer_module,
        }
    }

    fn for_base(&self) -> Self {
        let relation = match self.relation {
            Relation::Itself | Relation::Derived => Relation::Derived,
            Relation::Unrelated => Relation::Unrelated,
        };
        Self {
            relation,
            viewer_module: self.viewer_module.clone(),
        }
    }

    fn admits(&self, accessibility: Accessibility, declaring_module: Option<&String>) -> bool {
        let same_module = self.viewer_module.as_ref() == declaring_module;
        match self.relation {
            Relation::Itself => true,
            Relation::Derived => match accessibility {
                Accessibility::Private => false,
                Accessibility::Internal => same_module,
                _ => true,
            },
            Relation::Unrelated => accessibility.is_visible_from(same_module),
        }
    }
}

/// Reads classes out of a [`Description`] into a [`ClassTable`].
///
/// Each (type reference, perspective) pair is read once; later requests reuse
/// the id already in the table.
pub struct TypeReader {
    types: HashMap<String, TypeDescription>,
    cache: HashMap<(String, Perspective), ClassId>,
    in_progress: Vec<String>,
}

impl TypeReader {
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let description: Description = serde_json::from_str(json)?;
        Self::from_description(description)
    }

    pub fn from_description(description: Description) -> ModelResult<Self> {
        let mut types = HashMap::new();
        for type_description in description.types {
            let name = type_description.name.clone();
            if types.insert(name.clone(), type_description).is_some() {
                return Err(ModelError::DuplicateType(name));
            }
        }

        Ok(Self {
            types,
            cache: HashMap::new(),
            in_progress: Vec::new(),
        })
    }

    /// Read the class that will receive forwarders.
    pub fn read_target(&mut self, table: &mut ClassTable, type_ref: &str) -> ModelResult<ClassId> {
        let (name, _) = parse_type_ref(type_ref);
        let module = self
            .types
            .get(&name)
            .ok_or_else(|| ModelError::UnknownType(name.clone()))?
            .module
            .clone();

        self.read_type(table, type_ref, &Perspective::itself(module))?
            .ok_or(ModelError::UnknownType(name))
    }

    /// Resolve a field of `target` into a mixin reference.
    ///
    /// Returns `Ok(None)` when the field does not exist or its type cannot be
    /// resolved; that is the normal "no mixin here" outcome.
    pub fn read_mixin_reference(
        &mut self,
        table: &mut ClassTable,
        target: ClassId,
        field_name: &str,
    ) -> ModelResult<Option<MixinReference>> {
        let target_class = table.get(target);
        let Some(field) = target_class.field(&escape_identifier(field_name)).cloned() else {
            info!(field = field_name, class = %target_class.name, "Field not found, no mixin");
            return Ok(None);
        };

        let perspective = Perspective::unrelated(target_class.module.clone());
        let resolved = self.read_type(table, &field.type_name, &perspective)?;
        if resolved.is_none() {
            info!(field = %field.name, type_name = %field.type_name, "Field type unresolved, no mixin");
        }

        Ok(resolved.map(|class| MixinReference::new(&field.name, class, field.type_name.clone())))
    }

    /// Read a type reference from the given perspective.
    ///
    /// Unknown names, the root type and type-argument arity mismatches yield
    /// `Ok(None)`.
    pub fn read_type(
        &mut self,
        table: &mut ClassTable,
        type_ref: &str,
        perspective: &Perspective,
    ) -> ModelResult<Option<ClassId>> {
        if is_root_type(type_ref) {
            return Ok(None);
        }

        let (name, arguments) = parse_type_ref(type_ref);
        let Some(description) = self.types.get(&name).cloned() else {
            debug!(type_ref, "Type not described");
            return Ok(None);
        };
        if arguments.len() != description.type_parameters.len() {
            debug!(
                type_ref,
                expected = description.type_parameters.len(),
                found = arguments.len(),
                "Type argument count mismatch"
            );
            return Ok(None);
        }

        let key = (type_ref.replace(' ', ""), perspective.clone());
        if let Some(id) = self.cache.get(&key) {
            return Ok(Some(*id));
        }

        if self.in_progress.contains(&name) {
            return Err(ModelError::InheritanceCycle(name));
        }

        self.in_progress.push(name);
        let result = self.build_class(table, &description, &arguments, perspective);
        self.in_progress.pop();

        let id = result?;
        self.cache.insert(key, id);
        Ok(Some(id))
    }

    fn build_class(
        &mut self,
        table: &mut ClassTable,
        description: &TypeDescription,
        arguments: &[String],
        perspective: &Perspective,
    ) -> ModelResult<ClassId> {
        let bindings: HashMap<String, String> = description
            .type_parameters
            .iter()
            .cloned()
            .zip(arguments.iter().cloned())
            .collect();
        let substitute = |type_name: &str| substitute_type_parameters(type_name, &bindings);

        let base = match &description.base {
            Some(base) => self.read_type(table, &substitute(base), &perspective.for_base())?,
            None => None,
        };

        let name = if arguments.is_empty() {
            description.name.clone()
        } else {
            format!("{}<{}>", description.name, arguments.join(", "))
        };

        let is_interface = description.kind == TypeKind::Interface;
        let mut class = Class::new(name);
        class.module = description.module.clone();
        class.is_interface = is_interface;
        class.base = base;
        class.interfaces = description
            .interfaces
            .iter()
            .map(|interface| Interface::new(substitute(interface)))
            .collect();
        class.fields = description
            .fields
            .iter()
            .map(|field| Field {
                name: escape_identifier(&field.name),
                type_name: substitute(&field.type_name),
            })
            .collect();
        class.constructors = description
            .constructors
            .iter()
            .cloned()
            .map(|mut constructor| {
                for parameter in &mut constructor.parameters {
                    parameter.name = escape_identifier(&parameter.name);
                    parameter.type_name = substitute(&parameter.type_name);
                }
                constructor
            })
            .collect();

        for member in &description.members {
            if member.is_static {
                debug!(member = %member.name, "Skipping static member");
                continue;
            }

            let accessibility = if is_interface {
                Accessibility::Public
            } else {
                member.accessibility
            };
            if !perspective.admits(accessibility, description.module.as_ref()) {
                debug!(member = %member.name, ?accessibility, "Skipping invisible member");
                continue;
            }

            let converted = convert_member(member, accessibility, is_interface, &bindings);
            let converted = mark_root_override(converted, base, table);
            class.members.push(converted);
        }

        Ok(table.insert(class))
    }
}

fn accessor(accessibility: Option<Accessibility>) -> (bool, bool) {
    match accessibility {
        None | Some(Accessibility::Private) | Some(Accessibility::Protected) => (false, false),
        Some(Accessibility::Internal) | Some(Accessibility::ProtectedInternal) => (true, true),
        Some(Accessibility::Public) => (true, false),
    }
}

fn convert_property(member: &MemberDescription, type_name: String) -> Property {
    let (get, set) = match (member.get, member.set) {
        (None, None) => (Some(Accessibility::Public), Some(Accessibility::Public)),
        accessors => accessors,
    };
    let (has_getter, is_getter_internal) = accessor(get);
    let (has_setter, is_setter_internal) = accessor(set);

    Property {
        type_name,
        has_getter,
        has_setter,
        is_getter_internal,
        is_setter_internal,
    }
}

fn convert_member(
    member: &MemberDescription,
    accessibility: Accessibility,
    is_interface: bool,
    bindings: &HashMap<String, String>,
) -> Member {
    let substitute = |type_name: &str| substitute_type_parameters(type_name, bindings);
    let type_name = substitute(member.type_name.as_deref().unwrap_or("object"));
    let parameters: Vec<Parameter> = member
        .parameters
        .iter()
        .map(|p| Parameter::new(&p.name, substitute(&p.type_name)))
        .collect();

    let converted = match member.kind {
        MemberDescriptionKind::Property => {
            Member::property(&member.name, convert_property(member, type_name))
        }
        MemberDescriptionKind::Indexer => {
            Member::indexer(convert_property(member, type_name), parameters)
        }
        MemberDescriptionKind::Method => {
            let mut method = Method::new(
                substitute(member.returns.as_deref().unwrap_or("void")),
                parameters,
            );
            method.is_override_from_root_object = member.is_override && member.overrides_root;
            Member::method(&member.name, method)
        }
        MemberDescriptionKind::Event => Member::event(&member.name, type_name),
    };

    converted
        .with_abstract(member.is_abstract || is_interface)
        .with_override(member.is_override)
        .with_internal(matches!(
            accessibility,
            Accessibility::Internal | Accessibility::ProtectedInternal
        ))
        .with_documentation(member.documentation.as_deref().and_then(Documentation::parse))
}

/// Flag overrides of root-type methods that no described ancestor declares.
fn mark_root_override(mut member: Member, base: Option<ClassId>, table: &ClassTable) -> Member {
    let name = member.name.clone();
    if let MemberKind::Method(method) = &mut member.kind {
        let is_root_signature = ROOT_METHODS
            .iter()
            .any(|(root, arity)| *root == name && *arity == method.parameters.len());
        let declared_by_ancestor = base.is_some_and(|base| {
            table
                .members_from_this_and_base(base)
                .any(|inherited| inherited.name == name && !inherited.is_override)
        });

        if member.is_override && is_root_signature && !declared_by_ancestor {
            method.is_override_from_root_object = true;
        }
    }
    member
}

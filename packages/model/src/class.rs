//! Class aggregate and the arena that owns every class of a resolution pass.

use crate::constructor::Constructor;
use crate::member::{Member, MemberKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// Handle of a class inside a [`ClassTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassId(pub u32);

/// An interface listed in a class's base list. Carries no members of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    /// Fully qualified handle of the underlying type
    pub type_handle: String,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            type_handle: name.clone(),
            name,
        }
    }
}

/// A field declared on a class. Fields are candidates for mixin references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    /// Module (assembly) the class is compiled into
    pub module: Option<String>,
    pub is_interface: bool,
    /// Own members in declaration order
    pub members: Vec<Member>,
    pub interfaces: Vec<Interface>,
    pub fields: Vec<Field>,
    pub constructors: Vec<Constructor>,
    /// `None` when the base is the root type
    pub base: Option<ClassId>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: None,
            is_interface: false,
            members: Vec::new(),
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            base: None,
        }
    }

    pub fn with_base(mut self, base: ClassId) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_interface(mut self, interface: Interface) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_field(mut self, name: &str, type_name: impl Into<String>) -> Self {
        self.fields.push(Field {
            name: crate::keywords::escape_identifier(name),
            type_name: type_name.into(),
        });
        self
    }

    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn properties(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|m| matches!(m.kind, MemberKind::Property(_) | MemberKind::Indexer(_)))
    }

    pub fn methods(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|m| matches!(m.kind, MemberKind::Method(_)))
    }

    pub fn events(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|m| matches!(m.kind, MemberKind::Event(_)))
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Arena owning all classes of one resolution pass.
///
/// Base links are ids, so a class never owns a copy of its ancestors and
/// members refer back to their declaring class by id only.
#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    classes: Vec<Class>,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a class, stamping its members with the new id.
    pub fn insert(&mut self, mut class: Class) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        for member in &mut class.members {
            member.owner = Some(id);
        }
        self.classes.push(class);
        id
    }

    pub fn get(&self, id: ClassId) -> &Class {
        &self.classes[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Latest snapshot of the class with the given name.
    pub fn find(&self, name: &str) -> Option<ClassId> {
        self.classes
            .iter()
            .rposition(|c| c.name == name)
            .map(|index| ClassId(index as u32))
    }

    /// The class followed by its base chain, most-derived first.
    pub fn ancestors(&self, id: ClassId) -> Ancestors<'_> {
        Ancestors {
            table: self,
            next: Some(id),
            seen: HashSet::new(),
        }
    }

    /// Own members first, then the base chain's members.
    ///
    /// Lookups over this sequence favor the most-derived declaration.
    pub fn members_from_this_and_base(&self, id: ClassId) -> impl Iterator<Item = &Member> {
        self.ancestors(id).flat_map(|class| class.members.iter())
    }

    /// Interfaces listed anywhere in the chain, most-derived first.
    pub fn interfaces_from_this_and_base(&self, id: ClassId) -> impl Iterator<Item = &Interface> {
        self.ancestors(id).flat_map(|class| class.interfaces.iter())
    }

    /// Snapshot of `target` with forwarders for `members` added.
    ///
    /// Included members are concrete, whatever the source declared. The
    /// returned id is the input for the next resolution pass.
    pub fn with_included(&mut self, target: ClassId, members: &[Member]) -> ClassId {
        let mut snapshot = self.get(target).clone();
        snapshot.members.extend(members.iter().map(|member| {
            let mut member = member.clone();
            member.is_abstract = false;
            member
        }));
        self.insert(snapshot)
    }

    /// Replace the constructors of a class, producing a new snapshot.
    pub fn with_constructors(&mut self, target: ClassId, constructors: Vec<Constructor>) -> ClassId {
        let mut snapshot = self.get(target).clone();
        snapshot.constructors = constructors;
        self.insert(snapshot)
    }
}

/// Iterator over a base chain. Stops at the root type and on a repeated class.
pub struct Ancestors<'a> {
    table: &'a ClassTable,
    next: Option<ClassId>,
    seen: HashSet<ClassId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Class;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        if !self.seen.insert(id) {
            warn!(class = %self.table.get(id).name, "Base chain revisits a class");
            self.next = None;
            return None;
        }
        let class = self.table.get(id);
        self.next = class.base;
        Some(class)
    }
}

//! Member model: properties, indexers, methods and events.

use crate::class::ClassId;
use crate::documentation::Documentation;
use crate::keywords::escape_identifier;
use serde::{Deserialize, Serialize};

/// Fixed name shared by every indexer. Indexers are told apart by kind, never by name.
pub const INDEXER_NAME: &str = "this[]";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: &str, type_name: impl Into<String>) -> Self {
        Self {
            name: escape_identifier(name),
            type_name: type_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub type_name: String,
    pub has_getter: bool,
    pub has_setter: bool,
    pub is_getter_internal: bool,
    pub is_setter_internal: bool,
}

impl Property {
    /// Property with a public getter and setter
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            has_getter: true,
            has_setter: true,
            is_getter_internal: false,
            is_setter_internal: false,
        }
    }

    /// Property with a public getter only
    pub fn read_only(type_name: impl Into<String>) -> Self {
        Self {
            has_setter: false,
            ..Self::new(type_name)
        }
    }

    pub fn with_internal_getter(mut self) -> Self {
        self.is_getter_internal = true;
        self
    }

    pub fn with_internal_setter(mut self) -> Self {
        self.is_setter_internal = true;
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.has_getter && !self.has_setter
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indexer {
    pub property: Property,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    /// Overrides a method declared on the universal root type (`ToString`, `Equals`, ...).
    pub is_override_from_root_object: bool,
}

impl Method {
    pub fn new(return_type: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            return_type: return_type.into(),
            parameters,
            is_override_from_root_object: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemberKind {
    Property(Property),
    Indexer(Indexer),
    Method(Method),
    Event(Event),
}

/// A member of a class. Immutable once built; inclusion produces a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub is_abstract: bool,
    pub is_override: bool,
    pub is_internal: bool,
    pub documentation: Option<Documentation>,
    /// Declaring class. A handle into the class table, never an owning link.
    pub owner: Option<ClassId>,
    pub kind: MemberKind,
}

impl Member {
    fn with_kind(name: &str, kind: MemberKind) -> Self {
        Self {
            name: escape_identifier(name),
            is_abstract: false,
            is_override: false,
            is_internal: false,
            documentation: None,
            owner: None,
            kind,
        }
    }

    pub fn property(name: &str, property: Property) -> Self {
        Self::with_kind(name, MemberKind::Property(property))
    }

    pub fn indexer(property: Property, parameters: Vec<Parameter>) -> Self {
        Self::with_kind(
            INDEXER_NAME,
            MemberKind::Indexer(Indexer {
                property,
                parameters,
            }),
        )
    }

    pub fn method(name: &str, method: Method) -> Self {
        Self::with_kind(name, MemberKind::Method(method))
    }

    pub fn event(name: &str, event_type: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            MemberKind::Event(Event {
                event_type: event_type.into(),
            }),
        )
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn with_override(mut self, is_override: bool) -> Self {
        self.is_override = is_override;
        self
    }

    pub fn with_internal(mut self, is_internal: bool) -> Self {
        self.is_internal = is_internal;
        self
    }

    pub fn with_documentation(mut self, documentation: Option<Documentation>) -> Self {
        self.documentation = documentation;
        self
    }

    /// Copy of this member for inclusion into another class.
    ///
    /// With `as_override` the copy overrides an abstract declaration, so it is
    /// marked `override` and can no longer be abstract. Without it the copy is a
    /// plain forwarder and carries no `override` flag.
    pub fn cloned_for_inclusion(&self, as_override: bool) -> Self {
        let mut member = self.clone();
        member.is_override = as_override;
        if as_override {
            member.is_abstract = false;
        }
        member
    }

    /// Concrete property-like view (plain property or indexer)
    pub fn as_property(&self) -> Option<&Property> {
        match &self.kind {
            MemberKind::Property(property) => Some(property),
            MemberKind::Indexer(indexer) => Some(&indexer.property),
            _ => None,
        }
    }

    pub fn is_indexer(&self) -> bool {
        matches!(self.kind, MemberKind::Indexer(_))
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            MemberKind::Property(_) => "property",
            MemberKind::Indexer(_) => "indexer",
            MemberKind::Method(_) => "method",
            MemberKind::Event(_) => "event",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_names_are_escaped() {
        let member = Member::property("new", Property::new("int"));
        assert_eq!(member.name, "@new");

        let member = Member::property("old", Property::new("int"));
        assert_eq!(member.name, "old");
    }

    #[test]
    fn test_read_only_property() {
        assert!(Property::read_only("string").is_read_only());
        assert!(!Property::new("string").is_read_only());
    }

    #[test]
    fn test_clone_as_override_drops_abstract() {
        let member = Member::method("Work", Method::new("void", vec![])).with_abstract(true);

        let forwarded = member.cloned_for_inclusion(true);
        assert!(forwarded.is_override);
        assert!(!forwarded.is_abstract);
    }

    #[test]
    fn test_plain_clone_clears_override() {
        let member = Member::method("Work", Method::new("void", vec![])).with_override(true);

        let forwarded = member.cloned_for_inclusion(false);
        assert!(!forwarded.is_override);
        assert_eq!(forwarded.name, "Work");
    }

    #[test]
    fn test_indexer_uses_sentinel_name() {
        let member = Member::indexer(Property::new("int"), vec![Parameter::new("index", "int")]);
        assert_eq!(member.name, INDEXER_NAME);
        assert!(member.is_indexer());
    }
}

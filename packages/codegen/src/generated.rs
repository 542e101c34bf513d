//! Forwarding members as produced by the strategies, before any text is written.

use mixin_model::{Accessibility, Documentation, Parameter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    MultiLine,
    SingleLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    Get,
    Set,
    Add,
    Remove,
}

impl AccessorKind {
    pub fn keyword(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Set => "set",
            AccessorKind::Add => "add",
            AccessorKind::Remove => "remove",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessor {
    pub kind: AccessorKind,
    /// Emit an `internal` modifier on the accessor
    pub is_internal: bool,
    /// Delegating expression, e.g. `_name.FirstName = value`
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Signature {
    Property {
        type_name: String,
    },
    Indexer {
        type_name: String,
        parameters: Vec<Parameter>,
    },
    Method {
        return_type: String,
        parameters: Vec<Parameter>,
    },
    Event {
        event_type: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratedBody {
    /// `=> expression;`
    Expression(String),
    /// Explicit accessor list
    Accessors(Vec<Accessor>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMember {
    pub name: String,
    pub accessibility: Accessibility,
    pub is_override: bool,
    pub documentation: Option<Documentation>,
    pub layout: Layout,
    pub signature: Signature,
    pub body: GeneratedBody,
}

impl GeneratedMember {
    pub fn is_read_only(&self) -> bool {
        matches!(self.body, GeneratedBody::Expression(_))
            && matches!(
                self.signature,
                Signature::Property { .. } | Signature::Indexer { .. }
            )
    }

    pub fn accessor(&self, kind: AccessorKind) -> Option<&Accessor> {
        match &self.body {
            GeneratedBody::Accessors(accessors) => accessors.iter().find(|a| a.kind == kind),
            GeneratedBody::Expression(_) => None,
        }
    }
}

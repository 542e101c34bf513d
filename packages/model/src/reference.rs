use crate::class::ClassId;
use crate::keywords::escape_identifier;
use serde::{Deserialize, Serialize};

/// A named binding in the target (usually a field) holding the mixin instance.
///
/// Only built when the binding's type resolved to a class; an unresolved type
/// means "no mixin here".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MixinReference {
    pub name: String,
    pub class: ClassId,
    /// Type as written at the binding, including type arguments
    pub type_name: String,
}

impl MixinReference {
    pub fn new(name: &str, class: ClassId, type_name: impl Into<String>) -> Self {
        Self {
            name: escape_identifier(name),
            class,
            type_name: type_name.into(),
        }
    }
}

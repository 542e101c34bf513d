//! Base-list augmentation: interfaces the child should list after mixing in.

use mixin_model::{ClassId, ClassTable, Interface};
use std::collections::HashSet;

/// Interfaces exposed by the mixin that the child's chain does not list yet.
///
/// An interface-typed mixin contributes itself as well as the interfaces it
/// extends.
pub fn interfaces_to_add(table: &ClassTable, source: ClassId, target: ClassId) -> Vec<Interface> {
    let mut known: HashSet<String> = table
        .interfaces_from_this_and_base(target)
        .map(|interface| interface.type_handle.clone())
        .collect();

    let source_class = table.get(source);
    let own = source_class
        .is_interface
        .then(|| Interface::new(source_class.name.clone()));

    own.into_iter()
        .chain(table.interfaces_from_this_and_base(source).cloned())
        .filter(|interface| known.insert(interface.type_handle.clone()))
        .collect()
}

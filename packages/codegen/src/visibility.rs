//! Accessor reachability seam.
//!
//! Whether an `internal` accessor of a mixin member can be called from the
//! target depends on symbol resolution outside this crate; callers plug that
//! decision in through [`AccessorVisibility`].

use mixin_model::{ClassTable, Member};

pub trait AccessorVisibility {
    /// Can the target's position see internal parts of `member`?
    fn can_access_internal(&self, member: &Member) -> bool;
}

/// Everything is reachable, e.g. when mixin and target share a module.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllVisible;

impl AccessorVisibility for AllVisible {
    fn can_access_internal(&self, _member: &Member) -> bool {
        true
    }
}

/// Internal parts are reachable when the declaring class lives in the viewer's module.
pub struct ModuleVisibility<'a> {
    table: &'a ClassTable,
    viewer_module: Option<String>,
}

impl<'a> ModuleVisibility<'a> {
    pub fn new(table: &'a ClassTable, viewer_module: Option<String>) -> Self {
        Self {
            table,
            viewer_module,
        }
    }
}

impl AccessorVisibility for ModuleVisibility<'_> {
    fn can_access_internal(&self, member: &Member) -> bool {
        let declaring_module = member
            .owner
            .and_then(|owner| self.table.get(owner).module.as_ref());
        declaring_module == self.viewer_module.as_ref()
    }
}

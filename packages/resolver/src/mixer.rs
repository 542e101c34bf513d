//! # Mixer
//!
//! Computes the members a target class must synthesize so that it exposes the
//! whole surface of a mixin.
//!
//! For every member of the mixin (own members first, then its base chain):
//!
//! 1. no member of the target's chain matches: forward it as a plain member
//! 2. an abstract member of the target's chain matches and nothing in the
//!    chain overrides it yet: forward it as an override
//! 3. otherwise the target already provides it: skip
//!
//! The two inclusion cases are exclusive, so no mixin member is proposed twice.

use crate::comparer::MemberComparer;
use mixin_model::{ClassId, ClassTable, Member, MixinReference};
use tracing::{debug, info, instrument};

pub struct Mixer<'a> {
    table: &'a ClassTable,
    comparer: MemberComparer,
}

impl<'a> Mixer<'a> {
    pub fn new(table: &'a ClassTable) -> Self {
        Self {
            table,
            comparer: MemberComparer::default(),
        }
    }

    pub fn with_comparer(mut self, comparer: MemberComparer) -> Self {
        self.comparer = comparer;
        self
    }

    /// Members the target must implement to expose the source, in source order.
    #[instrument(skip_all, fields(source = %self.table.get(source).name, target = %self.table.get(target).name))]
    pub fn include(&self, source: ClassId, target: ClassId) -> Vec<Member> {
        let target_members: Vec<&Member> = self.table.members_from_this_and_base(target).collect();
        let source_members = self.source_members(source);

        let open_abstract: Vec<&Member> = target_members
            .iter()
            .copied()
            .filter(|t| t.is_abstract && !self.has_override(t, &target_members))
            .collect();

        let mut members_to_implement = Vec::new();
        for member in source_members {
            if !target_members.iter().any(|t| self.comparer.is_same(member, t)) {
                debug!(member = %member.name, kind = member.kind_name(), "Forwarding member");
                members_to_implement.push(member.cloned_for_inclusion(false));
            } else if open_abstract.iter().any(|t| self.comparer.is_same(member, t)) {
                debug!(member = %member.name, kind = member.kind_name(), "Overriding abstract member");
                members_to_implement.push(member.cloned_for_inclusion(true));
            } else {
                debug!(member = %member.name, "Already implemented by target");
            }
        }

        info!(count = members_to_implement.len(), "Resolved members to implement");
        members_to_implement
    }

    /// Same as [`Mixer::include`], tolerating an unresolved reference.
    pub fn include_reference(&self, reference: Option<&MixinReference>, target: ClassId) -> Vec<Member> {
        match reference {
            Some(reference) => self.include(reference.class, target),
            None => Vec::new(),
        }
    }

    /// Whether anything in the chain concretely overrides `member`.
    pub fn has_override(&self, member: &Member, target_members: &[&Member]) -> bool {
        target_members
            .iter()
            .any(|t| t.is_override && !t.is_abstract && self.comparer.is_same(t, member))
    }

    /// The source surface with shadowed declarations removed.
    ///
    /// A member redeclared further down the chain (an override of a base
    /// method, say) appears only once, as its most-derived declaration.
    fn source_members(&self, source: ClassId) -> Vec<&'a Member> {
        let mut members: Vec<&'a Member> = Vec::new();
        for member in self.table.members_from_this_and_base(source) {
            if !members.iter().any(|seen| self.comparer.is_same(seen, member)) {
                members.push(member);
            }
        }
        members
    }
}

/// Convenience wrapper using the default comparer.
pub fn include(table: &ClassTable, source: ClassId, target: ClassId) -> Vec<Member> {
    Mixer::new(table).include(source, target)
}

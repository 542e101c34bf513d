//! Per-kind forwarding strategies.
//!
//! Each strategy turns one member of the resolved diff into a
//! [`GeneratedMember`] delegating to the mixin reference, or into `None` when
//! the member cannot be forwarded from the target's position.

mod event;
mod indexer;
mod method;
mod property;

pub use event::EventStrategy;
pub use indexer::IndexerStrategy;
pub use method::MethodStrategy;
pub use property::PropertyStrategy;

use crate::generated::{Accessor, AccessorKind, GeneratedBody, GeneratedMember, Layout, Signature};
use crate::options::Settings;
use crate::visibility::AccessorVisibility;
use mixin_model::{Accessibility, Member, MemberKind, Property};
use tracing::debug;

/// Everything a strategy needs besides the member itself
pub struct ForwardingContext<'a> {
    /// Name of the binding the forwarders delegate to
    pub reference: &'a str,
    pub settings: &'a Settings,
    pub visibility: &'a dyn AccessorVisibility,
}

pub trait ForwardingStrategy {
    /// Build the forwarder, or `None` when nothing can be emitted.
    fn generate(&self, member: &Member, context: &ForwardingContext) -> Option<GeneratedMember>;
}

/// Dispatches members to the strategy for their kind.
pub struct ForwardingGenerator<'a> {
    context: ForwardingContext<'a>,
}

impl<'a> ForwardingGenerator<'a> {
    pub fn new(
        reference: &'a str,
        settings: &'a Settings,
        visibility: &'a dyn AccessorVisibility,
    ) -> Self {
        Self {
            context: ForwardingContext {
                reference,
                settings,
                visibility,
            },
        }
    }

    pub fn generate(&self, member: &Member) -> Option<GeneratedMember> {
        let strategy: &dyn ForwardingStrategy = match member.kind {
            MemberKind::Property(_) => &PropertyStrategy,
            MemberKind::Indexer(_) => &IndexerStrategy,
            MemberKind::Method(_) => &MethodStrategy,
            MemberKind::Event(_) => &EventStrategy,
        };
        strategy.generate(member, &self.context)
    }

    /// Forwarders for a whole diff, in order, dropping members that cannot be emitted.
    pub fn generate_all(&self, members: &[Member]) -> Vec<GeneratedMember> {
        members.iter().filter_map(|m| self.generate(m)).collect()
    }
}

/// Fields every strategy fills the same way.
pub(crate) fn forwarder(
    member: &Member,
    context: &ForwardingContext,
    is_override: bool,
    signature: Signature,
    body: GeneratedBody,
) -> GeneratedMember {
    let documentation = if context.settings.include_documentation {
        member.documentation.clone()
    } else {
        None
    };
    let layout = if context.settings.avoid_line_breaks_in_properties {
        Layout::SingleLine
    } else {
        Layout::MultiLine
    };

    GeneratedMember {
        name: member.name.clone(),
        accessibility: if member.is_internal {
            Accessibility::Internal
        } else {
            Accessibility::Public
        },
        is_override,
        documentation,
        layout,
        signature,
        body,
    }
}

/// Body for a property-like member whose read and write targets are `access`.
///
/// Accessors the target cannot reach are dropped. A getter left on its own
/// becomes an expression body; no reachable accessor at all means `None`.
pub(crate) fn property_body(
    member: &Member,
    property: &Property,
    access: &str,
    context: &ForwardingContext,
) -> Option<GeneratedBody> {
    let internal_reachable = || context.visibility.can_access_internal(member);
    let getter = property.has_getter && (!property.is_getter_internal || internal_reachable());
    let setter = property.has_setter && (!property.is_setter_internal || internal_reachable());

    // Accessor modifiers only make sense on a member that is itself public
    let accessor_internal = |flag: bool| flag && !member.is_internal;

    match (getter, setter) {
        (false, false) => {
            debug!(member = %member.name, "No reachable accessor, member dropped");
            None
        }
        (true, false) => Some(GeneratedBody::Expression(access.to_string())),
        (getter, setter) => {
            let mut accessors = Vec::new();
            if getter {
                accessors.push(Accessor {
                    kind: AccessorKind::Get,
                    is_internal: accessor_internal(property.is_getter_internal),
                    expression: access.to_string(),
                });
            }
            if setter {
                accessors.push(Accessor {
                    kind: AccessorKind::Set,
                    is_internal: accessor_internal(property.is_setter_internal),
                    expression: format!("{} = value", access),
                });
            }
            Some(GeneratedBody::Accessors(accessors))
        }
    }
}

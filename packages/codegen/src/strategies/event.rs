use super::{forwarder, ForwardingContext, ForwardingStrategy};
use crate::generated::{Accessor, AccessorKind, GeneratedBody, GeneratedMember, Signature};
use mixin_model::{Member, MemberKind};

/// `public event E Name { add { ref.Name += value; } remove { ref.Name -= value; } }`
pub struct EventStrategy;

impl ForwardingStrategy for EventStrategy {
    fn generate(&self, member: &Member, context: &ForwardingContext) -> Option<GeneratedMember> {
        let MemberKind::Event(event) = &member.kind else {
            return None;
        };

        let target = format!("{}.{}", context.reference, member.name);
        let accessors = vec![
            Accessor {
                kind: AccessorKind::Add,
                is_internal: false,
                expression: format!("{} += value", target),
            },
            Accessor {
                kind: AccessorKind::Remove,
                is_internal: false,
                expression: format!("{} -= value", target),
            },
        ];
        let signature = Signature::Event {
            event_type: event.event_type.clone(),
        };

        Some(forwarder(
            member,
            context,
            member.is_override,
            signature,
            GeneratedBody::Accessors(accessors),
        ))
    }
}

use super::{forwarder, property_body, ForwardingContext, ForwardingStrategy};
use crate::generated::{GeneratedMember, Signature};
use mixin_model::{Member, MemberKind};

/// `public T Name => ref.Name;` or get/set accessors delegating to `ref.Name`
pub struct PropertyStrategy;

impl ForwardingStrategy for PropertyStrategy {
    fn generate(&self, member: &Member, context: &ForwardingContext) -> Option<GeneratedMember> {
        let MemberKind::Property(property) = &member.kind else {
            return None;
        };

        let access = format!("{}.{}", context.reference, member.name);
        let body = property_body(member, property, &access, context)?;
        let signature = Signature::Property {
            type_name: property.type_name.clone(),
        };

        Some(forwarder(member, context, member.is_override, signature, body))
    }
}

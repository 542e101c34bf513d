use super::{forwarder, ForwardingContext, ForwardingStrategy};
use crate::generated::{GeneratedBody, GeneratedMember, Signature};
use mixin_model::{Member, MemberKind};

/// `public R Name(A a, B b) => ref.Name(a, b);`
pub struct MethodStrategy;

impl ForwardingStrategy for MethodStrategy {
    fn generate(&self, member: &Member, context: &ForwardingContext) -> Option<GeneratedMember> {
        let MemberKind::Method(method) = &member.kind else {
            return None;
        };

        let arguments: Vec<&str> = method.parameters.iter().map(|p| p.name.as_str()).collect();
        let call = format!("{}.{}({})", context.reference, member.name, arguments.join(", "));
        let signature = Signature::Method {
            return_type: method.return_type.clone(),
            parameters: method.parameters.clone(),
        };
        // Root-type overrides (ToString, Equals, ...) need `override` on every class
        let is_override = member.is_override || method.is_override_from_root_object;

        Some(forwarder(
            member,
            context,
            is_override,
            signature,
            GeneratedBody::Expression(call),
        ))
    }
}

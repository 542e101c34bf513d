use super::{forwarder, property_body, ForwardingContext, ForwardingStrategy};
use crate::generated::{GeneratedMember, Signature};
use mixin_model::{Member, MemberKind};

/// `public T this[int i] => ref[i];` or get/set accessors on `ref[i]`
pub struct IndexerStrategy;

impl ForwardingStrategy for IndexerStrategy {
    fn generate(&self, member: &Member, context: &ForwardingContext) -> Option<GeneratedMember> {
        let MemberKind::Indexer(indexer) = &member.kind else {
            return None;
        };

        let arguments: Vec<&str> = indexer.parameters.iter().map(|p| p.name.as_str()).collect();
        let access = format!("{}[{}]", context.reference, arguments.join(", "));
        let body = property_body(member, &indexer.property, &access, context)?;
        let signature = Signature::Indexer {
            type_name: indexer.property.type_name.clone(),
            parameters: indexer.parameters.clone(),
        };

        Some(forwarder(member, context, member.is_override, signature, body))
    }
}

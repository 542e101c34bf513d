//! Structural member equality.
//!
//! Two members are "the same" when a class could not declare both: same kind,
//! same name and, for methods, the same parameter list. Types of properties,
//! return types and accessibility never take part.

use mixin_model::{Member, MemberKind, Parameter};
use serde::{Deserialize, Serialize};

/// How indexers are told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexerPolicy {
    /// Any two indexers are the same member
    #[default]
    AnyIndexer,
    /// Indexers match when their parameter types match in order
    BySignature,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MemberComparer {
    pub indexer_policy: IndexerPolicy,
}

impl MemberComparer {
    pub fn new(indexer_policy: IndexerPolicy) -> Self {
        Self { indexer_policy }
    }

    pub fn is_same(&self, a: &Member, b: &Member) -> bool {
        use MemberKind::*;

        match (&a.kind, &b.kind) {
            (Indexer(x), Indexer(y)) => match self.indexer_policy {
                IndexerPolicy::AnyIndexer => true,
                IndexerPolicy::BySignature => same_types(&x.parameters, &y.parameters),
            },
            (Property(_) | Indexer(_), Property(_) | Indexer(_)) => a.name == b.name,
            (Event(_), Event(_)) => a.name == b.name,
            (Method(x), Method(y)) => a.name == b.name && x.parameters == y.parameters,
            _ => false,
        }
    }
}

/// Comparison with the default policy.
pub fn is_same(a: &Member, b: &Member) -> bool {
    MemberComparer::default().is_same(a, b)
}

fn same_types(a: &[Parameter], b: &[Parameter]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.type_name == y.type_name)
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
    Protected,
    ProtectedInternal,
    Private,
}

impl Accessibility {
    pub fn keyword(self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Internal => "internal",
            Accessibility::Protected => "protected",
            Accessibility::ProtectedInternal => "protected internal",
            Accessibility::Private => "private",
        }
    }

    /// Whether a class outside the declaring hierarchy can see the member at all,
    /// given whether it lives in the same module.
    pub fn is_visible_from(self, same_module: bool) -> bool {
        match self {
            Accessibility::Public => true,
            Accessibility::Internal | Accessibility::ProtectedInternal => same_module,
            Accessibility::Protected | Accessibility::Private => false,
        }
    }
}

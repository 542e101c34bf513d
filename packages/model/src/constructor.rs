//! Constructor declarations as consumed and produced by constructor injection.

use crate::accessibility::Accessibility;
use crate::keywords::escape_identifier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Default value expression; `None` when the parameter is required
    #[serde(default)]
    pub default_value: Option<String>,
}

impl ConstructorParameter {
    pub fn required(name: &str, type_name: impl Into<String>) -> Self {
        Self {
            name: escape_identifier(name),
            type_name: type_name.into(),
            default_value: None,
        }
    }

    pub fn optional(name: &str, type_name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            default_value: Some(default_value.into()),
            ..Self::required(name, type_name)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitializerKind {
    /// `: this(...)`, delegates to a constructor of the same type
    This,
    /// `: base(...)`, delegates to the base type
    Base,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Explicit parameter name for a named argument
    #[serde(default)]
    pub name: Option<String>,
    pub expression: String,
}

impl Argument {
    pub fn positional(expression: impl Into<String>) -> Self {
        Self {
            name: None,
            expression: expression.into(),
        }
    }

    pub fn named(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            expression: expression.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorInitializer {
    pub kind: InitializerKind,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl ConstructorInitializer {
    pub fn this(arguments: Vec<Argument>) -> Self {
        Self {
            kind: InitializerKind::This,
            arguments,
        }
    }

    pub fn base(arguments: Vec<Argument>) -> Self {
        Self {
            kind: InitializerKind::Base,
            arguments,
        }
    }

    pub fn positional_count(&self) -> usize {
        self.arguments.iter().filter(|a| a.name.is_none()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub parameters: Vec<ConstructorParameter>,
    #[serde(default)]
    pub initializer: Option<ConstructorInitializer>,
    /// Body statements, one per entry
    #[serde(default)]
    pub body: Vec<String>,
}

impl Constructor {
    pub fn new(parameters: Vec<ConstructorParameter>) -> Self {
        Self {
            accessibility: Accessibility::Public,
            is_static: false,
            parameters,
            initializer: None,
            body: Vec::new(),
        }
    }

    pub fn with_initializer(mut self, initializer: ConstructorInitializer) -> Self {
        self.initializer = Some(initializer);
        self
    }

    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.body.push(statement.into());
        self
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn parameter_index(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p.name == name)
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameter_index(name).is_some()
    }

    /// Delegates to another constructor of the same type
    pub fn delegates_to_this(&self) -> bool {
        matches!(
            self.initializer,
            Some(ConstructorInitializer {
                kind: InitializerKind::This,
                ..
            })
        )
    }

    pub fn required_parameter_count(&self) -> usize {
        self.parameters
            .iter()
            .filter(|p| p.default_value.is_none())
            .count()
    }
}

use super::Extensions;
use indexmap::IndexMap;

/// An enum type: a name and its members, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub members: IndexMap<String, EnumValueDefinition>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        EnumType {
            name: name.into(),
            members: IndexMap::new(),
        }
    }

    pub fn with_member(mut self, name: impl Into<String>, member: EnumValueDefinition) -> Self {
        self.members.insert(name.into(), member);
        self
    }
}

/// One enum member.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumValueDefinition {
    pub value: Option<serde_json::Value>,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    pub extensions: Extensions,
}

impl EnumValueDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_deprecation_reason(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }
}

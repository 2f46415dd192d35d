use super::{AstNodeHandle, Extensions, FnHandle, ResolverDefinition};
use crate::TypeRef;
use indexmap::IndexMap;
use std::sync::Arc;

/// A named member of an object or input object type. A field is exactly one
/// of the two kinds at any time.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldDefinition {
    /// A plain typed slot, optionally resolved by a host function.
    Standard(StandardField),
    /// A computed slot whose value is a named, reusable resolver.
    Resolver(Arc<ResolverDefinition>),
}

/// The standard field shape. Absent properties are `None`, never an explicit
/// empty marker, so consumers can tell "absent" from "explicitly empty".
#[derive(Clone, Debug, PartialEq)]
pub struct StandardField {
    pub type_ref: TypeRef,
    pub arguments: IndexMap<String, ArgumentDefinition>,
    pub resolve: Option<FnHandle>,
    pub subscribe: Option<FnHandle>,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    pub extensions: Extensions,
    pub ast_node: Option<AstNodeHandle>,
}

impl StandardField {
    pub fn new(type_ref: TypeRef) -> Self {
        StandardField {
            type_ref,
            arguments: IndexMap::new(),
            resolve: None,
            subscribe: None,
            description: None,
            deprecation_reason: None,
            extensions: Extensions::new(),
            ast_node: None,
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, argument: ArgumentDefinition) -> Self {
        self.arguments.insert(name.into(), argument);
        self
    }

    pub fn with_resolve(mut self, resolve: FnHandle) -> Self {
        self.resolve = Some(resolve);
        self
    }

    pub fn with_subscribe(mut self, subscribe: FnHandle) -> Self {
        self.subscribe = Some(subscribe);
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

    pub fn with_ast_node(mut self, node: AstNodeHandle) -> Self {
        self.ast_node = Some(node);
        self
    }
}

/// An argument on a field or resolver.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentDefinition {
    pub type_ref: TypeRef,
    pub default_value: Option<serde_json::Value>,
    pub description: Option<String>,
    pub extensions: Extensions,
    pub ast_node: Option<AstNodeHandle>,
}

impl ArgumentDefinition {
    pub fn new(type_ref: TypeRef) -> Self {
        ArgumentDefinition {
            type_ref,
            default_value: None,
            description: None,
            extensions: Extensions::new(),
            ast_node: None,
        }
    }

    pub fn with_default_value(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Name-independent shape equality: type reference and default value.
    /// This is what decides whether two sides of a field merge are
    /// reconcilable.
    pub fn shape_matches(&self, other: &ArgumentDefinition) -> bool {
        self.type_ref == other.type_ref && self.default_value == other.default_value
    }
}

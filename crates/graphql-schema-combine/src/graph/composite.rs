use super::{Extensions, FieldDefinition, ResolverDefinition};
use indexmap::IndexMap;
use std::sync::Arc;

/// The shared shape of object and input object types.
///
/// Input object types keep `interfaces` and `resolvers` empty. Field and
/// resolver names are unique within a type by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeType {
    pub name: String,
    /// Normalized: empty when the type has no description.
    pub description: String,
    pub interfaces: Vec<String>,
    pub extensions: Extensions,
    pub resolvers: IndexMap<String, Arc<ResolverDefinition>>,
    pub fields: IndexMap<String, FieldDefinition>,
}

impl CompositeType {
    pub fn new(name: impl Into<String>) -> Self {
        CompositeType {
            name: name.into(),
            description: String::new(),
            interfaces: Vec::new(),
            extensions: Extensions::new(),
            resolvers: IndexMap::new(),
            fields: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Registers a resolver under its own name.
    pub fn with_resolver(mut self, resolver: Arc<ResolverDefinition>) -> Self {
        self.resolvers.insert(resolver.name.clone(), resolver);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, field: FieldDefinition) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

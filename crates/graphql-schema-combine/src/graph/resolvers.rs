use super::{ArgumentDefinition, FnHandle};
use crate::TypeRef;
use indexmap::IndexMap;
use std::sync::Arc;

/// A named, reusable resolver: an output type reference, an argument list and
/// one host resolve function.
///
/// Resolvers are shared as `Arc<ResolverDefinition>`. For merge and reuse
/// purposes they are compared by `Arc` identity, never by name: a resolver
/// referenced from several fields of one type is one resolver.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolverDefinition {
    pub name: String,
    pub type_ref: TypeRef,
    pub arguments: IndexMap<String, ArgumentDefinition>,
    pub resolve: FnHandle,
}

impl ResolverDefinition {
    pub fn new(name: impl Into<String>, type_ref: TypeRef, resolve: FnHandle) -> Self {
        ResolverDefinition {
            name: name.into(),
            type_ref,
            arguments: IndexMap::new(),
            resolve,
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, argument: ArgumentDefinition) -> Self {
        self.arguments.insert(name.into(), argument);
        self
    }

    pub fn into_shared(self) -> Arc<ResolverDefinition> {
        Arc::new(self)
    }
}

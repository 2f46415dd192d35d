use crate::graph::{CompositeType, ResolverDefinition};
use std::{collections::HashMap, sync::Arc};

/// Clones a resolver into a fresh `Arc`. The output type reference and the
/// argument map are deep-copied; the resolve function handle is shared by
/// reference, never copied by value.
pub(crate) fn clone_resolver(resolver: &Arc<ResolverDefinition>) -> Arc<ResolverDefinition> {
    Arc::new(ResolverDefinition {
        name: resolver.name.clone(),
        type_ref: resolver.type_ref.clone(),
        arguments: resolver.arguments.clone(),
        resolve: resolver.resolve.clone(),
    })
}

/// Maps resolver identity back to the name it is registered under in one
/// source type. Built once per source type, so recovering a name is a lookup
/// rather than a scan of the resolver table per resolver-backed field.
pub(crate) struct ResolverIndex<'a> {
    names: HashMap<*const ResolverDefinition, &'a str>,
}

impl<'a> ResolverIndex<'a> {
    pub(crate) fn new(source: &'a CompositeType) -> Self {
        ResolverIndex {
            names: source
                .resolvers
                .iter()
                .map(|(name, resolver)| (Arc::as_ptr(resolver), name.as_str()))
                .collect(),
        }
    }

    pub(crate) fn name_of(&self, resolver: &Arc<ResolverDefinition>) -> Option<&'a str> {
        self.names.get(&Arc::as_ptr(resolver)).copied()
    }
}

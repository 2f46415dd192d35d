use crate::{CombineConfig, TypeGraph};

/// State threaded through one combine call: the configuration and the
/// destination graph under construction.
pub(crate) struct Context<'a> {
    pub(crate) config: &'a CombineConfig,
    pub(crate) destination: TypeGraph,
}

impl<'a> Context<'a> {
    pub(crate) fn new(config: &'a CombineConfig) -> Self {
        Context {
            config,
            destination: TypeGraph::new(),
        }
    }

    pub(crate) fn into_destination(self) -> TypeGraph {
        self.destination
    }
}

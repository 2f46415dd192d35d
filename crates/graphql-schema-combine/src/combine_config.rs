/// Options for [`combine_with_config()`](crate::combine_with_config).
///
/// The combine core has no ambient constants: what counts as a built-in
/// scalar or a root operation type is configuration, so synthetic schemas can
/// redefine both.
#[derive(Debug, Clone)]
pub struct CombineConfig {
    builtin_scalars: Vec<String>,
    root_types: Vec<String>,
}

impl Default for CombineConfig {
    fn default() -> Self {
        CombineConfig {
            builtin_scalars: ["String", "Int", "Float", "ID", "Boolean"]
                .into_iter()
                .map(String::from)
                .collect(),
            root_types: ["Query", "Mutation", "Subscription"].into_iter().map(String::from).collect(),
        }
    }
}

impl CombineConfig {
    /// Replaces the set of scalar names that are never materialized in the
    /// combined graph.
    pub fn with_builtin_scalars<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.builtin_scalars = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the set of root operation type names. When a copy targets a
    /// root-named object that already exists in the destination, the existing
    /// object is populated instead of recreated.
    pub fn with_root_types<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.root_types = names.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn is_builtin_scalar(&self, name: &str) -> bool {
        self.builtin_scalars.iter().any(|scalar| scalar == name)
    }

    pub(crate) fn is_root_type(&self, name: &str) -> bool {
        self.root_types.iter().any(|root| root == name)
    }
}

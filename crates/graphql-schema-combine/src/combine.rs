//! The combine pipeline: per-name orchestration, type copying and type
//! merging.

mod context;
mod copy;
mod fields;
mod merge;
mod resolvers;

use self::{context::Context, copy::copy_type, merge::merge_types};
use crate::{CombineConfig, CombineError, TypeDefinition, TypeGraph};

/// The outcome of a conflict policy for one colliding type name.
#[derive(Debug)]
pub enum ConflictResolution {
    /// Structurally merge the two definitions.
    Merge,
    /// Copy this definition verbatim. Usually a clone of one of the two
    /// sides, but any definition works.
    Take(TypeDefinition),
    /// Materialize neither side.
    Skip,
}

/// Combines two type graphs into one with the default configuration.
///
/// See [`combine_with_config()`] for the details.
pub fn combine<F>(first: &TypeGraph, second: &TypeGraph, policy: F) -> Result<TypeGraph, CombineError>
where
    F: FnMut(&TypeDefinition, &TypeDefinition) -> ConflictResolution,
{
    combine_with_config(first, second, policy, &CombineConfig::default())
}

/// Combines two type graphs into one.
///
/// Type names are processed in `first`'s declaration order, then `second`'s.
/// Built-in scalar names are skipped, and each name is materialized in the
/// destination at most once. A name present in both graphs goes through
/// `policy`; a name present in one graph is copied verbatim.
///
/// The sources are never mutated. On error the partially built destination is
/// dropped.
pub fn combine_with_config<F>(
    first: &TypeGraph,
    second: &TypeGraph,
    mut policy: F,
    config: &CombineConfig,
) -> Result<TypeGraph, CombineError>
where
    F: FnMut(&TypeDefinition, &TypeDefinition) -> ConflictResolution,
{
    let mut ctx = Context::new(config);

    for name in first.type_names().chain(second.type_names()) {
        if config.is_builtin_scalar(name) || ctx.destination.contains(name) {
            continue;
        }

        match (first.get(name), second.get(name)) {
            (Some(first_definition), Some(second_definition)) => {
                match policy(first_definition, second_definition) {
                    ConflictResolution::Merge => {
                        tracing::debug!(type_name = %name, "merging colliding definitions");
                        merge_types(&mut ctx, first_definition, second_definition)?;
                    }
                    ConflictResolution::Take(definition) => {
                        tracing::debug!(type_name = %name, "conflict policy picked one definition");
                        copy_type(&mut ctx, &definition);
                    }
                    ConflictResolution::Skip => {
                        tracing::debug!(type_name = %name, "conflict policy excluded the type");
                    }
                }
            }
            (Some(definition), None) | (None, Some(definition)) => copy_type(&mut ctx, definition),
            // The name came out of one of the two graphs.
            (None, None) => {}
        }
    }

    Ok(ctx.into_destination())
}

use super::{
    context::Context,
    fields::{merge_extensions, merge_field},
    resolvers::{clone_resolver, ResolverIndex},
};
use crate::{
    graph::{CompositeType, EnumType, ScalarType, TypeDefinition},
    CombineError,
};
use itertools::Itertools;

/// Merges two same-named definitions of matching category into the
/// destination graph.
pub(crate) fn merge_types(ctx: &mut Context<'_>, first: &TypeDefinition, second: &TypeDefinition) -> Result<(), CombineError> {
    match (first, second) {
        (TypeDefinition::Object(first), TypeDefinition::Object(second)) => {
            let merged = merge_composites(first, second)?;
            ctx.destination.insert(TypeDefinition::Object(merged));
            Ok(())
        }
        (TypeDefinition::InputObject(first), TypeDefinition::InputObject(second)) => {
            let merged = merge_composites(first, second)?;
            ctx.destination.insert(TypeDefinition::InputObject(merged));
            Ok(())
        }
        (TypeDefinition::Enum(first), TypeDefinition::Enum(second)) => {
            ctx.destination.insert(TypeDefinition::Enum(merge_enums(first, second)));
            Ok(())
        }
        (TypeDefinition::Scalar(first), TypeDefinition::Scalar(second)) => {
            if first.name == second.name {
                ctx.destination.insert(TypeDefinition::Scalar(ScalarType::new(second.name.clone())));
                Ok(())
            } else {
                Err(CombineError::ScalarMismatch {
                    first: first.name.clone(),
                    second: second.name.clone(),
                })
            }
        }
        (first, second) => Err(CombineError::TypeMismatch {
            name: second.name().to_owned(),
            first: first.kind(),
            second: second.kind(),
        }),
    }
}

/// Structural merge of two object or input object types.
///
/// The second side wins the destination identity and takes precedence for
/// descriptions, extensions and resolver name collisions; names only one side
/// declares are unioned in.
fn merge_composites(first: &CompositeType, second: &CompositeType) -> Result<CompositeType, CombineError> {
    let mut merged = CompositeType::new(second.name.clone());

    merged.description = if second.description.is_empty() {
        first.description.clone()
    } else {
        second.description.clone()
    };

    merged.interfaces = first
        .interfaces
        .iter()
        .chain(&second.interfaces)
        .unique()
        .cloned()
        .collect();

    merged.extensions = merge_extensions(&first.extensions, &second.extensions);

    for (name, resolver) in &second.resolvers {
        merged.resolvers.insert(name.clone(), clone_resolver(resolver));
    }
    for (name, resolver) in &first.resolvers {
        if !merged.resolvers.contains_key(name) {
            merged.resolvers.insert(name.clone(), clone_resolver(resolver));
        }
    }

    let first_index = ResolverIndex::new(first);
    let second_index = ResolverIndex::new(second);

    for name in first.fields.keys() {
        merge_field(&mut merged, first, second, &first_index, &second_index, name)?;
    }
    for name in second.fields.keys() {
        if !merged.fields.contains_key(name) {
            merge_field(&mut merged, first, second, &first_index, &second_index, name)?;
        }
    }

    Ok(merged)
}

/// Value-union merge of two enums: all of the second side's members, then the
/// first side's members whose names are still free.
fn merge_enums(first: &EnumType, second: &EnumType) -> EnumType {
    let mut merged = EnumType::new(second.name.clone());

    for (name, member) in &second.members {
        merged.members.insert(name.clone(), member.clone());
    }
    for (name, member) in &first.members {
        if !merged.members.contains_key(name) {
            merged.members.insert(name.clone(), member.clone());
        }
    }

    merged
}

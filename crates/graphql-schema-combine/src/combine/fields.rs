use super::resolvers::{clone_resolver, ResolverIndex};
use crate::{
    graph::{CompositeType, Extensions, FieldDefinition, StandardField},
    CombineError,
};

/// Copies one field from a single source type into the destination type.
///
/// Resolver-backed fields recover their resolver's name through the source
/// type's [`ResolverIndex`] and reuse the already-cloned destination resolver
/// of that name when there is one. A resolver absent from the source type's
/// table gets a fresh, unregistered clone.
pub(crate) fn copy_field(destination: &mut CompositeType, index: &ResolverIndex<'_>, name: &str, field: &FieldDefinition) {
    match field {
        FieldDefinition::Resolver(resolver) => {
            let resolver = match index.name_of(resolver) {
                Some(resolver_name) => match destination.resolvers.get(resolver_name) {
                    Some(already_cloned) => already_cloned.clone(),
                    None => {
                        let cloned = clone_resolver(resolver);
                        destination.resolvers.insert(resolver_name.to_owned(), cloned.clone());
                        cloned
                    }
                },
                None => clone_resolver(resolver),
            };
            destination.fields.insert(name.to_owned(), FieldDefinition::Resolver(resolver));
        }
        FieldDefinition::Standard(field) => {
            destination.fields.insert(name.to_owned(), FieldDefinition::Standard(field.clone()));
        }
    }
}

/// Merges the fields named `name` from two source types into the destination
/// type. Either side may lack the field, in which case this is a plain copy
/// from the other side.
pub(crate) fn merge_field(
    destination: &mut CompositeType,
    first: &CompositeType,
    second: &CompositeType,
    first_index: &ResolverIndex<'_>,
    second_index: &ResolverIndex<'_>,
    name: &str,
) -> Result<(), CombineError> {
    let first_field = first.fields.get(name);
    let second_field = second.fields.get(name);

    // The second side's field is the structural template when both exist.
    let Some(template) = second_field.or(first_field) else {
        return Ok(());
    };

    match template {
        FieldDefinition::Resolver(resolver) => {
            let resolver_name = second_index.name_of(resolver).or_else(|| first_index.name_of(resolver));
            let resolver = match resolver_name.and_then(|resolver_name| destination.resolvers.get(resolver_name)) {
                Some(already_cloned) => already_cloned.clone(),
                None => clone_resolver(resolver),
            };
            destination.fields.insert(name.to_owned(), FieldDefinition::Resolver(resolver));
        }
        FieldDefinition::Standard(template_field) => {
            let merged = match (first_field, second_field) {
                (Some(FieldDefinition::Standard(first_field)), Some(FieldDefinition::Standard(second_field))) => {
                    if !argument_shapes_match(first_field, second_field) {
                        return Err(CombineError::ArgMergeUnsupported {
                            type_name: second.name.clone(),
                            field_name: name.to_owned(),
                        });
                    }

                    let mut merged = second_field.clone();
                    merged.description = Some(merged_description(
                        first_field.description.as_deref(),
                        second_field.description.as_deref(),
                    ));
                    merged.extensions = merge_extensions(&first_field.extensions, &second_field.extensions);
                    merged
                }
                // A resolver-backed field on one side cannot be reconciled
                // with a standard field on the other.
                (Some(FieldDefinition::Resolver(_)), Some(FieldDefinition::Standard(_))) => {
                    return Err(CombineError::ArgMergeUnsupported {
                        type_name: second.name.clone(),
                        field_name: name.to_owned(),
                    });
                }
                _ => template_field.clone(),
            };
            destination.fields.insert(name.to_owned(), FieldDefinition::Standard(merged));
        }
    }

    Ok(())
}

/// The second side's description wins when non-empty, then the first side's,
/// then the empty string. A merged field always carries a description.
fn merged_description(first: Option<&str>, second: Option<&str>) -> String {
    non_empty(second).or_else(|| non_empty(first)).unwrap_or("").to_owned()
}

fn non_empty(description: Option<&str>) -> Option<&str> {
    description.filter(|description| !description.is_empty())
}

/// Shallow merge; the second side overwrites the first on key collision.
pub(super) fn merge_extensions(first: &Extensions, second: &Extensions) -> Extensions {
    let mut merged = first.clone();
    for (key, value) in second {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

fn argument_shapes_match(first: &StandardField, second: &StandardField) -> bool {
    first.arguments.len() == second.arguments.len()
        && first
            .arguments
            .iter()
            .all(|(name, argument)| second.arguments.get(name).is_some_and(|other| argument.shape_matches(other)))
}

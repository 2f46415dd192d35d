use super::{
    context::Context,
    fields::copy_field,
    resolvers::{clone_resolver, ResolverIndex},
};
use crate::graph::{CompositeType, EnumType, ScalarType, TypeDefinition};

/// Deep-copies one definition into the destination graph.
pub(crate) fn copy_type(ctx: &mut Context<'_>, source: &TypeDefinition) {
    match source {
        TypeDefinition::Object(source_object) => {
            // Root operation types may already exist in the destination; they
            // are populated in place rather than recreated.
            if ctx.config.is_root_type(&source_object.name) {
                if let Some(TypeDefinition::Object(existing)) = ctx.destination.get_mut(&source_object.name) {
                    copy_composite_into(existing, source_object);
                    return;
                }
            }

            let mut object = CompositeType::new(source_object.name.clone());
            copy_composite_into(&mut object, source_object);
            ctx.destination.insert(TypeDefinition::Object(object));
        }
        TypeDefinition::InputObject(source_input) => {
            let mut input_object = CompositeType::new(source_input.name.clone());
            copy_composite_into(&mut input_object, source_input);
            ctx.destination.insert(TypeDefinition::InputObject(input_object));
        }
        TypeDefinition::Enum(source_enum) => {
            let mut r#enum = EnumType::new(source_enum.name.clone());
            for (name, member) in &source_enum.members {
                r#enum.members.insert(name.clone(), member.clone());
            }
            ctx.destination.insert(TypeDefinition::Enum(r#enum));
        }
        TypeDefinition::Scalar(scalar) => {
            ctx.destination.insert(TypeDefinition::Scalar(ScalarType::new(scalar.name.clone())));
        }
    }
}

/// Populates `destination` with everything `source` declares: description,
/// interfaces, extensions, resolvers, fields. The destination may be a
/// pre-existing root object; what it already holds is kept except where the
/// source declares the same name.
fn copy_composite_into(destination: &mut CompositeType, source: &CompositeType) {
    destination.description = source.description.clone();

    for interface in &source.interfaces {
        if !destination.interfaces.contains(interface) {
            destination.interfaces.push(interface.clone());
        }
    }

    destination.extensions = source.extensions.clone();

    for (name, resolver) in &source.resolvers {
        destination.resolvers.insert(name.clone(), clone_resolver(resolver));
    }

    let index = ResolverIndex::new(source);
    for (name, field) in &source.fields {
        copy_field(destination, &index, name, field);
    }
}

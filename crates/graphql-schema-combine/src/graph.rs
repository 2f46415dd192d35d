//! The type graph data model: named definitions, fields, arguments and
//! resolvers.
//!
//! Source graphs are built up front and only read during a combine; the
//! destination graph is built incrementally and returned.

mod composite;
mod enums;
mod fields;
mod handles;
mod resolvers;

pub use self::{
    composite::CompositeType,
    enums::{EnumType, EnumValueDefinition},
    fields::{ArgumentDefinition, FieldDefinition, StandardField},
    handles::{AstNodeHandle, FnHandle},
    resolvers::ResolverDefinition,
};

use indexmap::IndexMap;
use std::fmt;

/// Opaque extension values attached to types, fields, arguments and enum
/// members.
pub type Extensions = IndexMap<String, serde_json::Value>;

/// An ordered mapping from type name to [`TypeDefinition`]: one API's
/// structural schema.
///
/// Iteration follows insertion order, which is what makes combining
/// deterministic.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct TypeGraph {
    types: IndexMap<String, TypeDefinition>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a definition keyed by its own name, replacing any previous
    /// definition with that name.
    pub fn insert(&mut self, definition: TypeDefinition) -> Option<TypeDefinition> {
        self.types.insert(definition.name().to_owned(), definition)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TypeDefinition> {
        self.types.get_mut(name)
    }

    /// Type names in insertion order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Definitions in insertion order.
    pub fn definitions(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDefinition> for TypeGraph {
    fn from_iter<I: IntoIterator<Item = TypeDefinition>>(definitions: I) -> Self {
        let mut graph = TypeGraph::new();
        for definition in definitions {
            graph.insert(definition);
        }
        graph
    }
}

impl Extend<TypeDefinition> for TypeGraph {
    fn extend<I: IntoIterator<Item = TypeDefinition>>(&mut self, definitions: I) {
        for definition in definitions {
            self.insert(definition);
        }
    }
}

/// One named type definition.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Object(CompositeType),
    InputObject(CompositeType),
    Enum(EnumType),
    Scalar(ScalarType),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Object(composite) | TypeDefinition::InputObject(composite) => &composite.name,
            TypeDefinition::Enum(r#enum) => &r#enum.name,
            TypeDefinition::Scalar(scalar) => &scalar.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::InputObject(_) => TypeKind::InputObject,
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
        }
    }
}

/// The category of a [`TypeDefinition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Object,
    InputObject,
    Enum,
    Scalar,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            TypeKind::Object => "object",
            TypeKind::InputObject => "input object",
            TypeKind::Enum => "enum",
            TypeKind::Scalar => "scalar",
        };
        f.write_str(kind)
    }
}

/// A scalar type is a bare name. Two scalars can only be merged when their
/// names are identical.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub name: String,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        ScalarType { name: name.into() }
    }
}

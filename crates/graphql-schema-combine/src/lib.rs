//! Combining two GraphQL type graphs into one.
//!
//! [`combine()`] walks two independently built [`TypeGraph`]s, detects type
//! name collisions, applies a caller-supplied conflict policy per colliding
//! name, and emits a fresh, self-consistent graph. Non-colliding definitions
//! are copied verbatim; colliding object, input object and enum definitions
//! can be structurally merged, with the second graph taking precedence on
//! collisions inside a type.
//!
//! Parsing schema text, executing resolvers and serving the result are the
//! host's business. Resolve functions and raw syntax nodes travel through the
//! combine as opaque handles ([`FnHandle`], [`AstNodeHandle`]) and are never
//! invoked or inspected.
//!
//! ```
//! use graphql_schema_combine::{
//!     combine, CompositeType, ConflictResolution, FieldDefinition, StandardField,
//!     TypeDefinition, TypeGraph, TypeRef,
//! };
//!
//! let first: TypeGraph = [TypeDefinition::Object(
//!     CompositeType::new("User").with_field(
//!         "id",
//!         FieldDefinition::Standard(StandardField::new(TypeRef::named("ID").non_null())),
//!     ),
//! )]
//! .into_iter()
//! .collect();
//!
//! let second: TypeGraph = [TypeDefinition::Object(
//!     CompositeType::new("User").with_field(
//!         "email",
//!         FieldDefinition::Standard(StandardField::new(TypeRef::named("String"))),
//!     ),
//! )]
//! .into_iter()
//! .collect();
//!
//! let combined = combine(&first, &second, |_, _| ConflictResolution::Merge).unwrap();
//!
//! let TypeDefinition::Object(user) = combined.get("User").unwrap() else {
//!     unreachable!()
//! };
//! let field_names: Vec<_> = user.fields.keys().map(String::as_str).collect();
//! assert_eq!(field_names, ["id", "email"]);
//! ```

// Dev-dependencies are only used by the integration tests in `tests/`, which
// the `unused-crate-dependencies` lint cannot see from the lib test target.
#[cfg(test)]
use insta as _;
#[cfg(test)]
use pretty_assertions as _;

mod combine;
mod combine_config;
mod error;
mod graph;
mod type_ref;

pub use self::{
    combine::{combine, combine_with_config, ConflictResolution},
    combine_config::CombineConfig,
    error::CombineError,
    graph::{
        ArgumentDefinition, AstNodeHandle, CompositeType, EnumType, EnumValueDefinition, Extensions,
        FieldDefinition, FnHandle, ResolverDefinition, ScalarType, StandardField, TypeDefinition, TypeGraph,
        TypeKind,
    },
    type_ref::TypeRef,
};

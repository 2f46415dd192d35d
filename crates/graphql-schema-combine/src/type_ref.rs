//! Type references and their canonical textual form.

use crate::CombineError;
use std::{fmt, str::FromStr};

/// A possibly wrapped reference to another type by name.
///
/// `Display` renders the canonical form (`Foo`, `[Foo]`, `Foo!`, `[Foo!]!`)
/// and [`TypeRef::parse`] reads it back, so canonicalization round-trips at
/// any nesting depth.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wraps the reference in a list.
    pub fn list(self) -> Self {
        TypeRef::List(Box::new(self))
    }

    /// Wraps the reference in a non-null marker.
    pub fn non_null(self) -> Self {
        TypeRef::NonNull(Box::new(self))
    }

    /// The innermost type name, with all wrappers stripped.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }

    /// Parses a canonical reference string. Anything else is a programming
    /// error on the host side and fails with
    /// [`CombineError::InvalidTypeRef`].
    pub fn parse(reference: &str) -> Result<Self, CombineError> {
        reference.parse()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl FromStr for TypeRef {
    type Err = CombineError;

    fn from_str(reference: &str) -> Result<Self, Self::Err> {
        parse_inner(reference, reference)
    }
}

fn parse_inner(part: &str, whole: &str) -> Result<TypeRef, CombineError> {
    if let Some(inner) = part.strip_suffix('!') {
        return Ok(parse_inner(inner, whole)?.non_null());
    }

    if let Some(rest) = part.strip_prefix('[') {
        let inner = rest.strip_suffix(']').ok_or_else(|| invalid(whole))?;
        return Ok(parse_inner(inner, whole)?.list());
    }

    let mut chars = part.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

    if starts_with_letter && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(TypeRef::Named(part.to_owned()))
    } else {
        Err(invalid(whole))
    }
}

fn invalid(reference: &str) -> CombineError {
    CombineError::InvalidTypeRef {
        reference: reference.to_owned(),
    }
}

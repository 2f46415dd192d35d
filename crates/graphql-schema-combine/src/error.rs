use crate::graph::TypeKind;

/// A fatal combine failure.
///
/// Every error aborts the whole combine call and the partially built
/// destination graph is dropped. Combining is deterministic, so retrying with
/// the same inputs and policy fails identically.
#[derive(Debug, thiserror::Error)]
pub enum CombineError {
    /// Two same-named definitions of different categories were asked to
    /// merge.
    #[error("cannot merge `{name}`: the two sides are different kinds of definitions ({first} and {second})")]
    TypeMismatch {
        name: String,
        first: TypeKind,
        second: TypeKind,
    },

    /// Two scalars can only be merged when their names are identical. Pick a
    /// side with the conflict policy instead.
    #[error("cannot merge scalar `{first}` with scalar `{second}`: scalars can only be merged with themselves")]
    ScalarMismatch { first: String, second: String },

    /// A standard field present on both merge sides would need its argument
    /// lists reconciled, which is not supported. Silently picking a side
    /// would be a correctness hazard for API consumers.
    #[error("cannot merge field `{type_name}.{field_name}`: the two sides declare different argument shapes, and argument merging is not supported")]
    ArgMergeUnsupported { type_name: String, field_name: String },

    /// A textual type reference that is not in canonical form.
    #[error("invalid type reference: `{reference}`")]
    InvalidTypeRef { reference: String },
}

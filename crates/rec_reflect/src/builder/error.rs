use thiserror::Error;

/// An error returned by [`Builder::make`](crate::builder::Builder::make).
#[non_exhaustive]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// A field was never set. Names the first one in declaration order.
    #[error("missing field `{field}` when building `{type_path}`")]
    MissingField {
        type_path: &'static str,
        field: &'static str,
    },
    /// A field token that does not belong to the record was passed to
    /// [`Builder::set`](crate::builder::Builder::set).
    #[error("field token `{field}` does not belong to `{type_path}`")]
    ForeignField {
        type_path: &'static str,
        field: &'static str,
    },
    /// A staged value does not convert to the field type.
    #[error("field `{field}` expects `{expected}`, staged value is `{found}`")]
    SlotMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

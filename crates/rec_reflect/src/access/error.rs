use alloc::string::String;

use thiserror::Error;

/// An error returned by name-keyed field assignment.
///
/// Produced by [`Binder::assign`](crate::access::Binder::assign) and
/// [`Builder::set_by_name`](crate::builder::Builder::set_by_name).
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The value cannot convert to the field's declared type.
    #[error("bad assignment type: cannot assign `{from_type}` to field `{field}` of type `{to_type}`")]
    TypeMismatch {
        field: &'static str,
        from_type: &'static str,
        to_type: &'static str,
    },
    /// The record has no field with this name.
    #[error("unknown field `{field}` on `{type_path}`")]
    UnknownField {
        type_path: &'static str,
        field: String,
    },
}

impl FieldError {
    /// Returns the name of the field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::TypeMismatch { field, .. } => field,
            Self::UnknownField { field, .. } => field,
        }
    }
}

use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::Struct;

macro_rules! impl_kind_fn {
    () => {
        /// Returns the [`ReflectKind`] of this value.
        #[inline]
        pub const fn kind(&self) -> ReflectKind {
            match self {
                Self::Struct(_) => ReflectKind::Struct,
                Self::Opaque(_) => ReflectKind::Opaque,
            }
        }
    };
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of "kinds" of a reflected value.
///
/// Obtained through [`Reflect::reflect_ref`].
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    impl_kind_fn!();

    /// Returns the record view, or a [`ReflectKindError`].
    pub fn as_struct(self) -> Result<&'a dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: self.kind(),
            }),
        }
    }

    /// Returns the opaque view, or a [`ReflectKindError`].
    pub fn as_opaque(self) -> Result<&'a dyn Reflect, ReflectKindError> {
        match self {
            Self::Opaque(value) => Ok(value),
            _ => Err(ReflectKindError {
                expected: ReflectKind::Opaque,
                received: self.kind(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable enumeration of "kinds" of a reflected value.
///
/// Obtained through [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    impl_kind_fn!();

    /// Returns the record view, or a [`ReflectKindError`].
    pub fn as_struct(self) -> Result<&'a mut dyn Struct, ReflectKindError> {
        match self {
            Self::Struct(value) => Ok(value),
            Self::Opaque(_) => Err(ReflectKindError {
                expected: ReflectKind::Struct,
                received: ReflectKind::Opaque,
            }),
        }
    }
}

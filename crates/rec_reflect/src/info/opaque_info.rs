use crate::info::{Type, TypePath};

/// Metadata for types whose internals are opaque to the reflection system.
///
/// "Opaque" means the type's representation is not exposed, for
/// example primitive types like `u64` or heap-backed types like `String`.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}

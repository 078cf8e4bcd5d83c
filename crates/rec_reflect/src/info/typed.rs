use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Manually Impl
///
/// It is not recommended to implement manually. [`NonGenericTypeInfoCell`]
/// keeps the information in a static built on first access.
///
/// ```
/// use rec_reflect::impls::NonGenericTypeInfoCell;
/// use rec_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Flag;
///
/// impl TypePath for Flag {
///     fn type_path() -> &'static str { "my_crate::Flag" }
///     fn type_name() -> &'static str { "Flag" }
/// }
///
/// impl Typed for Flag {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(Flag::type_info().as_opaque().is_ok());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
pub trait Typed: TypePath {
    /// A static accessor to compile-time type information.
    ///
    /// Note: Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Provide dynamic dispatch for types that implement [`Typed`].
///
/// Auto impl for all types that implemented [`Typed`].
pub trait DynamicTyped {
    /// Returns the [`TypeInfo`] of the underlying type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rec_reflect::{derive::Reflect, Reflect, info::DynamicTyped};
    /// #[derive(Reflect)]
    /// struct A { v: u64 }
    ///
    /// let a: Box<dyn Reflect> = Box::new(A { v: 1 });
    /// let info = a.reflect_type_info();
    /// assert_eq!(info.as_struct().unwrap().field_len(), 1);
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}

//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed).
//!
//! Internally, there is an [`OnceLock<T>`], almost no additional expenses.
//! The first caller builds the value; every later caller, on any thread,
//! reads the same immutable instance.

use std::sync::OnceLock;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    pub trait TypedProperty: 'static {}

    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// A container for storing compile-time information of a non-generic type.
///
/// # Examples
///
/// ```
/// use rec_reflect::impls::NonGenericTypeInfoCell;
/// use rec_reflect::info::{NamedField, StructInfo, TypeInfo, TypePath, Typed};
///
/// struct Pair { a: i32, b: i32 }
///
/// impl TypePath for Pair {
///     fn type_path() -> &'static str { "my_crate::Pair" }
///     fn type_name() -> &'static str { "Pair" }
/// }
///
/// fn pair_info() -> &'static TypeInfo {
///     static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///     CELL.get_or_init(|| TypeInfo::Struct(StructInfo::new::<Pair>(&[
///         NamedField::new::<i32>("a"),
///         NamedField::new::<i32>("b"),
///     ])))
/// }
///
/// assert!(core::ptr::eq(pair_info(), pair_info()));
/// assert_eq!(pair_info().as_struct().unwrap().field_len(), 2);
/// ```
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// See [`NonGenericTypeCell`].
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, building it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

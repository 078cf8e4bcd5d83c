use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{Type, TypeInfo, Typed};
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// NamedField

/// Descriptor of one record field.
///
/// Holds the field name, its [`Type`], and the capability to convert a
/// reflected value into the field's type, which is the type check behind
/// [`wrap`](crate::access::wrap) and [`Builder::set_by_name`].
///
/// # Examples
///
/// ```
/// use rec_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     count: i64,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
/// let field = info.field_at(0).unwrap();
///
/// assert!(field.type_is::<i64>());
/// assert_eq!(field.name(), "count");
///
/// // `i32` converts losslessly to `i64`, `&str` does not.
/// assert!(field.convert(&7_i32).is_some());
/// assert!(field.convert(&"7").is_none());
/// ```
///
/// [`Builder::set_by_name`]: crate::builder::Builder::set_by_name
#[derive(Clone, Copy)]
pub struct NamedField {
    ty: Type,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    convert: fn(&dyn Reflect) -> Option<Box<dyn Reflect>>,
}

fn convert_into<T: FromReflect>(value: &dyn Reflect) -> Option<Box<dyn Reflect>> {
    T::from_reflect(value).map(Reflect::into_boxed_reflect)
}

impl NamedField {
    /// Creates a new [`NamedField`] for the given field `name` and type `T`.
    #[inline]
    pub const fn new<T: FromReflect + Typed>(name: &'static str) -> Self {
        Self {
            ty: Type::of::<T>(),
            name,
            type_info: T::type_info,
            convert: convert_into::<T>,
        }
    }

    /// Returns the field's [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty.id()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Returns the type path of the field type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Converts `value` into a boxed value of this field's type.
    ///
    /// Returns `None` if the value's type cannot convert to the field type.
    #[inline]
    pub fn convert(&self, value: &dyn Reflect) -> Option<Box<dyn Reflect>> {
        (self.convert)(value)
    }
}

impl fmt::Debug for NamedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedField")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .finish()
    }
}

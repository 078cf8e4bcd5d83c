use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::cmp::Ordering;
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The core trait of the reflection system.
///
/// A reflected value is either a record ([`Struct`](crate::ops::Struct)),
/// whose fields can be visited by name or index, or an opaque leaf value
/// such as `i32` or `String`.
///
/// Records implement it through [`#[derive(Reflect)]`](crate::derive::Reflect).
///
/// # Examples
///
/// ```
/// use rec_reflect::{Reflect, info::ReflectKind};
///
/// let mut value: Box<dyn Reflect> = Box::new(5_i32);
/// assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
///
/// // `set` replaces the value if the types are equal.
/// value.set(Box::new(9_i32)).unwrap();
/// assert_eq!(value.downcast_ref::<i32>(), Some(&9));
///
/// // otherwise the argument is given back.
/// let back = value.set(Box::new(9_u8)).unwrap_err();
/// assert!(back.is::<u8>());
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Replaces `self` with `value` if both have the same type.
    ///
    /// The value is given back unchanged on type mismatch.
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the [`ReflectKind`] of this value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of "kinds" of type.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable enumeration of "kinds" of type.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns a "partial equality" comparison result.
    ///
    /// `None` means the comparison is not supported.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Returns a "partial ordering" comparison result.
    ///
    /// `None` means the values are unordered or the comparison is not supported.
    #[inline]
    fn reflect_partial_cmp(&self, _other: &dyn Reflect) -> Option<Ordering> {
        None
    }

    /// Debug formatter for the reflected value.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => crate::impls::struct_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }

    /// Display formatter for the reflected value.
    ///
    /// Records use the [`format`](crate::format()) layout.
    fn reflect_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(data) => crate::impls::struct_display(data, f),
            ReflectRef::Opaque(_) => write!(f, "<{}>", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// The trait object is given back if the type does not match.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing it.
    ///
    /// The trait object is given back if the type does not match.
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl fmt::Display for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_display(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};

    use crate::Reflect;

    #[test]
    fn downcast_and_take() {
        let value: Box<dyn Reflect> = Box::new(String::from("hi"));
        assert!(value.is::<String>());
        assert!(value.downcast_ref::<i32>().is_none());

        let value = value.downcast::<i32>().unwrap_err();
        assert_eq!(value.take::<String>().unwrap(), "hi");
    }

    #[test]
    fn display_and_debug() {
        let value: &dyn Reflect = &"text";
        assert_eq!(value.to_string(), "text");
        assert_eq!(alloc::format!("{value:?}"), "\"text\"");
    }
}

use alloc::boxed::Box;

use crate::Reflect;

/// A trait that enables types to be dynamically constructed from reflected data.
///
/// Leaf types accept their own type and every type they convert from
/// without loss (`i64` from `i32`, `String` from `&'static str`).
/// Records accept any [`Struct`](crate::ops::Struct) whose fields convert by name.
///
/// # Examples
///
/// ```
/// use rec_reflect::FromReflect;
///
/// assert_eq!(i64::from_reflect(&3_i32), Some(3));
/// assert_eq!(String::from_reflect(&"hi"), Some(String::from("hi")));
/// assert_eq!(String::from_reflect(&50_i32), None);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FromReflect` so cannot be created through reflection",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait FromReflect: Reflect + Sized {
    /// Constructs a concrete instance of `Self` from a reflected value.
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self>;

    /// Attempts to downcast the given value to `Self` and
    /// falls back to [`FromReflect::from_reflect`].
    ///
    /// The value is given back if neither works.
    fn take_from_reflect(reflect: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        match reflect.take::<Self>() {
            Ok(value) => Ok(value),
            Err(reflect) => match Self::from_reflect(reflect.as_ref()) {
                Some(success) => Ok(success),
                None => Err(reflect),
            },
        }
    }
}

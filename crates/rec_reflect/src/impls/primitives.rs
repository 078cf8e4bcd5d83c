use alloc::string::String;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

// `from: [..]` lists the types with a lossless `From` conversion into `$ty`,
// those are accepted by `FromReflect` besides `$ty` itself.
macro_rules! impl_reflect_primitive {
    ($ty:ty, $path:literal, $name:literal, $module:expr $(, from: [$($src:ty),* $(,)?])?) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
            }

            fn reflect_partial_cmp(&self, other: &dyn Reflect) -> Option<::core::cmp::Ordering> {
                other
                    .downcast_ref::<Self>()
                    .and_then(|other| PartialOrd::partial_cmp(self, other))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }

            #[inline]
            fn reflect_display(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }
        }

        impl FromReflect for $ty {
            fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
                if let Some(value) = reflect.downcast_ref::<Self>() {
                    return Some(Clone::clone(value));
                }
                $($(
                    if let Some(value) = reflect.downcast_ref::<$src>() {
                        return Some(<Self as From<$src>>::from(*value));
                    }
                )*)?
                None
            }
        }
    };
}

impl_reflect_primitive!(bool, "bool", "bool", None);
impl_reflect_primitive!(char, "char", "char", None, from: [u8]);

impl_reflect_primitive!(u8, "u8", "u8", None);
impl_reflect_primitive!(u16, "u16", "u16", None, from: [u8]);
impl_reflect_primitive!(u32, "u32", "u32", None, from: [u8, u16]);
impl_reflect_primitive!(u64, "u64", "u64", None, from: [u8, u16, u32]);
impl_reflect_primitive!(u128, "u128", "u128", None, from: [u8, u16, u32, u64]);
impl_reflect_primitive!(usize, "usize", "usize", None, from: [u8, u16]);

impl_reflect_primitive!(i8, "i8", "i8", None);
impl_reflect_primitive!(i16, "i16", "i16", None, from: [i8, u8]);
impl_reflect_primitive!(i32, "i32", "i32", None, from: [i8, i16, u8, u16]);
impl_reflect_primitive!(i64, "i64", "i64", None, from: [i8, i16, i32, u8, u16, u32]);
impl_reflect_primitive!(
    i128, "i128", "i128", None,
    from: [i8, i16, i32, i64, u8, u16, u32, u64]
);
impl_reflect_primitive!(isize, "isize", "isize", None, from: [i8, i16, u8]);

impl_reflect_primitive!(f32, "f32", "f32", None, from: [i8, i16, u8, u16]);
impl_reflect_primitive!(f64, "f64", "f64", None, from: [f32, i8, i16, i32, u8, u16, u32]);

impl_reflect_primitive!(&'static str, "&str", "&str", None);
impl_reflect_primitive!(
    String,
    "alloc::string::String",
    "String",
    Some("alloc::string"),
    from: [&'static str, char]
);

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use core::cmp::Ordering;

    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::{FromReflect, Reflect};

    #[test]
    fn type_path() {
        assert_eq!(<i32 as TypePath>::type_path(), "i32");
        assert_eq!(<String as TypePath>::type_path(), "alloc::string::String");
        assert_eq!(<String as TypePath>::module_path(), Some("alloc::string"));
        assert_eq!(<&'static str as TypePath>::type_name(), "&str");
        assert_eq!(f64::type_info().kind(), ReflectKind::Opaque);
    }

    #[test]
    fn widening_conversions() {
        assert_eq!(i64::from_reflect(&9001_i32), Some(9001));
        assert_eq!(i16::from_reflect(&200_u8), Some(200));
        assert_eq!(f64::from_reflect(&1.5_f32), Some(1.5));
        assert_eq!(String::from_reflect(&'c'), Some(String::from("c")));
    }

    #[test]
    fn lossy_conversions_are_rejected() {
        assert_eq!(i16::from_reflect(&1_i32), None);
        assert_eq!(u32::from_reflect(&1_i32), None);
        assert_eq!(String::from_reflect(&50_i32), None);
        assert_eq!(bool::from_reflect(&1_u8), None);
    }

    #[test]
    fn compare() {
        let a: &dyn Reflect = &1_i32;
        assert_eq!(a.reflect_partial_eq(&1_i32), Some(true));
        assert_eq!(a.reflect_partial_eq(&1_i64), Some(false));
        assert_eq!(a.reflect_partial_cmp(&2_i32), Some(Ordering::Less));
        assert_eq!(a.reflect_partial_cmp(&2_i64), None);
        assert_eq!(f32::NAN.reflect_partial_cmp(&1.0_f32), None);
    }
}

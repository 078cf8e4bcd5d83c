use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};

use rec_utils::hash::HashMap;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
use crate::ops::{Struct, StructFieldIter};
use crate::reflection::impl_reflect_cast_fn;

/// A record-shaped value built at runtime.
///
/// Fields keep their insertion order; inserting an existing name replaces
/// the value in place.
///
/// Its [`reflect_kind`](Reflect::reflect_kind) is
/// [`ReflectKind::Struct`](crate::info::ReflectKind::Struct),
/// so it can be visited field by field, but it has no static schema: its
/// [`type_info`](crate::info::Typed::type_info) is opaque and
/// [`Wrap::new`](crate::access::Wrap::new) rejects it. Use it as the source
/// of [`Wrap::patch`](crate::access::Wrap::patch) or
/// [`FromReflect`](crate::FromReflect) instead.
///
/// # Examples
///
/// ```
/// use rec_reflect::{FromReflect, derive::Reflect, ops::DynamicStruct};
///
/// #[derive(Reflect, Debug, PartialEq)]
/// struct Point { x: i64, y: i64 }
///
/// let mut patch = DynamicStruct::new();
/// patch.insert("y", 2_i32);
/// patch.insert("x", 1_u8);
///
/// // fields are matched by name and converted.
/// assert_eq!(Point::from_reflect(&patch), Some(Point { x: 1, y: 2 }));
/// ```
#[derive(Default)]
pub struct DynamicStruct {
    fields: Vec<Box<dyn Reflect>>,
    field_names: Vec<Cow<'static, str>>,
    field_indices: HashMap<Cow<'static, str>, usize>,
}

impl TypePath for DynamicStruct {
    #[inline]
    fn type_path() -> &'static str {
        "rec_reflect::ops::DynamicStruct"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicStruct"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("rec_reflect::ops")
    }
}

impl Typed for DynamicStruct {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl DynamicStruct {
    /// Creates an empty [`DynamicStruct`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty [`DynamicStruct`] with room for `capacity` fields.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            field_names: Vec::with_capacity(capacity),
            field_indices: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts a boxed field value, replacing a field with the same name.
    pub fn insert_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Reflect>) {
        let name: Cow<'static, str> = name.into();
        if let Some(index) = self.field_indices.get(&name) {
            self.fields[*index] = value;
        } else {
            self.fields.push(value);
            self.field_indices
                .insert(name.clone(), self.fields.len() - 1);
            self.field_names.push(name);
        }
    }

    /// Inserts a field value, replacing a field with the same name.
    #[inline]
    pub fn insert<T: Reflect>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.insert_boxed(name, Box::new(value));
    }

    /// Chained form of [`DynamicStruct::insert`].
    #[inline]
    pub fn with<T: Reflect>(mut self, name: impl Into<Cow<'static, str>>, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the index of the field named `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }
}

impl Reflect for DynamicStruct {
    impl_reflect_cast_fn!(Struct);

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        crate::impls::struct_partial_eq(self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicStruct(")?;
        crate::impls::struct_debug(self, f)?;
        write!(f, ")")
    }
}

impl fmt::Debug for DynamicStruct {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Box<dyn Reflect>)> for DynamicStruct {
    fn from_iter<T: IntoIterator<Item = (N, Box<dyn Reflect>)>>(fields: T) -> Self {
        let mut dynamic_struct = DynamicStruct::new();
        for (name, value) in fields {
            dynamic_struct.insert_boxed(name, value);
        }
        dynamic_struct
    }
}

impl Struct for DynamicStruct {
    #[inline]
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.field_indices
            .get(name)
            .map(|index| &*self.fields[*index])
    }

    #[inline]
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        self.field_indices
            .get(name)
            .map(|index| &mut *self.fields[*index])
    }

    #[inline]
    fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
        self.fields.get(index).map(Deref::deref)
    }

    #[inline]
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.fields.get_mut(index).map(DerefMut::deref_mut)
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&str> {
        self.field_names.get(index).map(AsRef::as_ref)
    }

    #[inline]
    fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::DynamicStruct;
    use crate::Reflect;
    use crate::ops::Struct;

    #[test]
    fn insert_replaces_in_place() {
        let mut value = DynamicStruct::new().with("a", 1_i32).with("b", 2_i32);
        value.insert("a", String::from("x"));

        assert_eq!(value.field_len(), 2);
        assert_eq!(value.name_at(0), Some("a"));
        assert_eq!(value.index_of("b"), Some(1));

        let value: &dyn Struct = &value;
        assert_eq!(value.field_as::<String>("a").map(String::as_str), Some("x"));
        assert_eq!(value.field_at_as::<i32>(1), Some(&2));
    }

    #[test]
    fn struct_kind_without_schema() {
        use crate::info::{DynamicTyped, ReflectKind};

        let value = DynamicStruct::new().with("a", 1_i32);
        assert_eq!(value.reflect_kind(), ReflectKind::Struct);
        assert_eq!(value.reflect_type_info().kind(), ReflectKind::Opaque);
        assert!(value.reflect_type_info().as_struct().is_err());
    }

    #[test]
    fn collect_and_compare() {
        let a: DynamicStruct = [("x", Box::new(1_u8) as Box<dyn Reflect>)]
            .into_iter()
            .collect();
        let b = DynamicStruct::new().with("x", 1_u8);
        let c = DynamicStruct::new().with("x", 2_u8);

        assert_eq!(a.reflect_partial_eq(&b), Some(true));
        assert_eq!(a.reflect_partial_eq(&c), Some(false));
    }
}

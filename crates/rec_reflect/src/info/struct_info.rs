use alloc::boxed::Box;

use rec_utils::hash::HashMap;

use crate::info::{NamedField, Type, TypePath};

/// The schema of a record: its [`Type`] and the fields in declaration order.
///
/// Built once per record type and shared by every instance, see
/// [`Typed::type_info`](crate::info::Typed::type_info).
///
/// # Examples
///
/// ```rust
/// use rec_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
///     tag: char,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.type_name(), "A");
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.field_names(), &["val", "tag"]);
/// assert_eq!(info.index_of("tag"), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_names: Box<[&'static str]>,
    field_indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// The order of fields is fixed by the input order.
    /// Field names must be unique.
    pub fn new<T: TypePath>(fields: &[NamedField]) -> Self {
        let field_names: Box<[&'static str]> = fields.iter().map(NamedField::name).collect();
        let field_indices: HashMap<&'static str, usize> = field_names
            .iter()
            .enumerate()
            .map(|(index, name)| (*name, index))
            .collect();

        debug_assert_eq!(
            field_indices.len(),
            fields.len(),
            "duplicate field name in `{}`",
            T::type_path(),
        );

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_names,
            field_indices,
        }
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Scans the fields in declaration order and returns the first one
    /// named `name`, with its index.
    ///
    /// This is O(N) complexity, but needs no hashing.
    pub fn position(&self, name: &str) -> Option<(usize, &NamedField)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name() == name)
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, NamedField> {
        self.fields.iter()
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> &[&'static str] {
        &self.field_names
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}

impl<'a> IntoIterator for &'a StructInfo {
    type Item = &'a NamedField;
    type IntoIter = core::slice::Iter<'a, NamedField>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

use core::fmt;

// -----------------------------------------------------------------------------
// Field

/// A typed token for one field of record `R` with type `F`.
///
/// Generated by [`#[derive(Reflect)]`](crate::derive::Reflect) and reachable
/// through [`Record::FIELDS`](crate::Record::FIELDS). Besides naming the
/// field for a [`Builder`](crate::builder::Builder), it reads and writes the
/// field of any `R`.
///
/// # Examples
///
/// ```
/// use rec_reflect::{Record, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// let y = Point::FIELDS.y;
/// let mut p = Point { x: 1, y: 2 };
///
/// assert_eq!((y.index(), y.name()), (1, "y"));
/// assert_eq!(*y.get(&p), 2);
///
/// y.set(&mut p, 5_i8);
/// assert_eq!(p.y, 5);
/// ```
pub struct Field<R, F> {
    index: usize,
    name: &'static str,
    get: fn(&R) -> &F,
    get_mut: fn(&mut R) -> &mut F,
}

impl<R, F> Field<R, F> {
    /// Creates a token for the field at `index`.
    ///
    /// Called by the derive to fill `Record::FIELDS`. `get` and `get_mut`
    /// must project the same field.
    #[doc(hidden)]
    #[inline]
    pub const fn new(
        index: usize,
        name: &'static str,
        get: fn(&R) -> &F,
        get_mut: fn(&mut R) -> &mut F,
    ) -> Self {
        Self {
            index,
            name,
            get,
            get_mut,
        }
    }

    /// Returns the field index in declaration order.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns a reference to the field of `record`.
    #[inline]
    pub fn get<'r>(&self, record: &'r R) -> &'r F {
        (self.get)(record)
    }

    /// Returns a mutable reference to the field of `record`.
    #[inline]
    pub fn get_mut<'r>(&self, record: &'r mut R) -> &'r mut F {
        (self.get_mut)(record)
    }

    /// Assigns `value` to the field of `record`.
    #[inline]
    pub fn set(&self, record: &mut R, value: impl Into<F>) {
        *(self.get_mut)(record) = value.into();
    }

    /// Assigns `value` to the field of `record`, returning the old value.
    #[inline]
    pub fn replace(&self, record: &mut R, value: impl Into<F>) -> F {
        core::mem::replace((self.get_mut)(record), value.into())
    }
}

impl<R, F> Clone for Field<R, F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, F> Copy for Field<R, F> {}

impl<R, F> fmt::Debug for Field<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("type", &core::any::type_name::<F>())
            .finish()
    }
}

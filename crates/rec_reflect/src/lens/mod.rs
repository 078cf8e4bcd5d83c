//! Positional views of a record.
//!
//! A [`TupleLens`] projects a record into a tuple of field references in
//! declaration order. Ordering and bulk assignment are built on that tuple:
//!
//! - [`lt`] / [`partial_cmp`]: lexicographic comparison, first field most significant.
//! - [`load`] / [`load_into`]: memberwise assignment from a tuple of values,
//!   each converted with [`From`].
//!
//! A field type without `PartialOrd`, or a value tuple of the wrong arity or
//! with an unconvertible element, is rejected at compile time.
//!
//! # Examples
//!
//! ```
//! use rec_reflect::{derive::Reflect, lens::{self, TupleLens}};
//!
//! #[derive(Reflect, Default)]
//! struct Foo {
//!     a: i64,
//!     b: i16,
//!     c: i32,
//!     d: String,
//! }
//!
//! let foo = lens::load(Foo::default(), (1, 2_i8, 3, "fun"));
//! assert_eq!(foo.project(), (&1, &2, &3, &String::from("fun")));
//!
//! let bar = lens::load(Foo::default(), (1, 2_i8, 4, ""));
//! assert!(lens::lt(&foo, &bar));
//! ```

// -----------------------------------------------------------------------------
// Modules

mod tuple_into;

// -----------------------------------------------------------------------------
// Exports

pub use tuple_into::TupleInto;

use core::cmp::Ordering;

use crate::ops::Struct;

// -----------------------------------------------------------------------------
// TupleLens

/// Tuple projection of a record, in declaration order.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect). For
/// `struct Point { x: i32, y: i32 }`:
///
/// - `Ref<'a>` is `(&'a i32, &'a i32)`
/// - `Mut<'a>` is `(&'a mut i32, &'a mut i32)`
/// - `Values` is `(i32, i32)`
pub trait TupleLens: Struct {
    /// Tuple of shared field references.
    type Ref<'a>
    where
        Self: 'a;

    /// Tuple of mutable field references.
    type Mut<'a>
    where
        Self: 'a;

    /// Tuple of owned field values.
    type Values;

    /// Returns one reference per field, in declaration order.
    fn project(&self) -> Self::Ref<'_>;

    /// Returns one mutable reference per field, in declaration order.
    fn project_mut(&mut self) -> Self::Mut<'_>;

    /// Assigns every field from `values`, in declaration order.
    fn assign(&mut self, values: Self::Values);
}

/// Compares two records lexicographically over their fields.
///
/// The first field that differs decides the result.
#[inline]
pub fn partial_cmp<'a, R>(a: &'a R, b: &'a R) -> Option<Ordering>
where
    R: TupleLens + 'a,
    R::Ref<'a>: PartialOrd,
{
    a.project().partial_cmp(&b.project())
}

/// Returns `true` if `a` orders before `b`, see [`partial_cmp`].
///
/// ```
/// use rec_reflect::{derive::Reflect, lens};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// assert!(lens::lt(&Point { x: 1, y: 2 }, &Point { x: 1, y: 3 }));
/// assert!(!lens::lt(&Point { x: 2, y: 1 }, &Point { x: 1, y: 9 }));
/// ```
#[inline]
pub fn lt<'a, R>(a: &'a R, b: &'a R) -> bool
where
    R: TupleLens + 'a,
    R::Ref<'a>: PartialOrd,
{
    a.project() < b.project()
}

/// Assigns `values` to the fields of `record` and returns it.
///
/// Each position converts into the field type through [`From`].
#[inline]
pub fn load<R, V>(mut record: R, values: V) -> R
where
    R: TupleLens,
    V: TupleInto<R::Values>,
{
    record.assign(values.tuple_into());
    record
}

/// In-place form of [`load`].
#[inline]
pub fn load_into<R, V>(record: &mut R, values: V)
where
    R: TupleLens,
    V: TupleInto<R::Values>,
{
    record.assign(values.tuple_into());
}

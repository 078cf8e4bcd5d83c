//! Incremental construction of records.
//!
//! A [`Builder`] stages field values one at a time, in any order, and
//! produces the record with [`Builder::make`] once every field is set.
//! Fields are named by the typed tokens in [`Record::FIELDS`], or by
//! string through [`Builder::set_by_name`].
//!
//! # Examples
//!
//! ```
//! use rec_reflect::{Record, builder::BuildError, derive::Reflect};
//!
//! #[derive(Reflect, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let mut builder = Point::builder();
//! builder.set(Point::FIELDS.y, 2);
//! builder.set(Point::FIELDS.x, 0);
//! builder.set(Point::FIELDS.x, 1);
//! assert_eq!(builder.make(), Ok(Point { x: 1, y: 2 }));
//!
//! let err = Point::builder().with(Point::FIELDS.x, 1).make().unwrap_err();
//! assert_eq!(err, BuildError::MissingField { type_path: Point::schema().type_path(), field: "y" });
//! ```

// -----------------------------------------------------------------------------
// Modules

mod error;
mod field;
mod slots;

// -----------------------------------------------------------------------------
// Exports

pub use error::BuildError;
pub use field::Field;
pub use slots::Slots;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use fixedbitset::FixedBitSet;

use crate::access::{FieldError, convert_for, convert_ref_for};
use crate::info::{NamedField, StructInfo, Typed};
use crate::lens::TupleLens;
use crate::ops::Struct;
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// Record

/// A reflected record: a named-field struct with a static schema.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect), which also
/// generates a `<Name>Fields` struct holding one [`Field`] token per field.
pub trait Record: Struct + Typed + FromReflect + TupleLens {
    /// The generated struct of field tokens.
    type Fields: 'static;

    /// One [`Field`] token per field, named like the fields.
    const FIELDS: Self::Fields;

    /// Returns the record schema.
    fn schema() -> &'static StructInfo;

    /// Builds the record by moving every field out of `slots`.
    ///
    /// Usually called through [`Builder::make`].
    fn from_slots(slots: &mut Slots) -> Result<Self, BuildError>;

    /// Returns an empty [`Builder`] for this record.
    #[inline]
    fn builder() -> Builder<Self> {
        Builder::new()
    }
}

// -----------------------------------------------------------------------------
// Builder

/// Stages field values for a record `R`, see the [module docs](self).
///
/// Setting a field twice keeps the last value.
pub struct Builder<R: Record> {
    schema: &'static StructInfo,
    set_mask: FixedBitSet,
    slots: Slots,
    // First rejected field token, reported by `make`.
    foreign: Option<&'static str>,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Record> Builder<R> {
    /// Creates a builder with no field set.
    pub fn new() -> Self {
        let schema = R::schema();
        Self {
            schema,
            set_mask: FixedBitSet::with_capacity(schema.field_len()),
            slots: Slots::new(schema),
            foreign: None,
            _marker: PhantomData,
        }
    }

    /// Returns the schema of the record being built.
    #[inline]
    pub fn schema(&self) -> &'static StructInfo {
        self.schema
    }

    fn stage(&mut self, index: usize, value: Box<dyn Reflect>) {
        self.slots.put(index, value);
        self.set_mask.insert(index);
    }

    /// Stages `value` for `field`.
    ///
    /// A token that does not match the schema entry at its index is not
    /// staged, and [`Builder::make`] then fails with
    /// [`BuildError::ForeignField`].
    pub fn set<F: Reflect>(&mut self, field: Field<R, F>, value: impl Into<F>) -> &mut Self {
        let index = field.index();
        let valid = self
            .schema
            .field_at(index)
            .is_some_and(|info| info.name() == field.name() && info.type_is::<F>());

        if valid {
            self.stage(index, Box::new(value.into()));
        } else {
            log::warn!(
                "field token `{}` at {index} does not belong to `{}`, ignored",
                field.name(),
                self.schema.type_path(),
            );
            self.foreign.get_or_insert(field.name());
        }
        self
    }

    /// By-value form of [`Builder::set`], for chaining.
    #[inline]
    pub fn with<F: Reflect>(mut self, field: Field<R, F>, value: impl Into<F>) -> Self {
        self.set(field, value);
        self
    }

    /// Stages `value` for the field named `name`, converting it to the
    /// field type.
    ///
    /// # Errors
    ///
    /// [`FieldError::UnknownField`] or [`FieldError::TypeMismatch`]; the
    /// builder is unchanged on error.
    pub fn set_by_name(&mut self, name: &str, value: impl Reflect) -> Result<&mut Self, FieldError> {
        let (index, value) = convert_for(self.schema, name, Box::new(value))?;
        self.stage(index, value);
        Ok(self)
    }

    /// Same as [`Builder::set_by_name`], for a borrowed reflected value.
    pub fn set_reflect(&mut self, name: &str, value: &dyn Reflect) -> Result<&mut Self, FieldError> {
        let (index, value) = convert_ref_for(self.schema, name, value)?;
        self.stage(index, value);
        Ok(self)
    }

    /// Returns `true` if `field` has been set.
    #[inline]
    pub fn is_set<F>(&self, field: Field<R, F>) -> bool {
        self.set_mask.contains(field.index())
    }

    /// Returns `true` if every field has been set.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.missing().next().is_none()
    }

    /// Returns the names of the fields not set yet, in declaration order.
    pub fn missing(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.set_mask
            .zeroes()
            .filter_map(|index| self.schema.field_at(index).map(NamedField::name))
    }

    /// Builds the record, consuming the builder.
    ///
    /// # Errors
    ///
    /// [`BuildError::ForeignField`] if a foreign token was passed to
    /// [`Builder::set`], otherwise [`BuildError::MissingField`] naming the
    /// first unset field.
    pub fn make(mut self) -> Result<R, BuildError> {
        if let Some(field) = self.foreign {
            let err = BuildError::ForeignField {
                type_path: self.schema.type_path(),
                field,
            };
            log::debug!("{err}");
            return Err(err);
        }

        if let Some(field) = self.missing().next() {
            let err = BuildError::MissingField {
                type_path: self.schema.type_path(),
                field,
            };
            log::debug!("{err}");
            return Err(err);
        }

        log::trace!("building `{}`", self.schema.type_path());
        R::from_slots(&mut self.slots)
    }
}

impl<R: Record> Default for Builder<R> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> fmt::Debug for Builder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set: Vec<&str> = self
            .schema
            .iter()
            .enumerate()
            .filter(|(index, _)| self.set_mask.contains(*index))
            .map(|(_, field)| field.name())
            .collect();

        f.debug_struct("Builder")
            .field("record", &self.schema.type_path())
            .field("set", &set)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{BuildError, Builder};
    use crate::Record;
    use crate::access::FieldError;
    use crate::derive::Reflect;

    #[derive(Reflect, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Reflect, Debug, PartialEq)]
    struct Named {
        id: u64,
        label: String,
    }

    // No `Default` impl: `make` must not need one.
    #[derive(Reflect, Debug, PartialEq)]
    struct Handle {
        raw: u32,
    }

    #[test]
    fn make_equals_literal() {
        let mut builder = Point::builder();
        builder.set(Point::FIELDS.x, 1).set(Point::FIELDS.y, 2);
        assert_eq!(builder.make().unwrap(), Point { x: 1, y: 2 });

        let handle = Handle::builder().with(Handle::FIELDS.raw, 7_u8).make();
        assert_eq!(handle, Ok(Handle { raw: 7 }));
    }

    #[test]
    fn last_write_wins() {
        let point = Point::builder()
            .with(Point::FIELDS.x, 1)
            .with(Point::FIELDS.y, 2)
            .with(Point::FIELDS.x, 10)
            .make()
            .unwrap();
        assert_eq!(point, Point { x: 10, y: 2 });
    }

    #[test]
    fn missing_field() {
        let builder = Named::builder().with(Named::FIELDS.label, "a");
        assert!(!builder.is_complete());
        assert!(builder.is_set(Named::FIELDS.label));
        assert!(!builder.is_set(Named::FIELDS.id));
        assert_eq!(builder.missing().collect::<Vec<_>>(), ["id"]);

        assert_eq!(
            builder.make(),
            Err(BuildError::MissingField {
                type_path: Named::schema().type_path(),
                field: "id",
            })
        );

        let empty = Builder::<Named>::new();
        assert_eq!(empty.missing().collect::<Vec<_>>(), ["id", "label"]);
    }

    #[test]
    fn set_by_name() {
        let mut builder = Named::builder();
        builder.set_by_name("id", 3_u32).unwrap();
        builder.set_reflect("label", &'z').unwrap();
        assert!(builder.is_complete());

        assert!(matches!(
            builder.set_by_name("id", -1_i32),
            Err(FieldError::TypeMismatch { field: "id", .. })
        ));
        assert!(matches!(
            builder.set_by_name("name", 1_u64),
            Err(FieldError::UnknownField { .. })
        ));

        let named = builder.make().unwrap();
        assert_eq!(named, Named { id: 3, label: String::from("z") });
    }

    #[test]
    fn foreign_token_is_ignored() {
        use crate::builder::Field;

        // A token whose name does not match the schema entry at its index.
        let bogus: Field<Point, i32> = Field::new(0, "y", |p| &p.y, |p| &mut p.y);

        let mut builder = Point::builder();
        builder.set(bogus, 5);
        assert!(!builder.is_set(Point::FIELDS.x));
        assert!(!builder.is_set(Point::FIELDS.y));

        // Completing the builder does not hide the rejected token.
        builder.set(Point::FIELDS.x, 1).set(Point::FIELDS.y, 2);
        assert!(builder.is_complete());
        assert_eq!(
            builder.make(),
            Err(BuildError::ForeignField {
                type_path: Point::schema().type_path(),
                field: "y",
            })
        );
    }

    #[test]
    fn debug_lists_set_fields() {
        let builder = Point::builder().with(Point::FIELDS.y, 1);
        let text = alloc::format!("{builder:?}");
        assert!(text.contains("[\"y\"]"));
    }
}

use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::access::FieldError;
use crate::builder::Record;
use crate::info::{NamedField, ReflectKindError, StructInfo};
use crate::ops::Struct;
use crate::Reflect;

// -----------------------------------------------------------------------------
// wrap

/// Wraps a record for name-keyed field access.
///
/// See the [module docs](crate::access) for an example.
#[inline]
pub fn wrap<R: Record>(record: &mut R) -> Wrap<'_> {
    Wrap {
        schema: R::schema(),
        record,
    }
}

/// Converts `value` into the type of the field named `name`.
///
/// Values that already have the field type are passed through unchanged.
pub(crate) fn convert_for(
    schema: &'static StructInfo,
    name: &str,
    value: Box<dyn Reflect>,
) -> Result<(usize, Box<dyn Reflect>), FieldError> {
    let Some((index, field)) = schema.position(name) else {
        return Err(unknown_field(schema, name));
    };

    if value.ty_id() == field.ty_id() {
        return Ok((index, value));
    }

    match field.convert(value.as_ref()) {
        Some(converted) => Ok((index, converted)),
        None => Err(type_mismatch(field, value.as_ref())),
    }
}

/// Same as [`convert_for`], but borrows the value.
pub(crate) fn convert_ref_for(
    schema: &'static StructInfo,
    name: &str,
    value: &dyn Reflect,
) -> Result<(usize, Box<dyn Reflect>), FieldError> {
    let Some((index, field)) = schema.position(name) else {
        return Err(unknown_field(schema, name));
    };

    match field.convert(value) {
        Some(converted) => Ok((index, converted)),
        None => Err(type_mismatch(field, value)),
    }
}

pub(crate) fn unknown_field(schema: &StructInfo, name: &str) -> FieldError {
    let err = FieldError::UnknownField {
        type_path: schema.type_path(),
        field: name.to_string(),
    };
    log::debug!("{err}");
    err
}

fn type_mismatch(field: &NamedField, value: &dyn Reflect) -> FieldError {
    let err = FieldError::TypeMismatch {
        field: field.name(),
        from_type: value.reflect_type_path(),
        to_type: field.type_path(),
    };
    log::debug!("{err}");
    err
}

// -----------------------------------------------------------------------------
// Wrap

/// A record borrowed for name-keyed access, created by [`wrap`].
pub struct Wrap<'a> {
    record: &'a mut dyn Struct,
    schema: &'static StructInfo,
}

impl<'a> Wrap<'a> {
    /// Wraps any reflected record.
    ///
    /// Fails if the value's type information is not a record schema,
    /// e.g. for a [`DynamicStruct`](crate::ops::DynamicStruct).
    pub fn new(record: &'a mut dyn Struct) -> Result<Self, ReflectKindError> {
        let schema = record.reflect_type_info().as_struct()?;
        Ok(Self { record, schema })
    }

    /// Returns the schema of the wrapped record.
    #[inline]
    pub fn schema(&self) -> &'static StructInfo {
        self.schema
    }

    /// Binds the field named `name` for assignment.
    ///
    /// The name is resolved when the binder assigns.
    #[inline]
    pub fn bind<'w, 'n>(&'w mut self, name: &'n str) -> Binder<'w, 'n> {
        Binder {
            record: &mut *self.record,
            schema: self.schema,
            name,
        }
    }

    /// Shorthand for `self.bind(name).assign(value)`.
    #[inline]
    pub fn set(&mut self, name: &str, value: impl Reflect) -> Result<(), FieldError> {
        self.bind(name).assign(value)
    }

    /// Shorthand for `self.bind(name).assign_reflect(value)`.
    #[inline]
    pub fn set_reflect(&mut self, name: &str, value: &dyn Reflect) -> Result<(), FieldError> {
        self.bind(name).assign_reflect(value)
    }

    /// Returns the value of the field named `name`.
    pub fn get(&self, name: &str) -> Result<&dyn Reflect, FieldError> {
        self.schema
            .position(name)
            .and_then(|(index, _)| self.record.field_at(index))
            .ok_or_else(|| unknown_field(self.schema, name))
    }

    /// Copies every field of `source` into the record, matched by name.
    ///
    /// Fields that `source` does not have keep their value; a field of
    /// `source` the record does not have is an error. Every field is
    /// converted before any is written, so on error the record is unchanged.
    ///
    /// ```
    /// use rec_reflect::{access, derive::Reflect, ops::DynamicStruct};
    ///
    /// #[derive(Reflect)]
    /// struct Size { w: u32, h: u32 }
    ///
    /// let mut size = Size { w: 1, h: 1 };
    /// let patch = DynamicStruct::new().with("h", 20_u8);
    ///
    /// access::wrap(&mut size).patch(&patch).unwrap();
    /// assert_eq!((size.w, size.h), (1, 20));
    ///
    /// let bad = DynamicStruct::new().with("w", 5_u8).with("h", -1_i32);
    /// assert!(access::wrap(&mut size).patch(&bad).is_err());
    /// assert_eq!((size.w, size.h), (1, 20));
    /// ```
    pub fn patch(&mut self, source: &dyn Struct) -> Result<(), FieldError> {
        let mut staged = Vec::with_capacity(source.field_len());
        for (index, value) in source.iter_fields().enumerate() {
            let Some(name) = source.name_at(index) else {
                continue;
            };
            staged.push(convert_ref_for(self.schema, name, value)?);
        }

        for (index, value) in staged {
            commit(self.record, self.schema, index, value)?;
        }
        Ok(())
    }
}

fn commit(
    record: &mut dyn Struct,
    schema: &'static StructInfo,
    index: usize,
    value: Box<dyn Reflect>,
) -> Result<(), FieldError> {
    let (Some(field), Some(slot)) = (schema.field_at(index), record.field_at_mut(index)) else {
        return Err(FieldError::UnknownField {
            type_path: schema.type_path(),
            field: index.to_string(),
        });
    };

    slot.set(value)
        .map_err(|value| type_mismatch(field, value.as_ref()))
}

// -----------------------------------------------------------------------------
// Binder

/// One field of a wrapped record, created by [`Wrap::bind`].
pub struct Binder<'w, 'n> {
    record: &'w mut dyn Struct,
    schema: &'static StructInfo,
    name: &'n str,
}

impl Binder<'_, '_> {
    /// Returns the bound field name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name
    }

    /// Assigns `value` to the bound field, converting it to the field type.
    ///
    /// # Errors
    ///
    /// - [`FieldError::UnknownField`] if the record has no such field.
    /// - [`FieldError::TypeMismatch`] if the value does not convert.
    ///
    /// The record is unchanged on error.
    pub fn assign(self, value: impl Reflect) -> Result<(), FieldError> {
        let (index, value) = convert_for(self.schema, self.name, Box::new(value))?;
        commit(self.record, self.schema, index, value)
    }

    /// Same as [`Binder::assign`], for a borrowed reflected value.
    pub fn assign_reflect(self, value: &dyn Reflect) -> Result<(), FieldError> {
        let (index, value) = convert_ref_for(self.schema, self.name, value)?;
        commit(self.record, self.schema, index, value)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::access::{FieldError, Wrap, wrap};
    use crate::derive::Reflect;
    use crate::ops::{DynamicStruct, Struct};

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(type_path = "tests::Bar")]
    struct Bar {
        a: i32,
        b: String,
    }

    fn bar() -> Bar {
        Bar {
            a: 0,
            b: String::from("zero"),
        }
    }

    #[test]
    fn assign_exact_and_converted() {
        let mut value = bar();
        wrap(&mut value).bind("a").assign(9001).unwrap();
        wrap(&mut value).bind("b").assign("hi").unwrap();
        assert_eq!(value.a, 9001);
        assert_eq!(value.b, "hi");

        wrap(&mut value).set("a", 7_i8).unwrap();
        assert_eq!(value.a, 7);
    }

    #[test]
    fn mismatch_leaves_record_untouched() {
        let mut value = bar();
        let err = wrap(&mut value).bind("b").assign(50).unwrap_err();

        assert_eq!(
            err,
            FieldError::TypeMismatch {
                field: "b",
                from_type: "i32",
                to_type: "alloc::string::String",
            }
        );
        assert_eq!(value, bar());

        // no lossy narrowing
        assert!(wrap(&mut value).set("a", 1_i64).is_err());
        assert_eq!(value.a, 0);
    }

    #[test]
    fn unknown_field() {
        let mut value = bar();
        let err = wrap(&mut value).set("c", 1).unwrap_err();

        assert_eq!(
            err,
            FieldError::UnknownField {
                type_path: "tests::Bar",
                field: String::from("c"),
            }
        );
        assert_eq!(err.field(), "c");
        assert_eq!(value, bar());
    }

    #[test]
    fn get_and_dyn_wrap() {
        let mut value = bar();
        let record: &mut dyn Struct = &mut value;
        let mut wrapped = Wrap::new(record).unwrap();

        assert_eq!(wrapped.schema().type_name(), "Bar");
        wrapped.set_reflect("a", &3_u16).unwrap();
        assert_eq!(wrapped.get("a").unwrap().downcast_ref::<i32>(), Some(&3));
        assert!(wrapped.get("nope").is_err());

        let mut dynamic = DynamicStruct::new();
        assert!(Wrap::new(&mut dynamic).is_err());
    }

    #[test]
    fn patch_is_atomic() {
        let mut value = bar();
        let patch = DynamicStruct::new().with("a", 5_i32).with("b", 'x');
        wrap(&mut value).patch(&patch).unwrap();
        assert_eq!(value.a, 5);
        assert_eq!(value.b, "x");

        let bad = DynamicStruct::new().with("a", 6_i32).with("b", 1.5_f32);
        assert!(wrap(&mut value).patch(&bad).is_err());
        assert_eq!(value.a, 5);

        let unknown = DynamicStruct::new().with("z", 1_i32);
        assert!(wrap(&mut value).patch(&unknown).is_err());
    }
}

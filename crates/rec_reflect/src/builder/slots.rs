use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::builder::BuildError;
use crate::info::{NamedField, StructInfo};
use crate::FromReflect;

/// Staged field values of a [`Builder`](crate::builder::Builder).
///
/// One slot per schema field, in declaration order. Handed to
/// [`Record::from_slots`](crate::Record::from_slots), which moves every
/// value out once.
pub struct Slots {
    schema: &'static StructInfo,
    values: Vec<Option<Box<dyn Reflect>>>,
}

impl Slots {
    pub(crate) fn new(schema: &'static StructInfo) -> Self {
        let mut values = Vec::with_capacity(schema.field_len());
        values.resize_with(schema.field_len(), || None);
        Self { schema, values }
    }

    /// Stores `value` in slot `index`, dropping a previous value.
    ///
    /// Indices beyond the schema are ignored.
    pub(crate) fn put(&mut self, index: usize, value: Box<dyn Reflect>) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = Some(value);
        }
    }

    /// Returns `true` if slot `index` holds a value.
    #[inline]
    pub fn is_filled(&self, index: usize) -> bool {
        self.values.get(index).is_some_and(Option::is_some)
    }

    /// Moves the value out of slot `index` as an `F`.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MissingField`] if the slot is empty.
    /// - [`BuildError::SlotMismatch`] if the value does not convert to `F`.
    pub fn take<F: FromReflect>(&mut self, index: usize) -> Result<F, BuildError> {
        let field = self.schema.field_at(index).map_or("", NamedField::name);

        let Some(value) = self.values.get_mut(index).and_then(Option::take) else {
            return Err(BuildError::MissingField {
                type_path: self.schema.type_path(),
                field,
            });
        };

        F::take_from_reflect(value).map_err(|value| BuildError::SlotMismatch {
            field,
            expected: self
                .schema
                .field_at(index)
                .map_or("", NamedField::type_path),
            found: value.reflect_type_path(),
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::Slots;
    use crate::Record;
    use crate::builder::BuildError;
    use crate::derive::Reflect;

    #[derive(Reflect)]
    struct Pair {
        a: u32,
        b: String,
    }

    #[test]
    fn take_moves_once() {
        let mut slots = Slots::new(Pair::schema());
        slots.put(0, Box::new(4_u8));
        assert!(slots.is_filled(0));
        assert!(!slots.is_filled(1));
        assert!(!slots.is_filled(9));

        assert_eq!(slots.take::<u32>(0), Ok(4));
        assert!(!slots.is_filled(0));
        assert!(matches!(
            slots.take::<u32>(0),
            Err(BuildError::MissingField { field: "a", .. })
        ));
    }

    #[test]
    fn take_mismatch() {
        let mut slots = Slots::new(Pair::schema());
        slots.put(1, Box::new(1.0_f64));
        assert_eq!(
            slots.take::<String>(1),
            Err(BuildError::SlotMismatch {
                field: "b",
                expected: "alloc::string::String",
                found: "f64",
            })
        );
    }
}

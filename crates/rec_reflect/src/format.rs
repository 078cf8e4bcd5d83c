use alloc::string::{String, ToString};
use core::fmt;

use crate::ops::Struct;

/// Renders a record, one field per line.
///
/// The layout is `(TypeName) {`, then `\tname : value` for each field in
/// declaration order with a comma on every line but the last, then `}` and
/// a trailing newline.
///
/// # Examples
///
/// ```
/// use rec_reflect::{derive::Reflect, format};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(format(&Point { x: 1, y: 2 }), "(Point) {\n\tx : 1,\n\ty : 2\n}\n");
/// ```
pub fn format(record: &dyn Struct) -> String {
    display(record).to_string()
}

/// Returns a [`fmt::Display`] adapter rendering the record like [`format`].
///
/// ```
/// use rec_reflect::{derive::Reflect, display};
///
/// #[derive(Reflect)]
/// struct Flag { on: bool }
///
/// assert_eq!(format!("{}", display(&Flag { on: true })), "(Flag) {\n\ton : true\n}\n");
/// ```
#[inline]
pub fn display(record: &dyn Struct) -> RecordDisplay<'_> {
    RecordDisplay(record)
}

/// See [`display`].
#[derive(Clone, Copy)]
pub struct RecordDisplay<'a>(&'a dyn Struct);

impl fmt::Display for RecordDisplay<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::struct_display(self.0, f)
    }
}

impl fmt::Debug for RecordDisplay<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.reflect_debug(f)
    }
}

//! Name-keyed, type-checked field assignment.
//!
//! [`wrap`] borrows a record and exposes its fields by their declared names.
//! Assignments convert the value to the field type through the schema
//! (see [`NamedField::convert`]); a value that does not convert leaves the
//! record untouched and yields [`FieldError::TypeMismatch`].
//!
//! # Examples
//!
//! ```
//! use rec_reflect::{access::{self, FieldError}, derive::Reflect};
//!
//! #[derive(Reflect)]
//! struct Bar {
//!     a: i32,
//!     b: String,
//! }
//!
//! let mut bar = Bar { a: 0, b: String::new() };
//!
//! access::wrap(&mut bar).bind("a").assign(9001).unwrap();
//! access::wrap(&mut bar).set("b", "hi").unwrap();
//! assert_eq!((bar.a, bar.b.as_str()), (9001, "hi"));
//!
//! let err = access::wrap(&mut bar).bind("b").assign(50).unwrap_err();
//! assert!(matches!(err, FieldError::TypeMismatch { field: "b", .. }));
//! assert!(err.to_string().starts_with("bad assignment type"));
//! assert_eq!(bar.b, "hi");
//! ```
//!
//! [`NamedField::convert`]: crate::info::NamedField::convert

// -----------------------------------------------------------------------------
// Modules

mod error;
mod wrap;

// -----------------------------------------------------------------------------
// Exports

pub use error::FieldError;
pub use wrap::{Binder, Wrap, wrap};

pub(crate) use wrap::{convert_for, convert_ref_for};

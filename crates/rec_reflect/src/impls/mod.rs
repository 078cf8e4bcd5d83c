//! Provide some utilities for implementing reflection traits.
//!
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - `struct_xxx`: Used to implement [`Reflect`] methods for records
//!   (e.g. [`struct_partial_eq`], [`struct_display`]).
//!
//! ## Implemented Menu
//!
//! - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//! - `bool`, `char`
//! - `&'static str`, `String`
//!
//! [`Typed`]: crate::info::Typed
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod common;
mod primitives;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{NonGenericTypeCell, NonGenericTypeInfoCell};
pub use common::{struct_debug, struct_display, struct_partial_cmp, struct_partial_eq};

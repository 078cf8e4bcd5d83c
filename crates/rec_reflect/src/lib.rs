#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate through `rec_reflect`, which must also
// resolve inside the crate itself.
extern crate self as rec_reflect;

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

// `OnceLock` for the per-type schema cells.
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod format;
mod reflection;

pub mod access;
pub mod builder;
pub mod impls;
pub mod info;
pub mod lens;
pub mod ops;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use builder::Record;
pub use format::{RecordDisplay, display, format};
pub use reflection::{FromReflect, Reflect};
pub use rec_reflect_derive as derive;

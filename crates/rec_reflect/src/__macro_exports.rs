//! Items referenced by `#[derive(Reflect)]` output.
//!
//! The deriving crate may not declare `extern crate alloc`,
//! so generated code reaches these through `rec_reflect`.

pub use alloc::boxed::Box;

//! Provide interfaces and dynamic types for data operation.
//!
//! - [`Struct`]: subtrait of [`Reflect`] for records, field access by name or index.
//! - [`DynamicStruct`]: a name-keyed bag of reflected values, similar to
//!   `Map<String, Box<dyn Reflect>>`. Useful as the source of a patch
//!   ([`Wrap::patch`]) or of [`FromReflect`] for a record.
//! - [`ReflectRef`] and [`ReflectMut`]: the kind-split views of a value.
//!
//! [`Reflect`]: crate::Reflect
//! [`FromReflect`]: crate::FromReflect
//! [`Wrap::patch`]: crate::access::Wrap::patch

// -----------------------------------------------------------------------------
// Modules

mod dynamic_struct;
mod kind;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use dynamic_struct::DynamicStruct;
pub use kind::{ReflectMut, ReflectRef};
pub use struct_ops::{Struct, StructFieldIter};

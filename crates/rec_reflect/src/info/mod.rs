//! Provide compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//!     - [`type_path`](TypePath::type_path): Full name, a fixed and unique identifier for the type.
//!     - [`type_name`](TypePath::type_name): The name without module path, used when rendering records.
//!     - [`module_path`](TypePath::module_path): optional module path (e.g. "rec_reflect::info").
//!
//! - [`DynamicTypePath`]: Provide dynamic dispatch for `TypePath`.
//!
//! - [`Type`]: A `TypeId` plus the `TypePath` functions of one type.
//!
//! - [`TypeInfo`]: An enum of compile-time type information:
//!     - [`StructInfo`]: For records, the schema: the type plus ordered [`NamedField`]s.
//!     - [`OpaqueInfo`]: For leaf values whose internals are not reflected (e.g. `i32`, `String`).
//!
//! - [`NamedField`]: A field descriptor, the field name, its type and a conversion capability.
//!
//! - [`ReflectKind`]: The discriminator of [`TypeInfo`] and of reflected values.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.
//!
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod opaque_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use opaque_info::OpaqueInfo;
pub use struct_info::StructInfo;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};

//! See [`Reflect`](derive_reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Record Reflection Derivation
///
/// `#[derive(Reflect)]` on a struct with named fields (or a unit struct)
/// implements:
///
/// - `TypePath`
/// - `Typed`, with the record schema in declaration order
/// - `Reflect`
/// - `FromReflect`
/// - `Struct`
/// - `TupleLens`
/// - `Record`
///
/// and declares a `<Name>Fields` struct with one `Field<Name, T>` token per
/// field, reachable as `Name::FIELDS`.
///
/// Tuple structs, enums, unions and generic structs are rejected.
///
/// ## Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "my_crate::shapes::Point")]
/// struct Point { x: i32, y: i32 }
/// ```
///
/// The last segment becomes the declared name used by `format`.
/// Without it, the path is `module_path!()` followed by the ident.
///
/// ## Optimization with Standard Traits
///
/// The macro cannot see which standard traits a type implements. Flags
/// declare them, so the generated code uses them instead of the field-wise
/// reflection helpers:
///
/// - `clone`: `FromReflect` clones a value of the same type.
/// - `debug`: `reflect_debug` calls `Debug`.
/// - `partial_eq`: `reflect_partial_eq` calls `PartialEq` for the same type.
/// - `partial_cmp`: `reflect_partial_cmp` calls `PartialOrd` for the same type.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, Debug, PartialEq)]
/// #[reflect(clone, debug, partial_eq)]
/// struct Foo { /* ... */ }
/// ```
///
/// These attributes can only be applied at the type level.
///
/// ## Field Attributes
///
/// - `rename = "name"`: the field's name in the schema. Names must stay unique.
/// - `ignore`: the field is left out of the schema, the lens and the field
///   tokens. It is filled with `Default::default()` when the record is built
///   through `FromReflect` or a `Builder`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Account {
///     #[reflect(rename = "id")]
///     account_id: u64,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(&ast)
}

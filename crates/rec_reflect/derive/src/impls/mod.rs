// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod record;
mod struct_from_reflect;
mod struct_kind;
mod trait_lens;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;

use record::{impl_field_tokens, impl_trait_record};
use struct_from_reflect::impl_struct_from_reflect;
use struct_kind::impl_trait_struct;
use trait_lens::impl_trait_lens;
use trait_reflect::impl_trait_reflect;
use trait_type_path::impl_trait_type_path;
use trait_typed::impl_trait_typed;

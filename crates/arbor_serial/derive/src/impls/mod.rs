// -----------------------------------------------------------------------------
// Modules

mod match_serial;

mod enum_kind;
mod interface;
mod struct_kind;

mod auto_register;
mod common_impls;
mod trait_get_type_meta;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use interface::impl_interface;
pub(crate) use match_serial::match_serial_impls;

use auto_register::get_auto_register_impl;
use common_impls::get_serial_common_tokens;
use enum_kind::impl_enum;
use struct_kind::impl_struct;
use trait_get_type_meta::impl_trait_get_type_meta;

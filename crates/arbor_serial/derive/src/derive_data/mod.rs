//! Parsed form of a `#[derive(Serial)]` input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod serial_derive;
mod serial_enum;
mod serial_meta;
mod serial_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes, VariantAttributes};

pub(crate) use serial_derive::SerialDerive;
pub(crate) use serial_enum::SerialEnum;
pub(crate) use serial_meta::SerialMeta;
pub(crate) use serial_struct::SerialStruct;

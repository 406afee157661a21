#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use arbor_serial as serial;
pub use arbor_utils as utils;

#[cfg(feature = "yaml")]
pub use arbor_yaml as yaml;

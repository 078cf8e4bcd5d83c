#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use rec_reflect as reflect;
pub use rec_utils as utils;

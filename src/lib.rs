#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use sf_form as form;
pub use sf_reflect as reflect;
pub use sf_utils as utils;

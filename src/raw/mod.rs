//! Raw GL types, constants and the generated symbol catalog

#![allow(non_camel_case_types, non_upper_case_globals)]

mod catalog;
mod types;

pub use catalog::*;
pub use types::*;

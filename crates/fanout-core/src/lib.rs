//! Core value model for the fanout matrix expander.
//!
//! This crate provides the foundational types used by the other fanout
//! crates:
//! - [`Value`], the JSON-model document type (mapping / sequence / scalar)
//! - [`Mapping`], an insertion-ordered string-keyed map of values
//! - serde impls giving `Value` the native JSON text representation

pub mod value;

mod de;
mod ser;

pub use value::*;

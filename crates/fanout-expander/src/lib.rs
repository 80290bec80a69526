//! Matrix expansion of templated documents.
//!
//! This crate turns one document whose fields hold sequences of candidate
//! values into the sequence of concrete documents those candidates describe:
//! - every sequence-valued field is replaced by each of its elements in turn
//! - nested mapping values are descended into, up to a depth budget
//!
//! The result is materialized in full, in a deterministic order.

mod expand;

pub use expand::expand;

//! `combiner-core` — domain operations for the demo API.
//!
//! This crate contains **pure domain** functions (no I/O, no HTTP, no
//! framework types). Handlers in `combiner-api` call into here.

pub mod combine;

pub use combine::{combine_names, combine_numbers};

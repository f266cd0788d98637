//! Domain types, validation, and sanitization for the Librarium catalog.
//!
//! Everything in this crate is pure: no I/O, no async. The storage and API
//! crates build on these types.

pub mod error;
pub mod forms;
pub mod types;

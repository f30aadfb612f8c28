//! Test helpers module
//!
//! Shared setup for the integration tests: a test context wiring the group
//! service to an in-memory store, request fixtures, and a store wrapper
//! that fails a chosen write.

#![allow(dead_code)]

pub mod failing_store;
pub mod test_context;
pub mod test_data;

pub use failing_store::*;
pub use test_context::*;
pub use test_data::*;

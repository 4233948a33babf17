//! Shared capabilities for the storefront flows.
//!
//! This crate provides the injectable collaborators both flows depend on:
//! - IdSource trait with random and sequential implementations
//! - Latency value for simulating slow external calls

pub mod ids;
pub mod latency;

pub use ids::{IdSource, RandomIds, SequentialIds};
pub use latency::Latency;

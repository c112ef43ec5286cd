//! Shared test helpers for `fixwise-core` integration tests.
//!
//! These helpers provide reusable in-memory ports so the engine tests can
//! focus on behaviour instead of boilerplate.

pub mod calendar;
pub mod collaborators;

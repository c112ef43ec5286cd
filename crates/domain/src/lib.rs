//! # Fixwise Domain
//!
//! Business domain types and models for the Fixwise availability engine.
//!
//! This crate contains:
//! - Domain data types (TimeSlot, Appointment, SlotState, etc.)
//! - Domain error types and Result definitions
//! - Engine configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Fixwise crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

//! # Fixwise Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The slot-state derivation engine and its precedence rules
//! - Role-dependent render policy and click dispatch
//! - Day/week/month grid composition
//! - Port/adapter interfaces (traits) for every external collaborator
//!
//! ## Architecture Principles
//! - Only depends on `fixwise-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod availability;

// Re-export specific items to avoid ambiguity
pub use availability::dispatch::{Action, ClickHandler};
pub use availability::grid::{month_days, DayColumn, GridCell, GridComposer, WeekGrid};
pub use availability::policy::{CellPresentation, CellStyle, ColorToken, RenderPolicy, Theme};
pub use availability::ports::{
    AppointmentReader, BookingForms, Clock, RoleSource, SlotQueries, SnapshotSource, StaticRoles,
    SystemClock,
};
pub use availability::resolver::resolve;

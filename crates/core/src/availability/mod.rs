//! The appointment time-slot availability engine.
//!
//! For every (date, hour) cell in a day or week calendar the engine derives
//! a single authoritative [`SlotState`](fixwise_domain::SlotState) from four
//! independent inputs (bookings, fixer occupancy, availability windows,
//! cancellation history), then presents and dispatches clicks differently
//! for the fixer and requester roles.
//!
//! Derivation is pure and synchronous; the only asynchronous operation is
//! the backend round-trip that hydrates an appointment before the edit form
//! opens.

pub mod dispatch;
pub mod grid;
pub mod policy;
pub mod ports;
pub mod resolver;

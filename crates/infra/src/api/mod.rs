//! Appointments backend API adapters.

mod appointments;

pub use appointments::AppointmentsApi;

//! UI Components
//!
//! Pieces of the appointments page.

pub mod appointment_form;
pub mod appointment_list;
pub mod status_badge;

pub use appointment_form::AppointmentForm;
pub use appointment_list::AppointmentList;
pub use status_badge::StatusBadge;

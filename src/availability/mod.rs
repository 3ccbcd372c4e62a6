//! The availability and timeslot scheduling domain model.
//!
//! Owns the weekly business-hours schedule, the driving-time buffer and the
//! timeslot template catalog, and provides the normalization, conversion and
//! preview logic shared by the settings page, the template modal and
//! team-member availability editing. All functions here are pure and
//! synchronous; everything that talks to the network lives in [`crate::api`].

pub mod models;
pub mod normalize;
pub mod preview;
pub mod templates;
pub mod time;

pub use models::{
    AvailabilitySettings, BusinessHours, DayAvailability, DayHours, DayOfWeek, TimeSlot,
    TimeslotTemplate, WorkingHours,
};
pub use normalize::{
    business_hours_to_working_hours, normalize_business_hours,
    worker_availability_to_business_hours, working_hours_to_business_hours,
};
pub use preview::generate_example_slots;
pub use templates::{add_timeslot_template, validate_timeslot_template, TemplateValidation};

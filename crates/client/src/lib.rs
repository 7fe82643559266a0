//! # Hangout Client
//!
//! Caller side of the calendar API: configuration, the HTTP client and the
//! submission workflow that turns a proposal and its slots into a calendar.

pub mod api;
pub mod config;
pub mod submit;

pub use api::{CalendarApi, HttpCalendarApi};
pub use config::ClientConfig;
pub use submit::{submit_hangout, Submission};

//! # Hangout Core
//!
//! Domain types and pure logic for planning a hangout: candidate time slots,
//! the quick slot generator, editor state machines for the proposal form,
//! and the week / month calendar views.
//!
//! Nothing in this crate performs I/O. The HTTP boundary lives in
//! `hangout-client` (caller side) and `hangout-api` (server side), both of
//! which share the request / response models defined here.

/// Editor state machines for manual slots and quick generation
pub mod editor;
/// Error type shared across the workspace
pub mod errors;
/// Quick time slot generation
pub mod generator;
/// Data models for slots, calendars and generation input
pub mod models;
/// Parsers for form input
pub mod parse;
/// Hangout metadata validation
pub mod proposal;
/// Owned, editable list of a proposal's slots
pub mod slot_list;
/// Local time to UTC conversion
pub mod timezone;
/// Week and month calendar views
pub mod views;

pub use errors::{HangoutError, HangoutResult};
pub use generator::generate_time_slots;
pub use models::generation::GenerationSpec;
pub use models::time_slot::TimeSlot;

pub mod calendar;
pub mod generation;
pub mod time_slot;

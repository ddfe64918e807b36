//! Core utilities shared across stint.
//!
//! Time sources and duration formatting.

mod clock;
mod format;

pub use clock::{millis_between, Clock, ManualClock, SystemClock};
pub use format::{format_hms, format_session_duration, format_total, ms_to_minutes, parse_duration_ms};

//! stint - A focus-session timer for the terminal
//!
//! This crate times named focus sessions, keeps a persistent history of
//! completed sessions, and reports totals and a per-task breakdown.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::StintError;
pub use features::focus::FocusTracker;

//! Command implementations for stint.
//!
//! Every command returns the text to print; `main` does the printing.

mod focus;

pub use focus::{chart, clear, history, log_session, stats};

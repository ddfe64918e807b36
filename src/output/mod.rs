//! Output formatting for stint.
//!
//! This module provides formatters for displaying session data in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::StintError;
use crate::features::focus::{ChartData, Session, SessionStats, TaskTotals};

pub use json::*;
pub use pretty::*;

/// Format recent sessions based on output format
///
/// `total` is the size of the whole history, `sessions` the slice shown.
///
/// # Errors
///
/// Returns `StintError::Parse` if JSON serialization fails.
pub fn format_history(
    sessions: &[Session],
    total: usize,
    format: OutputFormat,
) -> Result<String, StintError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(sessions, total)),
        OutputFormat::Json => format_history_json(sessions, total),
    }
}

/// Format statistics based on output format
///
/// # Errors
///
/// Returns `StintError::Parse` if JSON serialization fails.
pub fn format_stats(
    stats: &SessionStats,
    totals: &TaskTotals,
    format: OutputFormat,
) -> Result<String, StintError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(stats, totals)),
        OutputFormat::Json => format_stats_json(stats, totals),
    }
}

/// Format the bar chart based on output format
///
/// # Errors
///
/// Returns `StintError::Parse` if JSON serialization fails.
pub fn format_chart(
    data: &ChartData,
    bar_width: usize,
    format: OutputFormat,
) -> Result<String, StintError> {
    match format {
        OutputFormat::Pretty => Ok(format_chart_pretty(data, bar_width)),
        OutputFormat::Json => format_chart_json(data),
    }
}

/// Format a newly recorded session based on output format
///
/// # Errors
///
/// Returns `StintError::Parse` if JSON serialization fails.
pub fn format_session(session: &Session, format: OutputFormat) -> Result<String, StintError> {
    match format {
        OutputFormat::Pretty => Ok(format_session_recorded_pretty(session)),
        OutputFormat::Json => to_json(session),
    }
}

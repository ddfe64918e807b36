//! Session history commands.
//!
//! These work on the recorded history only; live timing happens in the
//! terminal UI.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::StintError;
use crate::features::focus::{Confirmation, FocusTracker};
use crate::output::{format_chart, format_history, format_session, format_stats, to_json};

/// Record a session timed elsewhere.
///
/// # Errors
///
/// Returns `StintError::EmptyTask` for a blank task name, or a
/// serialization error for JSON output.
pub fn log_session(
    tracker: &mut FocusTracker,
    task: &str,
    duration_ms: u64,
    format: OutputFormat,
) -> Result<String, StintError> {
    let session = tracker.log(task, duration_ms)?;
    format_session(&session, format)
}

/// Show the most recent sessions.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn history(
    tracker: &FocusTracker,
    limit: Option<usize>,
    config: &Config,
    format: OutputFormat,
) -> Result<String, StintError> {
    let store = tracker.store();
    let limit = limit.unwrap_or(config.display.recent_limit);
    format_history(store.recent(limit), store.count(), format)
}

/// Show total focus time and session count.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn stats(tracker: &FocusTracker, format: OutputFormat) -> Result<String, StintError> {
    let store = tracker.store();
    format_stats(&store.stats(), &store.aggregate_by_task(), format)
}

/// Show the per-task bar chart.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn chart(
    tracker: &FocusTracker,
    width: Option<usize>,
    config: &Config,
    format: OutputFormat,
) -> Result<String, StintError> {
    let data = tracker
        .store()
        .chart_data(config.chart.placeholder_when_empty);
    let width = width.unwrap_or(config.chart.bar_width).max(1);
    format_chart(&data, width, format)
}

/// Delete all recorded sessions, asking first unless `force` is set.
///
/// # Errors
///
/// Returns an error if the prompt cannot be read or JSON serialization fails.
pub fn clear(
    tracker: &mut FocusTracker,
    force: bool,
    format: OutputFormat,
) -> Result<String, StintError> {
    let count = tracker.store().count();
    let confirmation = if force {
        Confirmation::Accepted
    } else {
        ask_clear(count)?
    };

    let cleared = tracker.clear(confirmation);

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "cleared": cleared,
            "removed": if cleared { count } else { 0 },
        })),
        OutputFormat::Pretty => Ok(if cleared {
            format!("{} Cleared {} session(s)", "✓".green(), count)
        } else {
            "Nothing cleared".dimmed().to_string()
        }),
    }
}

fn ask_clear(count: usize) -> Result<Confirmation, StintError> {
    print!(
        "{} Delete all {} recorded session(s)? [y/N] ",
        "?".yellow().bold(),
        count
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(Confirmation::from_answer(&answer))
}

//! JSON output formatting for stint.
//!
//! This module provides functions for formatting session data as JSON.

use serde::Serialize;
use serde_json::json;

use crate::error::StintError;
use crate::features::focus::{ChartData, Session, SessionStats, TaskTotals};

/// Format the session history as JSON
///
/// # Errors
///
/// Returns `StintError::Parse` if JSON serialization fails.
pub fn format_history_json(sessions: &[Session], total: usize) -> Result<String, StintError> {
    let output = json!({
        "count": sessions.len(),
        "total": total,
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format totals and the per-task breakdown as JSON
///
/// # Errors
///
/// Returns `StintError::Parse` if JSON serialization fails.
pub fn format_stats_json(stats: &SessionStats, totals: &TaskTotals) -> Result<String, StintError> {
    let output = json!({
        "count": stats.count,
        "totalMs": stats.total_ms,
        "tasks": totals
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format chart bars as JSON
///
/// # Errors
///
/// Returns `StintError::Parse` if JSON serialization fails.
pub fn format_chart_json(data: &ChartData) -> Result<String, StintError> {
    to_json(data)
}

/// Format any serializable value as JSON
///
/// # Errors
///
/// Returns `StintError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, StintError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn session(id: i64, task: &str, ms: u64) -> Session {
        Session::new(id, task, ms, Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap()).unwrap()
    }

    #[test]
    fn test_history_json_shape() {
        let sessions = vec![session(2, "Read", 30_000), session(1, "Write", 60_000)];
        let output = format_history_json(&sessions[..1], sessions.len()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["total"], 2);
        assert_eq!(value["items"][0]["task"], "Read");
        assert_eq!(value["items"][0]["duration"], 30_000);
        assert_eq!(value["items"][0]["id"], 2);
        assert!(value["items"][0]["date"].is_string());
    }

    #[test]
    fn test_stats_json_shape() {
        let stats = SessionStats {
            count: 3,
            total_ms: 90_000,
        };
        let output = format_stats_json(&stats, &TaskTotals::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["count"], 3);
        assert_eq!(value["totalMs"], 90_000);
        assert!(value["tasks"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_chart_json_marks_placeholder() {
        let output = format_chart_json(&ChartData::placeholder()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["placeholder"], true);
        assert_eq!(value["bars"][0]["label"], "Email");
    }
}

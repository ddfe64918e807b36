//! Completed focus sessions.
//!
//! A session is created once, when a running timer is stopped, and never
//! changes afterwards.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::core::format_session_duration;

/// One completed, named interval of focused work.
///
/// Serializes to the flat `{ id, task, duration, date }` record used by the
/// persisted session list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: i64,
    task: String,
    duration: u64,
    date: DateTime<Utc>,
}

impl Session {
    /// Create a session.
    ///
    /// Returns `None` when `duration_ms` is zero; zero-length sessions are
    /// never recorded.
    #[must_use]
    pub fn new(
        id: i64,
        task: impl Into<String>,
        duration_ms: u64,
        date: DateTime<Utc>,
    ) -> Option<Self> {
        (duration_ms > 0).then(|| Self {
            id,
            task: task.into(),
            duration: duration_ms,
            date,
        })
    }

    /// Unique, increasing identifier (creation time in epoch milliseconds).
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Task label exactly as entered.
    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Task label with surrounding whitespace removed, used for grouping.
    #[must_use]
    pub fn task_key(&self) -> &str {
        self.task.trim()
    }

    /// Elapsed focus time in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> u64 {
        self.duration
    }

    /// When the session was recorded.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Creation time in the local timezone.
    #[must_use]
    pub fn date_local(&self) -> DateTime<Local> {
        self.date.with_timezone(&Local)
    }

    /// Duration rendered for the recent-sessions list.
    #[must_use]
    pub fn format_duration(&self) -> String {
        format_session_duration(self.duration)
    }
}

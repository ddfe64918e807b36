//! The session history and its aggregates.
//!
//! [`SessionStore`] keeps every completed session in memory, newest first,
//! and writes the whole list through its [`Repository`] after each change.
//! Storage is best-effort: a read failure behaves like an empty history and
//! a write failure is logged, never raised.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::chart::ChartData;
use super::session::Session;
use super::storage::Repository;
use crate::core::{format_total, ms_to_minutes};

/// Ordered, persisted list of completed sessions.
pub struct SessionStore {
    repository: Box<dyn Repository>,
    sessions: Vec<Session>,
}

impl SessionStore {
    /// Create an empty store backed by `repository`.
    ///
    /// Call [`SessionStore::load`] to read existing history.
    #[must_use]
    pub fn new(repository: Box<dyn Repository>) -> Self {
        Self {
            repository,
            sessions: Vec::new(),
        }
    }

    /// Replace the in-memory list with what the repository holds.
    ///
    /// Missing or unreadable data yields an empty list.
    pub fn load(&mut self) {
        self.sessions = match self.repository.load() {
            Ok(Some(sessions)) => sessions,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable session history");
                Vec::new()
            }
        };
        tracing::debug!(count = self.sessions.len(), "loaded session history");
    }

    /// Insert a session at the head and persist the full list.
    pub fn append(&mut self, session: Session) {
        tracing::info!(
            id = session.id(),
            task = session.task(),
            duration_ms = session.duration_ms(),
            "session recorded"
        );
        self.sessions.insert(0, session);

        if let Err(e) = self.repository.save(&self.sessions) {
            tracing::warn!(error = %e, "failed to persist session history");
        }
    }

    /// Drop every session, in memory and in storage.
    pub fn clear(&mut self) {
        self.sessions.clear();

        if let Err(e) = self.repository.clear() {
            tracing::warn!(error = %e, "failed to remove stored session history");
        }
        tracing::info!("session history cleared");
    }

    /// All sessions, newest first.
    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// The `limit` most recent sessions.
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[Session] {
        &self.sessions[..limit.min(self.sessions.len())]
    }

    /// Id of the newest session.
    #[must_use]
    pub fn latest_id(&self) -> Option<i64> {
        self.sessions.first().map(Session::id)
    }

    /// Sum of all session durations in milliseconds.
    #[must_use]
    pub fn total_duration(&self) -> u64 {
        self.sessions
            .iter()
            .map(Session::duration_ms)
            .fold(0, u64::saturating_add)
    }

    /// Number of sessions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sessions.len()
    }

    /// Count and total time together.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            count: self.count(),
            total_ms: self.total_duration(),
        }
    }

    /// Per-task totals.
    ///
    /// Labels are grouped after trimming surrounding whitespace, with exact,
    /// case-sensitive matching. Groups appear in the order they are first
    /// met walking the list from newest to oldest. Empty history gives empty
    /// totals.
    #[must_use]
    pub fn aggregate_by_task(&self) -> TaskTotals {
        let mut totals: Vec<TaskTotal> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for session in &self.sessions {
            let key = session.task_key();
            match index.get(key) {
                Some(&i) => {
                    totals[i].duration_ms =
                        totals[i].duration_ms.saturating_add(session.duration_ms());
                }
                None => {
                    index.insert(key, totals.len());
                    totals.push(TaskTotal {
                        task: key.to_string(),
                        duration_ms: session.duration_ms(),
                    });
                }
            }
        }

        TaskTotals { totals }
    }

    /// Chart bars for the per-task totals.
    ///
    /// With `placeholder_when_empty`, an empty history yields demo bars so the
    /// chart never renders blank. Those bars are display-only.
    #[must_use]
    pub fn chart_data(&self, placeholder_when_empty: bool) -> ChartData {
        let data = ChartData::from_totals(&self.aggregate_by_task());
        if placeholder_when_empty {
            data.with_placeholder_fallback()
        } else {
            data
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions", &self.sessions.len())
            .finish_non_exhaustive()
    }
}

/// Summary statistics over the whole history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    /// Number of sessions
    pub count: usize,
    /// Total focused time in milliseconds
    pub total_ms: u64,
}

impl SessionStats {
    /// Total rendered as `Hh Mm`.
    #[must_use]
    pub fn format_total(&self) -> String {
        format_total(self.total_ms)
    }
}

/// Focus time for one task label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTotal {
    /// Trimmed task label
    pub task: String,
    /// Summed duration in milliseconds
    pub duration_ms: u64,
}

impl TaskTotal {
    /// Summed duration in minutes.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        ms_to_minutes(self.duration_ms)
    }
}

/// Ordered task → time mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTotals {
    totals: Vec<TaskTotal>,
}

impl TaskTotals {
    /// Minutes recorded for `task`, if present.
    #[must_use]
    pub fn minutes(&self, task: &str) -> Option<f64> {
        self.totals
            .iter()
            .find(|t| t.task == task)
            .map(TaskTotal::minutes)
    }

    /// Iterate in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &TaskTotal> {
        self.totals.iter()
    }

    /// Task labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.totals.iter().map(|t| t.task.as_str())
    }

    /// Number of distinct tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Whether there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

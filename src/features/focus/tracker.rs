//! The focus tracker: one timer plus its session history.
//!
//! Everything the timer and history need is owned here and handed in at
//! construction, so a tracker can be built against an in-memory repository
//! and a manual clock just as easily as against the real database.

use super::session::Session;
use super::storage::Repository;
use super::store::SessionStore;
use super::timer::{TimerEngine, TimerState};
use crate::config::Config;
use crate::core::Clock;
use crate::error::StintError;

/// Answer to the "clear all data?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Go ahead and clear.
    Accepted,
    /// Leave everything as it is.
    Declined,
}

impl Confirmation {
    /// Interpret a typed answer; only `y`/`yes` (any case) accepts.
    #[must_use]
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Self::Accepted,
            _ => Self::Declined,
        }
    }
}

/// Owned timer and session history.
#[derive(Debug)]
pub struct FocusTracker {
    engine: TimerEngine,
    store: SessionStore,
}

impl FocusTracker {
    /// Build a tracker and load existing history.
    #[must_use]
    pub fn init(repository: Box<dyn Repository>, clock: Box<dyn Clock>, config: &Config) -> Self {
        let mut store = SessionStore::new(repository);
        store.load();

        let engine = TimerEngine::new(clock, config.timer.tick_interval_ms)
            .with_id_floor(store.latest_id());

        Self { engine, store }
    }

    /// Start or resume the timer.
    ///
    /// # Errors
    ///
    /// Returns `StintError::EmptyTask` if `task` is blank.
    pub fn start(&mut self, task: &str) -> Result<(), StintError> {
        self.engine.start(task)
    }

    /// Pause the timer.
    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Pause if running, otherwise start.
    ///
    /// # Errors
    ///
    /// Returns `StintError::EmptyTask` if starting with a blank label.
    pub fn toggle(&mut self, task: &str) -> Result<(), StintError> {
        self.engine.toggle(task)
    }

    /// Stop the timer and record the session, if any time was tracked.
    pub fn stop(&mut self) -> Option<Session> {
        let session = self.engine.stop()?;
        self.store.append(session.clone());
        Some(session)
    }

    /// Stop and record the session under `label`, the task as currently
    /// entered. A blank label keeps the one the session started with.
    pub fn stop_as(&mut self, label: &str) -> Option<Session> {
        let session = self.engine.stop_as(label)?;
        self.store.append(session.clone());
        Some(session)
    }

    /// Refresh the elapsed-time display if due.
    pub fn tick(&mut self) -> bool {
        self.engine.tick()
    }

    /// Record a session that was tracked elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `StintError::EmptyTask` for a blank label and
    /// `StintError::Parse` for a zero duration.
    pub fn log(&mut self, task: &str, duration_ms: u64) -> Result<Session, StintError> {
        let session = self.engine.manual_session(task, duration_ms)?;
        self.store.append(session.clone());
        Ok(session)
    }

    /// Clear all history and reset the timer, if confirmed.
    ///
    /// Returns whether anything was cleared.
    pub fn clear(&mut self, confirmation: Confirmation) -> bool {
        if confirmation == Confirmation::Declined {
            tracing::debug!("clear declined");
            return false;
        }
        self.store.clear();
        self.engine.reset();
        true
    }

    /// Return the timer to Idle without touching history.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// The timer.
    #[must_use]
    pub const fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    /// The session history.
    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Current timer state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.engine.state()
    }
}

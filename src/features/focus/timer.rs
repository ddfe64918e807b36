//! The focus timer state machine.
//!
//! Tracks Idle/Running/Paused and the time accumulated since the last reset.
//! While running, elapsed time is `now - reference`, where the reference is
//! moved back by whatever was already accumulated, so pausing and resuming
//! continues the count instead of restarting it.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};

use super::session::Session;
use super::ticker::Ticker;
use crate::core::{format_hms, millis_between, Clock};
use crate::error::StintError;

/// Timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No session in progress
    Idle,
    /// Counting time
    Running,
    /// Session in progress, clock frozen
    Paused,
}

impl TimerState {
    /// Status line shown next to the timer.
    #[must_use]
    pub const fn status_text(&self) -> &'static str {
        match self {
            Self::Idle => "READY TO FOCUS",
            Self::Running => "FOCUSING...",
            Self::Paused => "PAUSED",
        }
    }
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
        }
    }
}

/// Elapsed-time engine for the current focus session.
pub struct TimerEngine {
    clock: Box<dyn Clock>,
    state: TimerState,
    task: String,
    /// Accumulated time; authoritative while Paused or Idle, last tick value
    /// while Running.
    elapsed_ms: u64,
    /// `now - elapsed_ms` at the moment of the last start/resume.
    reference: Option<DateTime<Utc>>,
    ticker: Ticker,
    last_id: Option<i64>,
}

impl TimerEngine {
    /// Create an idle engine.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, tick_interval_ms: u64) -> Self {
        Self {
            clock,
            state: TimerState::Idle,
            task: String::new(),
            elapsed_ms: 0,
            reference: None,
            ticker: Ticker::new(tick_interval_ms),
            last_id: None,
        }
    }

    /// Ensure issued session ids stay above `floor` (the newest stored id).
    #[must_use]
    pub fn with_id_floor(mut self, floor: Option<i64>) -> Self {
        self.last_id = floor;
        self
    }

    /// Start a session, or resume a paused one.
    ///
    /// The label is required in both cases and replaces the current one.
    /// Starting while already running does nothing.
    ///
    /// # Errors
    ///
    /// Returns `StintError::EmptyTask` if `task` is blank; the state is left
    /// unchanged.
    pub fn start(&mut self, task: &str) -> Result<(), StintError> {
        if self.state == TimerState::Running {
            return Ok(());
        }
        if task.trim().is_empty() {
            return Err(StintError::EmptyTask);
        }

        let now = self.clock.now();
        self.reference = Some(now - duration_from_ms(self.elapsed_ms));
        self.task = task.to_string();
        self.ticker.arm(now);

        tracing::debug!(task = %self.task, resumed_at_ms = self.elapsed_ms, from = %self.state, "timer running");
        self.state = TimerState::Running;
        Ok(())
    }

    /// Resume a paused session with its current label.
    ///
    /// # Errors
    ///
    /// Returns `StintError::EmptyTask` if there is no label to resume with.
    pub fn resume(&mut self) -> Result<(), StintError> {
        let task = self.task.clone();
        self.start(&task)
    }

    /// Freeze the elapsed time. Does nothing unless running.
    pub fn pause(&mut self) {
        if self.state != TimerState::Running {
            return;
        }

        self.elapsed_ms = self.live_elapsed();
        self.reference = None;
        self.ticker.cancel();
        self.state = TimerState::Paused;

        tracing::debug!(elapsed_ms = self.elapsed_ms, "timer paused");
    }

    /// Pause when running, otherwise start with `task`.
    ///
    /// # Errors
    ///
    /// Returns `StintError::EmptyTask` if starting with a blank label.
    pub fn toggle(&mut self, task: &str) -> Result<(), StintError> {
        if self.state == TimerState::Running {
            self.pause();
            Ok(())
        } else {
            self.start(task)
        }
    }

    /// Finish the current session.
    ///
    /// Returns `None`, changing nothing, when no time has accumulated.
    /// Otherwise pauses if needed, emits the finished session and returns to
    /// Idle with the label cleared.
    pub fn stop(&mut self) -> Option<Session> {
        self.finish(None)
    }

    /// Finish the current session under `label`.
    ///
    /// The label may have been edited while paused; a blank one keeps the
    /// label the session was started with. Otherwise behaves like
    /// [`TimerEngine::stop`].
    pub fn stop_as(&mut self, label: &str) -> Option<Session> {
        self.finish(Some(label))
    }

    fn finish(&mut self, label: Option<&str>) -> Option<Session> {
        if self.state == TimerState::Running {
            self.elapsed_ms = self.live_elapsed();
        }
        if self.elapsed_ms == 0 {
            return None;
        }

        self.pause();
        if let Some(label) = label.filter(|l| !l.trim().is_empty()) {
            self.task = label.to_string();
        }

        let now = self.clock.now();
        let id = self.next_id(now);
        let session = Session::new(id, self.task.clone(), self.elapsed_ms, now)?;

        tracing::debug!(id, duration_ms = session.duration_ms(), "timer stopped");
        self.reset();
        Some(session)
    }

    /// Build a finished session for time tracked outside the timer.
    ///
    /// Uses the same id sequence as [`TimerEngine::stop`] and does not touch
    /// the running state.
    ///
    /// # Errors
    ///
    /// Returns `StintError::EmptyTask` for a blank label and
    /// `StintError::Parse` for a zero duration.
    pub fn manual_session(&mut self, task: &str, duration_ms: u64) -> Result<Session, StintError> {
        if task.trim().is_empty() {
            return Err(StintError::EmptyTask);
        }
        let now = self.clock.now();
        let id = self.next_id(now);
        Session::new(id, task, duration_ms, now)
            .ok_or_else(|| StintError::Parse("Duration must be greater than zero".to_string()))
    }

    /// Refresh the elapsed-time display if a tick is due.
    ///
    /// Returns whether the value was recomputed.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        if !self.ticker.poll(self.clock.now()) {
            return false;
        }
        self.elapsed_ms = self.live_elapsed();
        true
    }

    /// Return to Idle with nothing accumulated.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.elapsed_ms = 0;
        self.reference = None;
        self.task.clear();
        self.ticker.cancel();
    }

    /// Current elapsed time, recomputed live while running.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        if self.state == TimerState::Running {
            self.live_elapsed()
        } else {
            self.elapsed_ms
        }
    }

    /// Elapsed time as `HH:MM:SS`.
    #[must_use]
    pub fn format_elapsed(&self) -> String {
        format_hms(self.elapsed_ms())
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Check if the timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Label of the session in progress (empty when idle).
    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Whether the display refresh is scheduled.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Time until the next display refresh, `None` when not running.
    #[must_use]
    pub fn next_tick_in(&self) -> Option<StdDuration> {
        self.ticker.remaining(self.clock.now())
    }

    fn live_elapsed(&self) -> u64 {
        self.reference
            .map_or(self.elapsed_ms, |reference| {
                millis_between(reference, self.clock.now())
            })
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> i64 {
        let candidate = now.timestamp_millis();
        let id = match self.last_id {
            Some(last) if candidate <= last => last + 1,
            _ => candidate,
        };
        self.last_id = Some(id);
        id
    }
}

impl std::fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("state", &self.state)
            .field("task", &self.task)
            .field("elapsed_ms", &self.elapsed_ms)
            .field("ticking", &self.ticker.is_armed())
            .finish_non_exhaustive()
    }
}

fn duration_from_ms(ms: u64) -> Duration {
    Duration::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX))
}

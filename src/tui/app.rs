//! Application state for the TUI.

use std::time::Duration;

use crate::config::Config;
use crate::error::StintError;
use crate::features::focus::{ChartView, Confirmation, FocusTracker, Session, TimerState};

/// Poll interval while no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Timer, task input and recent sessions.
    Tracker,
    /// Time-per-task bar chart.
    Analytics,
}

/// Application state.
pub struct App {
    /// The timer and its history.
    pub tracker: FocusTracker,
    /// Task name being typed.
    pub input: String,
    /// Current view.
    pub view: View,
    /// The analytics chart.
    pub chart: ChartView,
    /// Status message to display.
    pub status: Option<String>,
    /// Waiting for a y/n answer to the clear prompt.
    pub pending_clear: bool,
    /// Number of recent sessions listed.
    pub recent_limit: usize,
    /// Show sample bars when there is no history.
    pub placeholder_when_empty: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(tracker: FocusTracker, config: &Config) -> Self {
        Self {
            tracker,
            input: String::new(),
            view: View::Tracker,
            chart: ChartView::new(),
            status: Some("Type a task, Enter to start".to_string()),
            pending_clear: false,
            recent_limit: config.display.recent_limit,
            placeholder_when_empty: config.chart.placeholder_when_empty,
        }
    }

    /// Pre-fill the task and start timing straight away.
    ///
    /// # Errors
    ///
    /// Returns `StintError::EmptyTask` if `task` is blank.
    pub fn start_with(&mut self, task: &str) -> Result<(), StintError> {
        self.input = task.to_string();
        self.tracker.start(task)?;
        self.status = None;
        Ok(())
    }

    /// Whether the task field accepts typing.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.tracker.state() != TimerState::Running
    }

    /// Append a character to the task name.
    pub fn push_char(&mut self, c: char) {
        if self.input_enabled() {
            self.input.push(c);
        }
    }

    /// Remove the last character of the task name.
    pub fn backspace(&mut self) {
        if self.input_enabled() {
            self.input.pop();
        }
    }

    /// Start, pause or resume.
    pub fn toggle(&mut self) {
        match self.tracker.toggle(&self.input) {
            Ok(()) => self.status = None,
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Stop and record the session.
    pub fn stop(&mut self) -> Option<Session> {
        let session = self.tracker.stop_as(&self.input)?;
        self.input.clear();
        self.status = Some(format!(
            "Saved {} on {}",
            session.format_duration(),
            session.task()
        ));
        self.refresh_chart();
        Some(session)
    }

    /// Flip between the tracker and analytics views.
    pub fn switch_view(&mut self) {
        self.view = match self.view {
            View::Tracker => View::Analytics,
            View::Analytics => View::Tracker,
        };
        match self.view {
            View::Analytics => self.rebuild_chart(),
            View::Tracker => self.chart.destroy(),
        }
    }

    /// Ask whether to clear all history.
    pub fn request_clear(&mut self) {
        self.pending_clear = true;
        self.status = Some("Clear all data? (y/n)".to_string());
    }

    /// Answer the clear prompt.
    pub fn answer_clear(&mut self, confirmation: Confirmation) {
        self.pending_clear = false;
        if self.tracker.clear(confirmation) {
            self.input.clear();
            self.status = Some("All sessions cleared".to_string());
            self.refresh_chart();
        } else {
            self.status = None;
        }
    }

    /// Advance the elapsed-time display if due.
    pub fn tick(&mut self) -> bool {
        self.tracker.tick()
    }

    /// How long to wait for input before the next tick.
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        self.tracker.engine().next_tick_in().unwrap_or(IDLE_POLL)
    }

    fn rebuild_chart(&mut self) {
        let data = self
            .tracker
            .store()
            .chart_data(self.placeholder_when_empty);
        self.chart.rebuild(data);
    }

    fn refresh_chart(&mut self) {
        if self.view == View::Analytics {
            self.rebuild_chart();
        }
    }
}

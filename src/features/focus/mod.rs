//! Focus sessions and time tracking.
//!
//! - Start/pause/resume/stop a named focus session
//! - Session history with best-effort persistence
//! - Totals and a per-task bar chart

pub mod chart;
pub mod session;
pub mod storage;
pub mod store;
pub mod ticker;
pub mod timer;
pub mod tracker;

pub use chart::{render_bar_chart, ChartBar, ChartData, ChartView};
pub use session::Session;
pub use storage::{MemoryRepository, Repository, SqliteRepository, DEFAULT_SESSIONS_KEY};
pub use store::{SessionStats, SessionStore, TaskTotal, TaskTotals};
pub use ticker::Ticker;
pub use timer::{TimerEngine, TimerState};
pub use tracker::{Confirmation, FocusTracker};

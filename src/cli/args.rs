use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::parse_duration_ms;

#[derive(Parser)]
#[command(name = "stint")]
#[command(about = "A focus-session timer for the terminal")]
#[command(long_about = "stint - A focus-session timer for the terminal

Time named stretches of focused work, keep a history of completed
sessions, and see where your time went.

QUICK START:
  stint start \"Write report\"   Open the timer with a task ready to go
  stint log Email 15m          Record a session you timed elsewhere
  stint history                Show recent sessions
  stint stats                  Total focus time and session count
  stint chart                  Time per task as a bar chart

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  stint <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// Falls back to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding the config file and session database
    #[arg(long, global = true, env = "STINT_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Log debug output to stderr (or the log file while the timer is open)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the timer and start focusing
    ///
    /// With a task name the timer starts immediately; without one it opens
    /// idle with an empty task field.
    ///
    /// Keys: Enter start/pause, Ctrl+S stop and save, Tab analytics,
    /// Ctrl+X clear history, Esc quit.
    ///
    /// # Examples
    ///
    ///   stint start "Write report"
    ///   stint start
    #[command(visible_alias = "s")]
    Start {
        /// What you are working on
        task: Option<String>,
    },

    /// Open the timer without starting it
    Tui,

    /// Record a session that was timed elsewhere
    ///
    /// DURATION accepts a bare number of minutes or units: "25", "25m",
    /// "1h30m", "90s".
    ///
    /// # Examples
    ///
    ///   stint log Email 15
    ///   stint log "Code review" 1h10m
    Log {
        /// Task name
        task: String,

        /// Length of the session
        #[arg(value_parser = parse_duration_arg)]
        duration: u64,
    },

    /// Show recent sessions, newest first
    #[command(visible_alias = "h")]
    History {
        /// Number of sessions to show (default: from config, 5)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show total focus time and session count
    Stats,

    /// Show time per task as a bar chart
    ///
    /// With no recorded sessions a labelled sample chart is shown instead.
    Chart {
        /// Width of the longest bar in characters (default: from config, 30)
        #[arg(long, short = 'w')]
        width: Option<usize>,
    },

    /// Delete all recorded sessions
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Parse a duration argument into milliseconds.
///
/// # Errors
///
/// Returns a message suitable for clap if the duration is malformed or zero.
pub fn parse_duration_arg(s: &str) -> Result<u64, String> {
    parse_duration_ms(s).ok_or_else(|| {
        format!("invalid duration '{s}' (expected e.g. 25, 25m, 1h30m, 90s)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // ==================== Subcommand Tests ====================

    #[test]
    fn test_cli_start_with_task() {
        let cli = Cli::try_parse_from(["stint", "start", "Write report"]).unwrap();
        if let Commands::Start { task } = cli.command {
            assert_eq!(task, Some("Write report".to_string()));
        } else {
            panic!("Expected Start command");
        }
    }

    #[test]
    fn test_cli_start_alias_without_task() {
        let cli = Cli::try_parse_from(["stint", "s"]).unwrap();
        assert!(matches!(cli.command, Commands::Start { task: None }));
    }

    #[test]
    fn test_cli_tui() {
        let cli = Cli::try_parse_from(["stint", "tui"]).unwrap();
        assert!(matches!(cli.command, Commands::Tui));
    }

    #[test]
    fn test_cli_log() {
        let cli = Cli::try_parse_from(["stint", "log", "Email", "1h30m"]).unwrap();
        if let Commands::Log { task, duration } = cli.command {
            assert_eq!(task, "Email");
            assert_eq!(duration, 5_400_000);
        } else {
            panic!("Expected Log command");
        }
    }

    #[test]
    fn test_cli_log_bare_minutes() {
        let cli = Cli::try_parse_from(["stint", "log", "Email", "15"]).unwrap();
        assert!(matches!(cli.command, Commands::Log { duration: 900_000, .. }));
    }

    #[test]
    fn test_cli_log_rejects_bad_duration() {
        assert!(Cli::try_parse_from(["stint", "log", "Email", "soon"]).is_err());
        assert!(Cli::try_parse_from(["stint", "log", "Email", "0"]).is_err());
    }

    #[test]
    fn test_cli_history_limit() {
        let cli = Cli::try_parse_from(["stint", "history", "-n", "10"]).unwrap();
        assert!(matches!(cli.command, Commands::History { limit: Some(10) }));

        let cli = Cli::try_parse_from(["stint", "h"]).unwrap();
        assert!(matches!(cli.command, Commands::History { limit: None }));
    }

    #[test]
    fn test_cli_chart_width() {
        let cli = Cli::try_parse_from(["stint", "chart", "--width", "12"]).unwrap();
        assert!(matches!(cli.command, Commands::Chart { width: Some(12) }));
    }

    #[test]
    fn test_cli_clear_force() {
        let cli = Cli::try_parse_from(["stint", "clear", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Clear { force: true }));

        let cli = Cli::try_parse_from(["stint", "clear"]).unwrap();
        assert!(matches!(cli.command, Commands::Clear { force: false }));
    }

    // ==================== Global Option Tests ====================

    #[test]
    fn test_output_format_json() {
        let cli = Cli::try_parse_from(["stint", "stats", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_output_format_unset() {
        let cli = Cli::try_parse_from(["stint", "stats"]).unwrap();
        assert_eq!(cli.output, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_data_dir_flag() {
        let cli = Cli::try_parse_from(["stint", "--data-dir", "/tmp/stint-test", "stats"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/stint-test")));
    }

    #[test]
    fn test_unknown_command_fails() {
        assert!(Cli::try_parse_from(["stint", "today"]).is_err());
    }
}

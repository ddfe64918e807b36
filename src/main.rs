use clap::Parser;
use colored::Colorize;

use stint::cli::args::{Cli, Commands};
use stint::cli::commands;
use stint::config::{ColorSetting, Config, Paths};
use stint::core::SystemClock;
use stint::error::StintError;
use stint::features::focus::{FocusTracker, MemoryRepository, Repository, SqliteRepository};
use stint::logging::{self, LogTarget};
use stint::storage::Database;
use stint::tui::{self, App};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), StintError> {
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.data_dir)?;
    let dirs = paths.ensure_dirs();

    let interactive = matches!(cli.command, Commands::Start { .. } | Commands::Tui);
    let target = if interactive {
        LogTarget::File(&paths.log_file)
    } else {
        LogTarget::Stderr
    };
    if let Err(e) = logging::init(target, cli.verbose) {
        eprintln!("{}: logging disabled: {e:#}", "warning".yellow().bold());
    }
    if let Err(e) = dirs {
        tracing::warn!(error = %e, "could not create data directory");
    }

    let config = Config::load(&paths)?;
    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }
    let format = cli.output.unwrap_or(config.general.default_output);

    let repository: Box<dyn Repository> = match Database::open(&paths) {
        Ok(db) => Box::new(SqliteRepository::new(db, config.storage.key.clone())),
        Err(e) => {
            tracing::warn!(error = %e, "session database unavailable, history will not be saved");
            Box::new(MemoryRepository::new())
        }
    };
    let mut tracker = FocusTracker::init(repository, Box::new(SystemClock), &config);

    let output = match cli.command {
        Commands::Start { task } => {
            let mut app = App::new(tracker, &config);
            if let Some(task) = task {
                app.start_with(&task)?;
            }
            tui::run(&mut app)?;
            String::new()
        }
        Commands::Tui => {
            let mut app = App::new(tracker, &config);
            tui::run(&mut app)?;
            String::new()
        }
        Commands::Log { task, duration } => {
            commands::log_session(&mut tracker, &task, duration, format)?
        }
        Commands::History { limit } => commands::history(&tracker, limit, &config, format)?,
        Commands::Stats => commands::stats(&tracker, format)?,
        Commands::Chart { width } => commands::chart(&tracker, width, &config, format)?,
        Commands::Clear { force } => commands::clear(&mut tracker, force, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

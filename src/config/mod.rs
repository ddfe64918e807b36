//! Configuration management for stint.
//!
//! This module handles loading configuration from `~/.stint/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{
    ChartConfig, ColorSetting, Config, DisplayConfig, GeneralConfig, StorageConfig, TimerConfig,
};

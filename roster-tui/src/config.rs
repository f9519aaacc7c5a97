//! Command line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use roster_lib::source::DEFAULT_ENDPOINT;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "roster",
    version,
    about = "Browse, filter, and select characters from a roster service"
)]
pub struct Args {
    /// Roster endpoint; must answer GET with a JSON array.
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds. No timeout when omitted.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Write the log here instead of the cache directory.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub log_level: LogLevel,
    /// `None` means `latest.log` in the cache directory, with rotation.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            log_level: LogLevel::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// Parse the process arguments; exits with usage on error.
    pub fn from_args() -> Self {
        Args::parse().into()
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            endpoint: args.endpoint,
            timeout: args.timeout.map(Duration::from_secs),
            log_level: args.log_level,
            log_file: args.log_file,
        }
    }
}

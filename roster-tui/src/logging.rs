//! File logging. The terminal owns stdout, so everything goes to a file.

use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Config;
use crate::error::AppError;
use crate::paths;

/// Install the global logger and return the file it writes to.
///
/// Without `--log-file`, logs go to `latest.log` in the cache directory and
/// the previous run's log is archived first.
pub fn init(config: &Config) -> Result<PathBuf, AppError> {
    let path = match &config.log_file {
        Some(path) => path.clone(),
        None => {
            let path = paths::log_file().ok_or(AppError::NoLogLocation)?;
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
                paths::rotate_logs(dir);
            }
            path
        }
    };

    let file = File::create(&path)?;
    let log_config = ConfigBuilder::new()
        .add_filter_allow_str("roster")
        .build();
    WriteLogger::init(config.log_level.filter(), log_config, file)?;

    Ok(path)
}

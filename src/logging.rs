//! log4rs set-up for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Environment variable naming a log4rs yaml file to load instead of the
/// built-in stderr logger.
pub const ENV_LOG_CONFIG: &str = "CIDR_CALC_LOG_CONFIG";

/// log4rs file picked up from the working directory when present.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// The log4rs file to load: the `CIDR_CALC_LOG_CONFIG` value if set, else
/// `default_file` if it exists, else none and the stderr logger is used.
fn log_config_path(env_value: Option<String>, default_file: &Path) -> Option<PathBuf> {
    match env_value {
        Some(path) => Some(PathBuf::from(path)),
        None if default_file.exists() => Some(default_file.to_path_buf()),
        None => None,
    }
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Initialise logging once per process. Diagnostics go to stderr so stdout
/// only carries results.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let env_value = std::env::var(ENV_LOG_CONFIG).ok();
    if let Some(path) = log_config_path(env_value, Path::new(LOG_CONFIG_FILE)) {
        log4rs::init_file(&path, Default::default()).map_err(|e| {
            format!("Error initializing log4rs from {}: {e}", path.display())
        })?;
        log::debug!("log4rs initialised from {}", path.display());
        return Ok(());
    }
    log4rs::init_config(stderr_config(level_for(verbose))?)?;
    Ok(())
}

//! Options passed explicitly into each calculation.

use crate::error::CidrError;

/// Default ceiling on the number of addresses or subnets a call may return,
/// one /16 worth of addresses.
pub const DEFAULT_MAX_RESULTS: u64 = 65_536;

pub const ENV_MAX_RESULTS: &str = "CIDR_CALC_MAX_RESULTS";
pub const ENV_VERBOSE: &str = "CIDR_CALC_VERBOSE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Log diagnostics at info level instead of debug.
    pub verbose: bool,
    /// Largest result list an operation will allocate.
    pub max_results: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: false,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl Config {
    /// Build a config from `CIDR_CALC_*` environment variables, falling back
    /// to the defaults for unset ones.
    pub fn from_env() -> Result<Config, CidrError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, CidrError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(value) = lookup(ENV_MAX_RESULTS) {
            config.max_results = value.trim().parse().map_err(|_| {
                CidrError::Config(format!("{ENV_MAX_RESULTS}='{value}' is not a number"))
            })?;
        }
        if let Some(value) = lookup(ENV_VERBOSE) {
            config.verbose = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                _ => {
                    return Err(CidrError::Config(format!(
                        "{ENV_VERBOSE}='{value}' is not a boolean"
                    )))
                }
            };
        }
        log::trace!("config from env: {:?}", config);
        Ok(config)
    }

    /// Level for per-call diagnostics.
    pub fn log_level(&self) -> log::Level {
        if self.verbose {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }

    /// Fail with [`CidrError::TooLarge`] if `requested` entries exceed the ceiling.
    pub fn check_limit(&self, requested: u64) -> Result<(), CidrError> {
        if requested > self.max_results {
            Err(CidrError::TooLarge {
                requested,
                limit: self.max_results,
            })
        } else {
            Ok(())
        }
    }
}


use std::path::PathBuf;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::types::DatePolicy;

pub const USAGE: &str = "Usage: crypto-csv-parser [input].csv [--log-level level] [--strict-dates] [--json]";

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("No input file was given")]
    MissingInput,
    #[error("Missing value for [{0}]")]
    MissingValue(String),
    #[error("Unknown option [{0}]")]
    UnknownOption(String)
}

/// Command line settings of the binary.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub log_level: LevelFilter,
    pub date_policy: DatePolicy,
    pub json: bool
}

impl Config {
    /// Builds the configuration from the process arguments, program name excluded.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        //NOTE: The option set is small enough that a hand-written loop reads better than pulling in clap.
        let mut args = args.into_iter();
        let mut config = Config {
            files: Vec::new(),
            log_level: LevelFilter::ERROR,
            date_policy: DatePolicy::Fallback,
            json: false
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log-level" => {
                    let level = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.log_level = parse_log_level(&level);
                }
                "--strict-dates" => config.date_policy = DatePolicy::Strict,
                "--json" => config.json = true,
                option if option.starts_with("--") => return Err(ConfigError::UnknownOption(option.to_string())),
                _ => config.files.push(PathBuf::from(&arg))
            }
        }

        if config.files.is_empty() {
            return Err(ConfigError::MissingInput);
        }

        Ok(config)
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

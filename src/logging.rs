use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use simplelog::{Config as LogFormat, WriteLogger};

use crate::config::LogConfig;
use crate::error::{AppError, AppResult};

pub fn parse_level(value: &str) -> AppResult<LevelFilter> {
    LevelFilter::from_str(value.trim())
        .map_err(|_| AppError::invalid_argument(format!("unknown log level: {value:?}")))
}

/// Installs the global file logger described by `config`.
///
/// The terminal is owned by the UI, so records only ever go to a file. Without
/// a configured file no logger is installed and every `log` macro is a no-op.
pub fn init(config: &LogConfig) -> AppResult<bool> {
    let level = parse_level(&config.level)?;
    let Some(path) = config.file.as_deref() else {
        return Ok(false);
    };
    let file = open_log_file(path)?;
    WriteLogger::init(level, LogFormat::default(), file)?;
    log::info!("logging to {} at {level}", path.display());
    Ok(true)
}

fn open_log_file(path: &Path) -> AppResult<File> {
    File::create(path).map_err(|source| {
        AppError::io_with_context(
            source,
            format!("failed to create log file: {}", path.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use crate::config::LogConfig;

    use super::{init, parse_level};

    #[test]
    fn parse_level_accepts_known_names_case_insensitively() {
        assert_eq!(parse_level("debug").expect("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN ").expect("warn"), LevelFilter::Warn);
        assert_eq!(parse_level("off").expect("off"), LevelFilter::Off);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn init_without_file_installs_nothing() {
        let installed = init(&LogConfig::default()).expect("no-file config should succeed");
        assert!(!installed);
    }

    #[test]
    fn init_validates_level_before_touching_files() {
        let config = LogConfig {
            file: None,
            level: "chatty".to_string(),
        };
        assert!(init(&config).is_err());
    }
}

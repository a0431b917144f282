//! Diagnostic logging bootstrap.
//!
//! Diagnostics go to stderr through the `log` facade so that stdout stays
//! reserved for command output. Messages use a flat `event=... key=value`
//! shape, e.g. `event=blob_load_failed module=store reason=...`.
//!
//! # Invariants
//! - Logging is initialized at most once per process.
//! - Re-initialization with the same level is a no-op; a different level is rejected.
//! - Initialization never panics.

use crate::error::{DiaryError, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

/// Environment variable overriding the configured log level
pub const LOG_ENV_VAR: &str = "PIXELDIARY_LOG";

/// Level used when neither flag, environment nor config picks one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Initializes stderr logging at `level`.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when logging is already active at a different level.
/// - Returns an error when the logger backend fails to start.
pub fn init_logging(level: &str) -> Result<()> {
    let normalized = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        let logger = Logger::try_with_str(normalized)
            .map_err(|err| DiaryError::Logging(format!("invalid log level `{normalized}`: {err}")))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| DiaryError::Logging(format!("failed to start logger: {err}")))?;

        debug!(
            "event=logging_init module=core status=ok level={} version={}",
            normalized,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level: normalized,
            _logger: logger,
        })
    })?;

    if state.level != normalized {
        return Err(DiaryError::Logging(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, normalized
        )));
    }

    Ok(())
}

/// Returns the active log level, or `None` before initialization.
pub fn logging_status() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

/// Picks the effective log level: explicit flag, then `PIXELDIARY_LOG`,
/// then the diary config, then [`DEFAULT_LOG_LEVEL`].
pub fn resolve_level(flag: Option<&str>, configured: Option<&str>) -> String {
    flag.map(str::to_string)
        .or_else(|| std::env::var(LOG_ENV_VAR).ok())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Maps user input onto one of the supported level names.
pub fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(DiaryError::Config(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert_eq!(normalize_level("off").unwrap(), "off");
    }

    #[test]
    fn test_normalize_level_rejects_unknown() {
        let err = normalize_level("loud").unwrap_err();
        assert!(err.to_string().contains("unsupported log level"));
    }

    #[test]
    fn test_resolve_level_prefers_flag() {
        assert_eq!(resolve_level(Some("debug"), Some("error")), "debug");
    }

    #[test]
    fn test_init_logging_is_idempotent_and_rejects_conflicts() {
        init_logging("error").unwrap();
        init_logging("ERROR").unwrap();

        let err = init_logging("debug").unwrap_err();
        assert!(err.to_string().contains("refusing to switch"));
        assert_eq!(logging_status(), Some("error"));
    }
}

//! Logging bootstrap and level policy.
//!
//! # Responsibility
//! - Initialize stderr logging exactly once per process.
//! - Normalize user-provided level strings.
//!
//! # Invariants
//! - Initialization is idempotent for the same level.
//! - Re-initialization with a different level is rejected.
//! - Initialization never panics.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Initializes stderr logging at the given level.
///
/// Returns `Ok(())` when logging is active, or a human-readable error
/// string when initialization fails.
///
/// # Invariants
/// - Calling this function repeatedly with the same `level` is idempotent.
/// - Calling it with a different `level` after initialization is rejected.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when logger backend setup fails.
pub fn init_logging(level: &str) -> Result<(), String> {
    let normalized = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.level == normalized {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{normalized}`",
            state.level
        ));
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let logger = Logger::try_with_str(normalized)
            .map_err(|err| format!("invalid log level `{normalized}`: {err}"))?
            .log_to_stderr()
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=logging_init module=core status=ok level={normalized} version={}",
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level: normalized,
            _logger: logger,
        })
    })?;

    if state.level != normalized {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{normalized}`",
            state.level
        ));
    }

    Ok(())
}

/// Returns the active log level, or `None` before initialization.
pub fn logging_status() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

//! REPL settings.
//!
//! Each setting resolves flag first, then environment, then default.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the history file.
pub const HISTORY_ENV: &str = "MLISP_HISTORY";

/// History file used when nothing else is configured.
pub const DEFAULT_HISTORY: &str = "history.txt";

/// Prompt, in cyan.
pub const PROMPT: &str = "\x1b[36m>>> \x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Where history is loaded from and saved to; `None` disables it.
    pub history: Option<PathBuf>,
    pub prompt: String,
}

impl ReplConfig {
    pub fn resolve(flag: Option<PathBuf>, no_history: bool) -> Self {
        Self::resolve_with(flag, no_history, std::env::var_os(HISTORY_ENV))
    }

    fn resolve_with(flag: Option<PathBuf>, no_history: bool, env: Option<OsString>) -> Self {
        let history = if no_history {
            None
        } else {
            Some(
                flag.or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY)),
            )
        };
        Self {
            history,
            prompt: PROMPT.to_string(),
        }
    }
}

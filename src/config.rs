//! Server configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HISTORY_LIMIT: usize = 50;
pub const DEFAULT_THREAD_ID: &str = "mental_health_session";
pub const DEFAULT_SUMMARY_TURNS: usize = 6;
pub const DEFAULT_MAX_THREADS: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Parse { key: &'static str, value: String },

    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Messages kept per chat thread before the oldest are dropped.
    pub history_limit: usize,
    /// Thread used when a chat request names none.
    pub default_thread: String,
    /// Messages included in the summary handed to the reply policy.
    pub summary_turns: usize,
    /// Chat threads kept in memory before the least recently used is dropped.
    pub max_threads: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_thread: DEFAULT_THREAD_ID.to_owned(),
            summary_turns: DEFAULT_SUMMARY_TURNS,
            max_threads: DEFAULT_MAX_THREADS,
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CHAT_HISTORY_LIMIT`: default 50
    /// - `CHAT_DEFAULT_THREAD`: default `mental_health_session`
    /// - `CHAT_SUMMARY_TURNS`: default 6
    /// - `CHAT_MAX_THREADS`: default 1000
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `PORT` is not a port number or a limit
    /// is zero. Unparseable limits fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Parse { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let history_limit = non_zero(
            "CHAT_HISTORY_LIMIT",
            parse_or(lookup("CHAT_HISTORY_LIMIT"), DEFAULT_HISTORY_LIMIT),
        )?;
        let summary_turns = non_zero(
            "CHAT_SUMMARY_TURNS",
            parse_or(lookup("CHAT_SUMMARY_TURNS"), DEFAULT_SUMMARY_TURNS),
        )?;
        let max_threads = non_zero(
            "CHAT_MAX_THREADS",
            parse_or(lookup("CHAT_MAX_THREADS"), DEFAULT_MAX_THREADS),
        )?;
        let default_thread = lookup("CHAT_DEFAULT_THREAD")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_THREAD_ID.to_owned());

        Ok(Self { port, history_limit, default_thread, summary_turns, max_threads })
    }
}

fn parse_or<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}

fn non_zero(key: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 { Err(ConfigError::Zero { key }) } else { Ok(value) }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

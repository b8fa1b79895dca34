//! Application configuration loaded from environment variables.

use std::str::FromStr;

/// Output format of the log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Terminal configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"warn"`)
/// - `WAREHOUSE_LOG_FORMAT`: `pretty` or `json` (default: `pretty`)
/// - `WAREHOUSE_CLEAR_SCREEN`: clear the terminal between screens (default: `true`)
/// - `WAREHOUSE_PAUSE`: wait for enter after each message (default: `true`)
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub clear_screen: bool,
    pub pause: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("WAREHOUSE_LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_format),
            clear_screen: lookup("WAREHOUSE_CLEAR_SCREEN")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.clear_screen),
            pause: lookup("WAREHOUSE_PAUSE")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.pause),
        }
    }

    /// Configuration for scripted sessions: no screen clearing, no pauses.
    pub fn scripted() -> Self {
        Self {
            clear_screen: false,
            pause: false,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            clear_screen: true,
            pause: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

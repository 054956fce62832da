//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::application::dto::{DEFAULT_ARRIVAL_REVERT, DEFAULT_LOGIN_LATENCY, ShellPolicy};

pub(crate) const APP_NAME: &str = "routeoptimize";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "routeoptimize";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Simulated delays.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Re-entrancy and strictness switches.
    #[serde(default)]
    pub behavior: BehaviorConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Simulated delays in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Sign-in latency.
    #[serde(default = "default_login_latency_ms")]
    pub login_latency_ms: u64,

    /// How long the arrival confirmation stays up.
    #[serde(default = "default_arrival_revert_ms")]
    pub arrival_revert_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            login_latency_ms: default_login_latency_ms(),
            arrival_revert_ms: default_arrival_revert_ms(),
        }
    }
}

/// Behavior switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Reject a submit while a sign-in is in flight.
    #[serde(default)]
    pub reject_concurrent_submit: bool,

    /// Cancel pending completions on logout or re-submit.
    #[serde(default)]
    pub cancel_superseded_timers: bool,

    /// Fail on missing view elements. Unset follows the build profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_elements: Option<bool>,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Enable `TachyonFX` animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Accent color name or hex value.
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl UiConfig {
    /// Event loop tick, never zero.
    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            enable_animations: true,
            accent_color: default_accent_color(),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn default_login_latency_ms() -> u64 {
    DEFAULT_LOGIN_LATENCY.as_millis() as u64
}

#[allow(clippy::cast_possible_truncation)]
const fn default_arrival_revert_ms() -> u64 {
    DEFAULT_ARRIVAL_REVERT.as_millis() as u64
}

const fn default_tick_rate_ms() -> u64 {
    50
}

const fn default_true() -> bool {
    true
}

fn default_accent_color() -> String {
    "Cyan".to_string()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(latency) = args.login_latency_ms {
            self.timing.login_latency_ms = latency;
        }
        if let Some(revert) = args.arrival_revert_ms {
            self.timing.arrival_revert_ms = revert;
        }
        if let Some(reject) = args.reject_concurrent_submit {
            self.behavior.reject_concurrent_submit = reject;
        }
        if let Some(cancel) = args.cancel_superseded_timers {
            self.behavior.cancel_superseded_timers = cancel;
        }
        if let Some(strict) = args.strict_elements {
            self.behavior.strict_elements = Some(strict);
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(accent_color) = args.accent_color {
            self.ui.accent_color = accent_color;
        }
    }

    /// Builds the shell policy from timing and behavior settings.
    #[must_use]
    pub fn shell_policy(&self) -> ShellPolicy {
        let defaults = ShellPolicy::default();
        ShellPolicy {
            login_latency: Duration::from_millis(self.timing.login_latency_ms),
            arrival_revert: Duration::from_millis(self.timing.arrival_revert_ms),
            reject_concurrent_submit: self.behavior.reject_concurrent_submit,
            cancel_superseded_timers: self.behavior.cancel_superseded_timers,
            strict_elements: self
                .behavior
                .strict_elements
                .unwrap_or(defaults.strict_elements),
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("routeoptimize.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [timing]
            login_latency_ms = 1500

            [behavior]
            reject_concurrent_submit = true

            [ui]
            enable_animations = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.timing.login_latency_ms, 1500);
        assert_eq!(config.timing.arrival_revert_ms, 2000);
        assert!(config.behavior.reject_concurrent_submit);
        assert!(!config.behavior.cancel_superseded_timers);
        assert_eq!(config.behavior.strict_elements, None);
        assert!(!config.ui.enable_animations);
        assert_eq!(config.ui.tick_rate_ms, 50);
    }

    #[test]
    fn test_default_policy_matches_shell_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.shell_policy(), ShellPolicy::default());
        assert!(config.ui.enable_animations);
    }

    #[test]
    fn test_args_override_file_values() {
        let mut config: AppConfig = toml::from_str(
            r"
            [timing]
            login_latency_ms = 100
            arrival_revert_ms = 100
            ",
        )
        .unwrap();
        let args = CliArgs::parse_from([
            "routeoptimize",
            "--arrival-revert-ms",
            "500",
            "--strict-elements",
            "false",
            "--cancel-superseded-timers",
            "true",
        ]);

        config.merge_with_args(args);
        let policy = config.shell_policy();

        assert_eq!(policy.login_latency, Duration::from_millis(100));
        assert_eq!(policy.arrival_revert, Duration::from_millis(500));
        assert!(!policy.strict_elements);
        assert!(policy.cancel_superseded_timers);
        assert!(!policy.reject_concurrent_submit);
    }
}

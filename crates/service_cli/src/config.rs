//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use pricer_models::presets::find_preset;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "payoff.toml";

/// Preset used when nothing else selects one.
pub const DEFAULT_PRESET: &str = "ATM";

const ENV_LOG_LEVEL: &str = "PAYOFF_LOG_LEVEL";
const ENV_FORMAT: &str = "PAYOFF_FORMAT";
const ENV_PRESET: &str = "PAYOFF_PRESET";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Unknown default preset: {0}")]
    UnknownPreset(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Preset seeding parameter flags
    pub default_preset: String,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            format: OutputFormat::Table,
            default_preset: DEFAULT_PRESET.to_string(),
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Apply environment overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using `lookup` for variable access
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(preset) = lookup(ENV_PRESET) {
            self.default_preset = preset;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if find_preset(&self.default_preset).is_none() {
            return Err(ConfigError::UnknownPreset(self.default_preset.clone()));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
///
/// A missing default config file is ignored; a missing explicit one is an error.
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.default_preset, "ATM");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_from_toml() {
        let config = CliConfig::from_toml(
            r#"
            log_level = "debug"
            format = "json"
            default_preset = "Calm"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.default_preset, "Calm");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml("format = \"json\"").unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.default_preset, "ATM");
    }

    #[test]
    fn test_toml_rejects_bad_values() {
        assert!(CliConfig::from_toml("log_level = \"loud\"").is_err());
        assert!(CliConfig::from_toml("colour = true").is_err());
        assert!(matches!(
            CliConfig::from_toml("default_preset = \"Moon\""),
            Err(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/payoff.toml")),
            ..Default::default()
        };
        assert!(matches!(build_config(&cli), Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("PAYOFF_LOG_LEVEL", "warn"),
            ("PAYOFF_FORMAT", "json"),
            ("PAYOFF_PRESET", "Earnings"),
        ]
        .into_iter()
        .collect();

        let mut config = CliConfig::default();
        config
            .apply_env_with(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.default_preset, "Earnings");
    }

    #[test]
    fn test_cli_beats_env() {
        let mut config = CliConfig::default();
        config
            .apply_env_with(|key| (key == "PAYOFF_FORMAT").then(|| "json".to_string()))
            .unwrap();
        let cli = CliArgs {
            format: Some("table".to_string()),
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_invalid_cli_override() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            log_level: Some("chatty".to_string()),
            ..Default::default()
        };
        assert!(config.merge_with_cli(&cli).is_err());
    }
}

// portable-dirs - platform/config.rs
//
// `portable-dirs.toml` loading with startup validation.
//
// The file lives in the roaming data directory, so it travels with the rest
// of the portable tree. It only configures the diagnostic binary; the
// library's directory layout is fixed.

use crate::util::constants;
use crate::util::error::ConfigError;
use std::path::Path;

/// Raw deserialisable shape of the config file.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[report]` section.
    pub report: ReportSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[report]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Output format: "text" or "json".
    pub format: Option<String>,
}

/// How the diagnostic binary prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Validated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Report output format.
    pub report_format: ReportFormat,
}

/// Load and validate the config file from `dir`.
///
/// Returns the validated config and a list of non-fatal warnings. A missing
/// file yields defaults with no warnings (first run). An unreadable,
/// oversized, or unparseable file yields defaults plus a warning; the binary
/// still runs.
pub fn load_config(dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config file found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw(&config_path) {
        Ok(raw) => raw,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config file");

    let mut config = AppConfig::default();

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[logging] level".to_string(),
                    value: level.clone(),
                    expected: format!(
                        "one of {}; using default ({})",
                        constants::VALID_LOG_LEVELS.join(", "),
                        constants::DEFAULT_LOG_LEVEL
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Report: format --
    if let Some(ref format) = raw.report.format {
        match format.to_lowercase().as_str() {
            "text" => config.report_format = ReportFormat::Text,
            "json" => config.report_format = ReportFormat::Json,
            _ => warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[report] format".to_string(),
                    value: format.clone(),
                    expected: "\"text\" or \"json\"; using default (text)".to_string(),
                }
                .to_string(),
            ),
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

fn read_raw(path: &Path) -> Result<RawConfig, ConfigError> {
    let size = std::fs::metadata(path)
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if size > constants::MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: constants::MAX_CONFIG_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) {
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), content).unwrap();
    }

    #[test]
    fn missing_file_gives_defaults_silently() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn valid_values_are_applied() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[logging]\nlevel = \"DEBUG\"\n\n[report]\nformat = \"json\"\n");

        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.report_format, ReportFormat::Json);
    }

    #[test]
    fn invalid_values_warn_and_fall_back() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[logging]\nlevel = \"loud\"\n\n[report]\nformat = \"yaml\"\n");

        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("[logging] level"));
        assert!(warnings[1].contains("[report] format"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[future]\nshiny = true\n");

        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn malformed_toml_warns() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[logging\nlevel = ");

        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let padding = "#".repeat(constants::MAX_CONFIG_FILE_SIZE as usize + 1);
        write_config(&dir, &padding);

        let (_, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("exceeds maximum"));
    }
}

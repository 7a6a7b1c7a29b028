use anyhow::Context;
use downtown_syntax::{ParseOptions, UnclosedDelimiters};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "DOWNTOWN_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// How parsed documents are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Indented node outline.
    #[default]
    Outline,
    Json,
    /// The tree written back as markdown.
    Markdown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    pub unclosed_delimiters: UnclosedDelimiters,
}

impl Config {
    /// Reads the config at `config_path`; `Ok(None)` when there is no file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    config_path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })
    }

    /// Reads the config at [`Config::config_path`], falling back to the
    /// defaults when there is none.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(Self::config_path())?.unwrap_or_default())
    }

    /// Writes the config as TOML, creating missing parent directories.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)
            .with_context(|| format!("writing {}", config_path.display()))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// `$DOWNTOWN_CONFIG` if set, otherwise `~/.config/downtown/config.toml`.
    pub fn config_path() -> PathBuf {
        let configured = std::env::var(CONFIG_PATH_ENV).ok();
        Self::config_path_from(configured.as_deref())
    }

    fn config_path_from(configured: Option<&str>) -> PathBuf {
        match configured.filter(|path| !path.is_empty()) {
            Some(path) => {
                let path = PathBuf::from(path);
                Self::expand_path(&path).unwrap_or(path)
            }
            None => {
                let config_dir = shellexpand::tilde("~/.config/downtown");
                PathBuf::from(config_dir.as_ref()).join("config.toml")
            }
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::default().with_unclosed_delimiters(self.unclosed_delimiters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_path() {
        let config_path = Config::config_path_from(None);
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/downtown/config.toml"));
    }

    #[test]
    fn test_empty_override_uses_default() {
        assert_eq!(Config::config_path_from(Some("")), Config::config_path_from(None));
    }

    #[test]
    fn test_override_path_with_tilde() {
        let config_path = Config::config_path_from(Some("~/elsewhere/downtown.toml"));
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with("elsewhere/downtown.toml"));
    }

    #[test]
    fn test_override_path_with_env_var() {
        unsafe {
            env::set_var("DOWNTOWN_TEST_ROOT", "/test/env/path");
        }

        let config_path = Config::config_path_from(Some("$DOWNTOWN_TEST_ROOT/config.toml"));
        assert_eq!(config_path, PathBuf::from("/test/env/path/config.toml"));

        unsafe {
            env::remove_var("DOWNTOWN_TEST_ROOT");
        }
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            format: OutputFormat::Json,
            unclosed_delimiters: UnclosedDelimiters::AsText,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config: Config = toml::from_str("format = \"markdown\"\n").unwrap();

        assert_eq!(config.format, OutputFormat::Markdown);
        assert_eq!(config.unclosed_delimiters, UnclosedDelimiters::Preserve);
        assert_eq!(toml::from_str::<Config>("").unwrap(), Config::default());
    }

    #[test]
    fn test_kebab_case_values_in_toml() {
        let config_content = r#"
format = "outline"
unclosed_delimiters = "as-text"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.unclosed_delimiters, UnclosedDelimiters::AsText);
        assert_eq!(
            config.parse_options().unclosed_delimiters,
            UnclosedDelimiters::AsText
        );
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_from_directory_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = Config::load_from_path(temp_dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigReadError { .. }));
    }

    #[test]
    fn test_load_invalid_config_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "format = \"sideways\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            format: OutputFormat::Markdown,
            unclosed_delimiters: UnclosedDelimiters::Preserve,
        };

        // Parent directories are created on save
        test_config.save_to_path(&config_file).unwrap();
        assert!(config_file.exists(), "Config file should exist");

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}

use neuraxis_cmark_engine::ParseOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_VAR: &str = "NEURAXIS_CMARK_CONFIG";

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

/// Settings read from `config.toml`. Missing tables and keys fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parse: ParseOptions,
}

impl Config {
    /// `Ok(None)` when there is no file at `config_path`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    /// `$NEURAXIS_CMARK_CONFIG` when set, otherwise `~/.config/neuraxis-cmark/config.toml`.
    pub fn config_path() -> PathBuf {
        resolve_config_path(std::env::var(CONFIG_PATH_VAR).ok().as_deref())
    }
}

fn resolve_config_path(override_path: Option<&str>) -> PathBuf {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return expand_path(path).unwrap_or_else(|| PathBuf::from(path));
    }
    let config_dir = shellexpand::tilde("~/.config/neuraxis-cmark");
    PathBuf::from(config_dir.as_ref()).join("config.toml")
}

fn expand_path(path: &str) -> Option<PathBuf> {
    match shellexpand::full(path) {
        Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    fn parallel() -> Config {
        Config {
            parse: ParseOptions {
                parallel_inlines: true,
                ..ParseOptions::default()
            },
        }
    }

    #[test]
    fn default_path_is_under_home() {
        let config_path = resolve_config_path(None);
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/neuraxis-cmark/config.toml"));
    }

    #[test]
    fn empty_override_is_ignored() {
        assert_eq!(resolve_config_path(Some("")), resolve_config_path(None));
    }

    #[test]
    fn override_path_is_expanded() {
        unsafe {
            env::set_var("CMARK_TEST_CONFIG_ROOT", "/test/env/path");
        }

        let path = resolve_config_path(Some("$CMARK_TEST_CONFIG_ROOT/cmark.toml"));
        assert_eq!(path, PathBuf::from("/test/env/path/cmark.toml"));

        let home = resolve_config_path(Some("~/cmark.toml"));
        assert!(!home.to_string_lossy().starts_with('~'));

        unsafe {
            env::remove_var("CMARK_TEST_CONFIG_ROOT");
        }
    }

    #[test]
    fn unknown_variable_keeps_the_raw_path() {
        let path = resolve_config_path(Some("$CMARK_SURELY_UNSET_VARIABLE/x.toml"));
        assert_eq!(path, PathBuf::from("$CMARK_SURELY_UNSET_VARIABLE/x.toml"));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");

        parallel().save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, parallel());
    }

    #[test]
    fn partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[parse]\nparallel_inlines = true\n").unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded, parallel());

        std::fs::write(&config_file, "").unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[parse\nlossy_utf8 = ").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn directory_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = Config::load_from_path(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigReadError { .. }));
    }
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::application::FormatOptions;

const APP_DIR: &str = "papernote";
const CONFIG_FILE: &str = "papernote.toml";

/// TOML configuration for a conversion run
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub format: FormatOptions,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PathsConfig {
    /// Directories holding export files
    #[serde(default)]
    pub sources: Vec<PathBuf>,
    /// Directory notes are written to
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub recursive: bool,
}

fn default_output() -> PathBuf { PathBuf::from("results") }

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            output: default_output(),
            recursive: false,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }
        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Per-user config location, e.g. `~/.config/papernote/papernote.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load `path` if given, else the per-user file if present, else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()));
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load(&default),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FilenameScheme;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_no_file_when_creating_default_then_creates_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("papernote.toml");

        let config = Config::create_default(&config_path).unwrap();

        assert_eq!(config.paths.output, PathBuf::from("results"));
        assert_eq!(config.format.filename_scheme, FilenameScheme::Date);
        assert!(config.format.mirror_links);
        assert!(config_path.exists());
    }

    #[test]
    fn given_config_when_saving_then_writes_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("test.toml");

        Config::default().save(&config_path).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[paths]"));
        assert!(content.contains("[format]"));
        assert!(content.contains("filename_scheme = \"date\""));
    }

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("load_test.toml");

        let toml_content = r#"
[paths]
sources = ["meta/IEEE_TEVC_2019_Issue1-6", "meta/IEEE_TEVC_2020_Issue1-6"]
output = "notes"
recursive = true

[format]
filename_scheme = "year"
mirror_links = false
mirror_base_url = "https://mirror.example/"
progress_marker = false
trim_whitespace = false
linked_title = true
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.paths.sources.len(), 2);
        assert_eq!(config.paths.output, PathBuf::from("notes"));
        assert!(config.paths.recursive);
        assert_eq!(config.format.filename_scheme, FilenameScheme::Year);
        assert!(!config.format.mirror_links);
        assert_eq!(config.format.mirror_base_url, "https://mirror.example/");
        assert!(!config.format.progress_marker);
        assert!(!config.format.trim_whitespace);
        assert!(config.format.linked_title);
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");

        let toml_content = r#"
[format]
progress_marker = false
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        // Specified value
        assert!(!config.format.progress_marker);
        // Default values
        assert!(config.format.trim_whitespace);
        assert!(!config.format.linked_title);
        assert_eq!(config.format.mirror_base_url, "https://doi.org/");
        assert!(config.paths.sources.is_empty());
        assert_eq!(config.paths.output, PathBuf::from("results"));
    }

    #[test]
    fn given_unknown_scheme_when_loading_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        fs::write(&config_path, "[format]\nfilename_scheme = \"month\"\n").unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn given_nonexistent_file_when_loading_then_returns_error() {
        let result = Config::load("/nonexistent/path/config.toml");

        assert!(result.is_err());
    }

    #[test]
    fn given_explicit_missing_path_when_resolving_then_returns_error() {
        let result = Config::resolve(Some(Path::new("/nonexistent/papernote.toml")));

        assert!(result.is_err());
    }

    #[test]
    fn given_round_trip_when_saving_and_loading_then_preserves_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("roundtrip.toml");

        let original = Config {
            paths: PathsConfig {
                sources: vec![PathBuf::from("meta/2023")],
                output: PathBuf::from("out"),
                recursive: true,
            },
            format: FormatOptions {
                filename_scheme: FilenameScheme::Year,
                ..Default::default()
            },
        };

        original.save(&config_path).unwrap();
        let loaded = Config::load(&config_path).unwrap();

        assert_eq!(loaded, original);
    }
}

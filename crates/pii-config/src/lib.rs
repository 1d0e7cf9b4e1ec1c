use anyhow::Context;
use pii_core::Category;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simple configuration for pii
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub detect: DetectConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectConfig {
    /// Category names, kept as strings so one typo does not reject the file
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detect: DetectConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
        }
    }
}

fn default_categories() -> Vec<String> {
    Category::ALL
        .iter()
        .map(|category| category.as_str().to_string())
        .collect()
}

fn default_suffix() -> String {
    ".redacted".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "pii", "pii") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.pii/config.toml")
        }
    }

    /// Parsed category set, unknown names skipped
    pub fn enabled_categories(&self) -> Vec<Category> {
        self.detect
            .categories
            .iter()
            .filter_map(|name| match name.parse::<Category>() {
                Ok(category) => Some(category),
                Err(e) => {
                    tracing::warn!("Ignoring configured category: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Default output path for a scrubbed copy of `input`
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let mut name = input.as_os_str().to_owned();
        name.push(&self.output.suffix);
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.suffix, ".redacted");
        assert_eq!(config.enabled_categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.detect.categories, config.detect.categories);
        assert_eq!(parsed.output.suffix, config.output.suffix);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: Config = toml::from_str("[output]\nsuffix = \".clean\"\n").unwrap();
        assert_eq!(parsed.output.suffix, ".clean");
        assert_eq!(parsed.detect.categories.len(), Category::ALL.len());
    }

    #[test]
    fn test_unknown_categories_are_skipped() {
        let parsed: Config =
            toml::from_str("[detect]\ncategories = [\"email\", \"passport\", \"ssn\"]\n").unwrap();
        assert_eq!(
            parsed.enabled_categories(),
            vec![Category::Email, Category::Ssn]
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[detect]\ncategories = [\"ipv4\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.enabled_categories(), vec![Category::Ipv4]);
        assert!(Config::load_from(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_output_path_appends_suffix() {
        let config = Config::default();
        assert_eq!(
            config.output_path(Path::new("data/corpus.txt")),
            PathBuf::from("data/corpus.txt.redacted")
        );
    }
}

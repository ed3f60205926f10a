//! Optional startup configuration.
//!
//! `deploy.toml` in the working directory can pre-fill the form and override
//! the tool binary names. Every field has a default, so the tool runs with no
//! configuration file at all.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "deploy.toml";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub form: FormDefaults,
    pub tools: ToolsConfig,
}

/// Initial values for the four form fields.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FormDefaults {
    pub title: String,
    pub subtitle: String,
    pub repo_url: String,
    /// Target directory; defaults to the current directory when absent.
    pub path: Option<String>,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            title: "정보톡톡".to_string(),
            subtitle: "세상의 정보를 한번 알아보자".to_string(),
            repo_url: "https://github.com/[ID]/[REPO_NAME].git".to_string(),
            path: None,
        }
    }
}

/// Names (or paths) of the external binaries, resolved on PATH at startup.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ToolsConfig {
    pub hugo: String,
    pub git: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            hugo: "hugo".to_string(),
            git: "git".to_string(),
        }
    }
}

impl Config {
    /// A missing file is not an error; it yields the built-in defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| "failed to parse config TOML")?;
        Ok(config)
    }

    /// Initial value for the path field.
    pub fn default_path(&self) -> String {
        match &self.form.path {
            Some(p) => p.clone(),
            None => std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .display()
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/deploy.toml")).unwrap();
        assert_eq!(config.tools.hugo, "hugo");
        assert_eq!(config.tools.git, "git");
        assert_eq!(config.form.title, "정보톡톡");
        assert!(config.form.repo_url.contains("github.com"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("deploy.toml");
        std::fs::write(&path, "[form]\ntitle = \"My Blog\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.form.title, "My Blog");
        assert_eq!(config.form.subtitle, "세상의 정보를 한번 알아보자");
        assert_eq!(config.tools.git, "git");
    }

    #[test]
    fn test_tool_overrides() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("deploy.toml");
        std::fs::write(&path, "[tools]\nhugo = \"/opt/hugo/bin/hugo\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.tools.hugo, "/opt/hugo/bin/hugo");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("deploy.toml");
        std::fs::write(&path, "not toml [").unwrap();
        assert!(Config::load(&path).is_err());
    }
}

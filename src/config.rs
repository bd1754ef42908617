use crate::error::{InspectPhotoError, Result};
use crate::grouper::DesignatorRule;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Shell glob the export folders are filtered by.
    pub pattern: String,
    /// Ordinal -> designator mapping, overridable per project.
    pub designator_rule: DesignatorRule,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| InspectPhotoError::Config("Home directory not found".into()))?;
        Ok(home.join(".config").join("inspect-photo").join("config.json"))
    }

    pub fn set_pattern(&mut self, pattern: String) -> Result<()> {
        self.pattern = pattern;
        self.save()
    }

    pub fn set_rule(&mut self, rule: DesignatorRule) -> Result<()> {
        self.designator_rule = rule;
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: "*.jpg".into(),
            designator_rule: DesignatorRule::default(),
        }
    }
}

//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - The owner profile whose id is passed into every store and engine call
//! - The mode-classification strategy for energy check-ins
//!
//! Configuration is stored at `~/.config/questlog/config.toml`.

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::checkin::ModeStrategy;

/// Owner profile configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Owner identifier used for tasks and stats
    #[serde(default = "default_owner")]
    pub owner: String,
}

/// Energy check-in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Which mode-classification formula to use
    #[serde(default)]
    pub strategy: ModeStrategy,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/questlog/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub energy: EnergyConfig,
}

fn default_owner() -> String {
    "default".into()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
        }
    }
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            strategy: ModeStrategy::default(),
        }
    }
}

impl Config {
    /// Path to the configuration file.
    pub fn path() -> Result<std::path::PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, writing defaults on first run.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load the configuration, falling back to defaults on any failure.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist the configuration.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Get a config value by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "profile.owner" => Some(self.profile.owner.clone()),
            "energy.strategy" => Some(
                match self.energy.strategy {
                    ModeStrategy::Additive => "additive",
                    ModeStrategy::Averaged => "averaged",
                }
                .to_string(),
            ),
            _ => None,
        }
    }

    /// Set a config value by dotted key and persist it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "profile.owner" => {
                if value.trim().is_empty() {
                    return Err("profile.owner must not be empty".into());
                }
                self.profile.owner = value.to_string();
            }
            "energy.strategy" => {
                self.energy.strategy = match value {
                    "additive" => ModeStrategy::Additive,
                    "averaged" => ModeStrategy::Averaged,
                    other => {
                        return Err(
                            format!("unknown strategy '{other}' (additive|averaged)").into()
                        )
                    }
                };
            }
            other => return Err(format!("unknown config key: {other}").into()),
        }
        self.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.profile.owner, "default");
        assert_eq!(cfg.energy.strategy, ModeStrategy::Additive);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut cfg = Config::default();
        cfg.profile.owner = "alice".into();
        cfg.energy.strategy = ModeStrategy::Averaged;

        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.profile.owner, "alice");
        assert_eq!(back.energy.strategy, ModeStrategy::Averaged);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: Config = toml::from_str("[profile]\nowner = \"bob\"\n").unwrap();
        assert_eq!(cfg.profile.owner, "bob");
        assert_eq!(cfg.energy.strategy, ModeStrategy::Additive);
    }

    #[test]
    fn test_get_known_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("profile.owner").as_deref(), Some("default"));
        assert_eq!(cfg.get("energy.strategy").as_deref(), Some("additive"));
        assert!(cfg.get("nope").is_none());
    }
}

//! Bridge configuration
//!
//! A small TOML file controlling the prompt wording and haptic feedback,
//! with compiled-in defaults so embedders need not ship a file at all.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embedded defaults; a test keeps this in sync with `BridgeConfig::default()`.
const DEFAULT_CONFIG: &str = include_str!("../defaults/back-bridge.toml");

/// Environment variable overriding the base directory.
const DIR_ENV_VAR: &str = "BACK_BRIDGE_DIR";

/// Top-level configuration for the back button bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub prompt: PromptConfig,

    #[serde(default)]
    pub haptics: HapticsConfig,
}

/// Wording of the exit confirmation dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Question shown on the backing panel.
    #[serde(default = "default_prompt_text")]
    pub text: String,

    /// Label of the confirm column.
    #[serde(default = "default_yes_label")]
    pub yes_label: String,

    /// Label of the cancel column.
    #[serde(default = "default_no_label")]
    pub no_label: String,
}

/// Haptic feedback settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HapticsConfig {
    /// Vibration pulse in milliseconds when the exit prompt opens.
    /// Absent disables the pulse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_pulse_ms: Option<u64>,
}

fn default_prompt_text() -> String {
    "Do You Want To Exit The Game ??".to_string()
}

fn default_yes_label() -> String {
    "YES".to_string()
}

fn default_no_label() -> String {
    "NO".to_string()
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: default_prompt_text(),
            yes_label: default_yes_label(),
            no_label: default_no_label(),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            prompt: PromptConfig::default(),
            haptics: HapticsConfig::default(),
        }
    }
}

impl BridgeConfig {
    /// Load from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config at {:?}", path))
    }

    /// Load from the default location, falling back to the built-in
    /// defaults on any failure. A broken config file must not take the
    /// game down.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Could not resolve config directory: {}", e);
                return Self::default();
            }
        };
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default config: {}", e);
                Self::default()
            }
        }
    }

    /// Persist to the given path, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        tracing::info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Base directory for bridge data: `$BACK_BRIDGE_DIR` if set, otherwise
    /// `~/.back-bridge`.
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DIR_ENV_VAR) {
            return Ok(PathBuf::from(dir));
        }
        dirs::home_dir()
            .map(|home| home.join(".back-bridge"))
            .context("Could not determine home directory")
    }

    /// Default config file path inside `base_dir`.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("back-bridge.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        let parsed: BridgeConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, BridgeConfig::default());
    }

    #[test]
    fn test_empty_file_fills_defaults() {
        let parsed: BridgeConfig = toml::from_str("").unwrap();
        assert_eq!(parsed, BridgeConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let parsed: BridgeConfig = toml::from_str(
            r#"
            [prompt]
            text = "Leave already?"

            [haptics]
            prompt_pulse_ms = 25
            "#,
        )
        .unwrap();
        assert_eq!(parsed.prompt.text, "Leave already?");
        assert_eq!(parsed.prompt.yes_label, "YES");
        assert_eq!(parsed.haptics.prompt_pulse_ms, Some(25));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("back-bridge-test-{}", std::process::id()));
        let path = dir.join("config").join("back-bridge.toml");

        let config = BridgeConfig {
            prompt: PromptConfig {
                text: "Quit now?".to_string(),
                yes_label: "OK".to_string(),
                no_label: "Stay".to_string(),
            },
            haptics: HapticsConfig {
                prompt_pulse_ms: Some(15),
            },
        };
        config.save(&path).unwrap();
        let loaded = BridgeConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_base_dir_env_override() {
        std::env::set_var(DIR_ENV_VAR, "/tmp/bridge-data");
        let dir = BridgeConfig::base_dir().unwrap();
        std::env::remove_var(DIR_ENV_VAR);
        assert_eq!(dir, PathBuf::from("/tmp/bridge-data"));
    }
}

//! Configuration consumed by the engine and the host bridge.
//!
//! Nothing here changes how text is classified or triaged. The values only
//! decide how much conversation history reaches the prompt and whether
//! non-safe triage verdicts are written to the audit trail.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolaceConfig {
    /// Safety audit settings.
    pub safety: SafetyConfig,
    /// Conversation history windows.
    pub history: HistoryConfig,
}

/// Safety audit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Emit an audit event for every warning or critical triage verdict.
    ///
    /// Triage itself always runs; this only controls the audit trail.
    pub audit_events: bool,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self { audit_events: true }
    }
}

/// History window configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of most recent messages sent to the generative backend.
    pub generation_window: usize,
    /// Number of most recent messages summarised in the system prompt.
    pub prompt_window: usize,
    /// Characters of each message kept in the system prompt summary.
    pub preview_chars: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            generation_window: 10,
            prompt_window: 5,
            preview_chars: 100,
        }
    }
}

impl SolaceConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::SolaceError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::SolaceError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `<config dir>/solace/config.toml`.
    pub fn default_config_path() -> PathBuf {
        crate::solace_dirs::config_file()
    }

    /// Load from the default path when it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default() -> crate::error::Result<Self> {
        let path = Self::default_config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }
}

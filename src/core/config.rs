//! Application configuration management

use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Print/export settings
    pub export: ExportConfig,
}

/// Settings for the print/export path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Embed the script that opens the print dialog once the page loads
    pub auto_print: bool,
    /// Delay before the print dialog opens, giving the page time to lay out
    pub print_delay_ms: u64,
    /// How many generated export files to keep in the cache directory
    pub keep_exports: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            auto_print: true,
            print_delay_ms: 250,
            keep_exports: 8,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "cvforge", "CVForge")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_settings() {
        let config = AppConfig::default();
        assert!(config.export.auto_print);
        assert_eq!(config.export.print_delay_ms, 250);
        assert!(config.export.keep_exports > 0);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let mut config = AppConfig::default();
        config.export.auto_print = false;
        config.export.print_delay_ms = 1000;

        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert!(!back.export.auto_print);
        assert_eq!(back.export.print_delay_ms, 1000);
        assert_eq!(back.export.keep_exports, config.export.keep_exports);
    }
}

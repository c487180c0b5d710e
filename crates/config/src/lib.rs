use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use core_types::{Language, Theme};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const CURRENT_SCHEMA_VERSION: u32 = 2;

const fn default_compact_threshold() -> f32 {
    10.0
}

fn default_storage_file() -> String {
    "preferences.json".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub schema_version: u32,
    pub brand_name: String,
    #[serde(default)]
    pub default_language: Language,
    #[serde(default)]
    pub default_theme: Theme,
    /// Scroll offset in pixels after which the navigation bar turns compact.
    #[serde(default = "default_compact_threshold")]
    pub compact_scroll_threshold: f32,
    #[serde(default = "default_storage_file")]
    pub storage_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            brand_name: "Forkit".to_string(),
            default_language: Language::De,
            default_theme: Theme::Light,
            compact_scroll_threshold: default_compact_threshold(),
            storage_file: default_storage_file(),
        }
    }
}

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join("site.json"),
        }
    }

    pub fn from_default_location() -> Result<Self> {
        let mut dir = dirs::config_dir().context("failed to resolve config_dir")?;
        dir.push("forkit");
        Ok(Self::from_dir(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_or_init(&self) -> Result<SiteConfig> {
        if !self.path.exists() {
            let config = SiteConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let mut config: SiteConfig =
            serde_json::from_str(&raw).context("failed to parse site config json")?;
        if self.migrate(&mut config) {
            self.save(&config)?;
        }
        Ok(config)
    }

    pub fn save(&self, config: &SiteConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let text = serde_json::to_string_pretty(config).context("failed to serialize config")?;
        fs::write(&self.path, text)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    fn migrate(&self, config: &mut SiteConfig) -> bool {
        if config.schema_version >= CURRENT_SCHEMA_VERSION {
            return false;
        }

        warn!(
            from = config.schema_version,
            to = CURRENT_SCHEMA_VERSION,
            "migrating site config schema"
        );

        // A non-positive threshold keeps the bar compact at the top of the page.
        if config.compact_scroll_threshold <= 0.0 {
            config.compact_scroll_threshold = default_compact_threshold();
        }
        if config.storage_file.trim().is_empty() {
            config.storage_file = default_storage_file();
        }
        config.schema_version = CURRENT_SCHEMA_VERSION;
        true
    }
}

// File: src/config.rs
// Purpose: Page routing configuration parsed from rhtmx-pages.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::options::{UserOptions, DEFAULT_EXTENSIONS, DEFAULT_PAGES_DIR};

/// File-based configuration
///
/// ```toml
/// [pages]
/// pages_dir = "views"
/// extensions = ["vue", "md"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PagesConfig {
    #[serde(default)]
    pub pages: PagesSection,
}

/// The `[pages]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PagesSection {
    /// Directory containing page files (default: "pages")
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// Extensions treated as pages (default: ["vue", "md"])
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_pages_dir() -> String {
    DEFAULT_PAGES_DIR.to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

impl Default for PagesSection {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            extensions: default_extensions(),
        }
    }
}

impl PagesConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./rhtmx-pages.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rhtmx-pages.toml")
    }

    /// Parse configuration from TOML text, empty text yields defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Converts into caller options; the hook is left unset
    pub fn into_user_options<C>(self) -> UserOptions<C> {
        UserOptions::new()
            .with_pages_dir(self.pages.pages_dir)
            .with_extensions(self.pages.extensions)
    }
}

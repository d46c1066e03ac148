//! Blog configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How a post's presentation color is chosen from the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// A fresh random pick on every load
    #[default]
    Random,
    /// Derived from the post slug, identical across loads
    Stable,
}

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Directory holding `<id>.<slug>.md` files, relative to the base directory
    pub posts_dir: String,
    /// Presentation colors assigned to posts
    pub palette: Vec<String>,
    pub color_mode: ColorMode,
    /// Title used when front-matter has none
    pub default_title: String,
    /// Subtitle used when the filename has no slug segment
    pub default_subtitle: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_dir: "public/content/blogs".to_string(),
            palette: ["indigo", "rose", "sky", "purple", "orange"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            color_mode: ColorMode::Random,
            default_title: "Untitled".to_string(),
            default_subtitle: "Guide".to_string(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded blog config from {:?}", path.as_ref());
        Ok(config)
    }
}

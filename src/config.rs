//! Hydrator configuration.
//!
//! Handles loading and validating `site-hydrate.toml` from the site root.
//! Stock defaults are the base layer; the user file only needs the keys it
//! wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [content]
//! resource = "data/content.json"  # Content document, relative to the page
//! timeout_secs = 10                # HTTP fetch timeout
//!
//! [slideshow]
//! interval_ms = 4000               # Auto-advance period
//!
//! [brand]                          # Last-resort colors when neither the
//! primary = "#6B3F18"              # content document nor the stylesheet
//! accent = "#22C55E"               # sets them
//! bg = "#EAF7F1"
//!
//! [theme]
//! # stylesheet = "css/site.css"    # Seeds the page's --variables
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::content::CONTENT_RESOURCE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Config file name looked up in the site root.
pub const CONFIG_FILE: &str = "site-hydrate.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HydrateConfig {
    /// Where and how to fetch the content document.
    pub content: ContentConfig,
    /// Slideshow defaults.
    pub slideshow: SlideshowConfig,
    /// Fallback brand colors.
    pub brand: BrandDefaults,
    /// Stylesheet that seeds the theme variables.
    pub theme: ThemeConfig,
}

impl HydrateConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.resource.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content.resource must not be empty".into(),
            ));
        }
        if self.content.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "content.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.slideshow.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "slideshow.interval_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Content document path, relative to the page.
    pub resource: String,
    /// HTTP fetch timeout in seconds.
    pub timeout_secs: u64,
}

impl ContentConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            resource: CONTENT_RESOURCE.to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideshowConfig {
    /// Auto-advance period in milliseconds.
    pub interval_ms: u64,
}

impl SlideshowConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self { interval_ms: 4000 }
    }
}

/// Last-resort brand colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandDefaults {
    pub primary: String,
    pub accent: String,
    pub bg: String,
}

impl Default for BrandDefaults {
    fn default() -> Self {
        Self {
            primary: "#6B3F18".to_string(),
            accent: "#22C55E".to_string(),
            bg: "#EAF7F1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Stylesheet path relative to the site root. Its `--name: value`
    /// declarations become the initial theme variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
}

// =============================================================================
// Loading
// =============================================================================

/// Parse config text and validate it. Every section and key is optional;
/// whatever the text leaves out keeps its default.
pub fn parse_config(text: &str) -> Result<HydrateConfig, ConfigError> {
    let config: HydrateConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Load `site-hydrate.toml` from the site root.
pub fn load_config(root: &Path) -> Result<HydrateConfig, ConfigError> {
    load_config_file(&root.join(CONFIG_FILE))
}

/// Load a specific config file; a missing file yields the defaults.
pub fn load_config_file(path: &Path) -> Result<HydrateConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => parse_config(&text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HydrateConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# site-hydrate configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Content document
# ---------------------------------------------------------------------------
[content]
# Path of the shared JSON content document, relative to each page.
resource = "data/content.json"

# Seconds to wait for the document over HTTP before falling back to
# the page defaults.
timeout_secs = 10

# ---------------------------------------------------------------------------
# Slideshows
# ---------------------------------------------------------------------------
[slideshow]
# Milliseconds between automatic advances. Pages may override per widget.
interval_ms = 4000

# ---------------------------------------------------------------------------
# Brand fallbacks
# ---------------------------------------------------------------------------
# Used only when neither the content document nor the stylesheet sets the
# color.
[brand]
primary = "#6B3F18"
accent = "#22C55E"
bg = "#EAF7F1"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Stylesheet whose --custom-property declarations seed the theme variables.
# stylesheet = "css/site.css"
"##
}

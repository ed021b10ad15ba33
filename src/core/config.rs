//! Guide configuration loaded from `.guide.yaml`

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Steps in the OMEGAMON deployment procedure
pub const DEFAULT_TOTAL_STEPS: u32 = 14;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
/// Header height added to the scroll position before scroll-spy matching
pub const DEFAULT_SCROLL_OFFSET: f64 = 150.0;
pub const DEFAULT_BACK_TO_TOP_THRESHOLD: f64 = 300.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    pub page: String,
    pub pages_dir: String,
    pub page_pattern: String,
    pub total_steps: u32,
    pub debounce_ms: u64,
    pub scroll_offset: f64,
    pub back_to_top_threshold: f64,
    pub highlight_open: String,
    pub highlight_close: String,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            page: "index.html".to_string(),
            pages_dir: "pages".to_string(),
            page_pattern: "*.html".to_string(),
            total_steps: DEFAULT_TOTAL_STEPS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
            highlight_open: "<mark>".to_string(),
            highlight_close: "</mark>".to_string(),
        }
    }
}

impl GuideConfig {
    /// Load config from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuideError;

    #[test]
    fn test_defaults() {
        let config = GuideConfig::default();
        assert_eq!(config.total_steps, 14);
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.page_pattern, "*.html");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = GuideConfig::parse("total_steps: 10\npage: final/index.html\n").unwrap();
        assert_eq!(config.total_steps, 10);
        assert_eq!(config.page, "final/index.html");
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(GuideConfig::parse("  \n").unwrap(), GuideConfig::default());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = GuideConfig::parse("total_steps: [not a number").unwrap_err();
        assert!(matches!(err, GuideError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = GuideConfig::load(&dir.path().join(".guide.yaml")).unwrap();
        assert_eq!(config, GuideConfig::default());
    }
}

pub mod download;
pub mod search;
pub mod sections;
pub mod shell;
pub mod steps;
pub mod troubleshoot;

use std::path::Path;

use anyhow::{Context as _, Result};
use unicode_width::UnicodeWidthStr;

use omegamon_guide::{collect_sections, GuideConfig, GuidePaths, Section};

/// Paths and config shared by every command
pub struct Context {
    pub paths: GuidePaths,
    pub config: GuideConfig,
}

impl Context {
    pub fn load(root: &Path) -> Result<Self> {
        let paths = GuidePaths::from_root(root.to_path_buf());
        let config = GuideConfig::load(&paths.config)
            .with_context(|| format!("Failed to load {}", paths.config.display()))?;
        let paths = paths.with_config(&config);

        Ok(Self { paths, config })
    }

    pub fn sections(&self) -> Result<Vec<Section>> {
        collect_sections(&self.paths, &self.config.page_pattern)
            .with_context(|| format!("Failed to read guide pages under {}", self.paths.root.display()))
    }
}

/// Pad `s` with spaces to `width` terminal columns
pub fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn truncate(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_chars {
        s.to_string()
    } else {
        format!("{}...", chars[..max_chars].iter().collect::<String>())
    }
}

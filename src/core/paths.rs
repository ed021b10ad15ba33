use std::path::PathBuf;

use super::config::GuideConfig;

pub const CONFIG_FILE: &str = ".guide.yaml";

pub struct GuidePaths {
    pub root: PathBuf,
    pub page: PathBuf,
    pub pages: PathBuf,
    pub config: PathBuf,
}

impl GuidePaths {
    pub fn from_root(root: PathBuf) -> Self {
        Self {
            page: root.join("index.html"),
            pages: root.join("pages"),
            config: root.join(CONFIG_FILE),
            root,
        }
    }

    /// Re-point page locations at whatever the config names, relative to root
    pub fn with_config(mut self, config: &GuideConfig) -> Self {
        self.page = self.root.join(&config.page);
        self.pages = self.root.join(&config.pages_dir);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_from_root() {
        let paths = GuidePaths::from_root(PathBuf::from("/srv/guide"));
        assert_eq!(paths.page, PathBuf::from("/srv/guide/index.html"));
        assert_eq!(paths.config, PathBuf::from("/srv/guide/.guide.yaml"));
    }

    #[test]
    fn test_paths_follow_config() {
        let config = GuideConfig {
            page: "final/index.html".to_string(),
            pages_dir: "final/pages".to_string(),
            ..Default::default()
        };
        let paths = GuidePaths::from_root(PathBuf::from("/srv/guide")).with_config(&config);
        assert_eq!(paths.page, PathBuf::from("/srv/guide/final/index.html"));
        assert_eq!(paths.pages, PathBuf::from("/srv/guide/final/pages"));
    }
}

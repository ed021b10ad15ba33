use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the guide library
#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Guide page not found: {}", .0.display())]
    PageNotFound(PathBuf),

    #[error("Step {step} is out of range (guide has {total} steps)")]
    StepOutOfRange { step: u32, total: u32 },

    #[error("Unknown issue category '{0}' (must be: deployment|performance|connectivity)")]
    UnknownIssue(String),

    #[error("Unknown download '{0}' (must be: checklist|config-template)")]
    UnknownDownload(String),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Invalid page pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GuideError>;

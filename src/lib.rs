//! omegamon-guide library
//!
//! Interactive helpers for the OMEGAMON z/OS deployment guide, free of any
//! rendering layer.
//!
//! # Modules
//!
//! - `core`: Page sections, config, troubleshooting records, downloads
//! - `search`: Section index, substring queries, keystroke debounce
//! - `tracker`: Deployment step completion
//! - `nav`: Scroll-spy, reading progress, quick jump, menus
//! - `session`: Single owner of all of the above

pub mod core;
pub mod error;
pub mod nav;
pub mod search;
pub mod session;
pub mod tracker;

// Re-exports for convenience
pub use crate::core::config::GuideConfig;
pub use crate::core::downloads::Download;
pub use crate::core::paths::GuidePaths;
pub use crate::core::section::{collect_sections, extract_sections, Section};
pub use crate::core::troubleshooting::{IssueCategory, TroubleshootingPath};
pub use error::{GuideError, Result};
pub use search::{build_index, search, IndexEntry, SearchIndex, SearchOutcome};
pub use session::GuideSession;
pub use tracker::StepTracker;

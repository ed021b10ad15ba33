pub mod config;
pub mod downloads;
pub mod paths;
pub mod section;
pub mod troubleshooting;

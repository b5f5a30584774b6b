//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{ConfigValidationError, FileApiConfig, FileConfig, FileGameConfig};
pub use loader::ConfigLoader;

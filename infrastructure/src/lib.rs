//! Infrastructure layer for quiz-challenge
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP quiz service, the tokio countdown timer,
//! and configuration file loading.

pub mod config;
pub mod http;
pub mod timer;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig, FileGameConfig};
pub use http::HttpQuizService;
pub use timer::TokioCountdownTimer;

//! Presentation layer for quiz-challenge
//!
//! This crate contains the CLI definition and a console presenter that
//! implements the orchestrator's binding and rendering sinks.

pub mod cli;
pub mod console;

// Re-export commonly used types
pub use cli::Cli;
pub use console::ConsolePresenter;

//! Domain layer for quiz-challenge
//!
//! This crate contains the core entities and pure game logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quiz round
//!
//! One question plus its full set of acceptable answers, valid until
//! the quiz is reset or reloaded:
//!
//! - **QuizData**: the payload of one round (title + acceptable answers)
//! - **QuizItem**: a single acceptable answer
//!
//! ## Canonicalization
//!
//! Submitted answers are normalized with [`core::string::capitalized`]
//! before being compared against the possible answers, making matching
//! case-insensitive.

pub mod core;
pub mod countdown;
pub mod quiz;

// Re-export commonly used types
pub use core::string::capitalized;
pub use countdown::formatter::format_to_minutes;
pub use quiz::entities::{QuizData, QuizItem};

//! Countdown timer adapter

pub mod countdown;

pub use countdown::TokioCountdownTimer;

//! Countdown display helpers

pub mod formatter;

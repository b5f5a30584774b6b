//! Core domain utilities

pub mod string;

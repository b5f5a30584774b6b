//! HTTP adapters

pub mod quiz_service;

pub use quiz_service::HttpQuizService;

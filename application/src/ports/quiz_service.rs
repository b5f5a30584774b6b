//! Quiz service port
//!
//! Defines the interface for fetching a quiz from the external service.
//! The adapter (HTTP client) lives in the infrastructure layer; the
//! application only sees success/failure and the payload shape.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur at the quiz service boundary
///
/// Opaque to the orchestrator: a failure always degrades to the same
/// user-facing error state, whatever the underlying cause was.
#[derive(Error, Debug)]
pub enum QuizServiceError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

/// Wire payload returned by the quiz endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct QuizPayload {
    /// The question title
    pub question: String,
    /// The acceptable answers
    pub answer: Vec<String>,
}

/// Gateway to the quiz endpoint
///
/// One fixed endpoint, GET semantics, no parameters. A single attempt
/// per call; retries and timeouts beyond what the underlying client
/// provides are out of scope.
#[async_trait]
pub trait QuizService: Send + Sync {
    /// Fetch the quiz for the current round
    async fn get_quiz(&self) -> Result<QuizPayload, QuizServiceError>;
}

//! HTTP quiz service adapter
//!
//! Implements the [`QuizService`] port against the quiz endpoint:
//! `GET {base_url}/quiz`, JSON payload `{ question, answer }`. A single
//! attempt per call; the only timeout behavior is whatever the shared
//! [`reqwest::Client`] is configured with.

use async_trait::async_trait;
use quiz_application::{QuizPayload, QuizService, QuizServiceError};
use tracing::debug;

/// Path of the quiz resource, relative to the configured base URL
const QUIZ_PATH: &str = "/quiz";

/// Quiz service adapter backed by an HTTP client
///
/// The base URL is injected by whoever constructs the adapter; there
/// is no process-wide environment singleton.
pub struct HttpQuizService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQuizService {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn quiz_url(&self) -> String {
        format!("{}{}", self.base_url, QUIZ_PATH)
    }
}

#[async_trait]
impl QuizService for HttpQuizService {
    async fn get_quiz(&self) -> Result<QuizPayload, QuizServiceError> {
        let url = self.quiz_url();
        debug!("Requesting quiz from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| QuizServiceError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuizServiceError::UnexpectedStatus(status.as_u16()));
        }

        response
            .json::<QuizPayload>()
            .await
            .map_err(|e| QuizServiceError::InvalidPayload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_url_joins_base_and_path() {
        let service = HttpQuizService::new(reqwest::Client::new(), "https://example.com");
        assert_eq!(service.quiz_url(), "https://example.com/quiz");
    }

    #[test]
    fn test_quiz_url_tolerates_trailing_slash() {
        let service = HttpQuizService::new(reqwest::Client::new(), "https://example.com/");
        assert_eq!(service.quiz_url(), "https://example.com/quiz");
    }

    #[test]
    fn test_payload_decodes_wire_json() {
        let json = r#"{"question": "What are all the java keywords?", "answer": ["for", "while", "if"]}"#;
        let payload: QuizPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.question, "What are all the java keywords?");
        assert_eq!(payload.answer, vec!["for", "while", "if"]);
    }

    #[test]
    fn test_payload_rejects_missing_fields() {
        let json = r#"{"question": "incomplete"}"#;
        assert!(serde_json::from_str::<QuizPayload>(json).is_err());
    }
}

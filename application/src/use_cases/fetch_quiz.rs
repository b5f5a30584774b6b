//! Fetch quiz use case
//!
//! Wraps the [`QuizService`] port and exposes its result as a small
//! event sequence: `Loading`, then exactly one terminal event.

use crate::ports::quiz_service::QuizService;
use crate::use_cases::event::UseCaseEvent;
use quiz_domain::{QuizData, QuizItem};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Business-level errors for the fetch flow
///
/// The fetch path only ever surfaces the service error; no business
/// error exists in this flow, so this enum has no variants.
#[derive(Error, Debug)]
pub enum FetchQuizError {}

/// Use case fetching the quiz data for one round
pub struct FetchQuizUseCase {
    quiz_service: Arc<dyn QuizService>,
}

impl FetchQuizUseCase {
    pub fn new(quiz_service: Arc<dyn QuizService>) -> Self {
        Self { quiz_service }
    }

    /// Fetch the quiz, reporting progress through `on_event`
    ///
    /// Emits `Loading`, invokes the service exactly once, then emits
    /// either `Data` with the mapped [`QuizData`] or `ServiceError`.
    /// Answer texts are preserved verbatim; canonicalization belongs to
    /// the matching step, not the fetch path. No retries.
    pub async fn execute<F>(&self, mut on_event: F)
    where
        F: FnMut(UseCaseEvent<QuizData, FetchQuizError>),
    {
        on_event(UseCaseEvent::Loading);

        match self.quiz_service.get_quiz().await {
            Ok(payload) => {
                debug!(
                    "Quiz fetched: \"{}\" with {} answers",
                    payload.question,
                    payload.answer.len()
                );
                let items = payload.answer.into_iter().map(QuizItem::new).collect();
                on_event(UseCaseEvent::Data(QuizData::new(payload.question, items)));
            }
            Err(err) => {
                warn!("Quiz fetch failed: {}", err);
                on_event(UseCaseEvent::ServiceError(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::quiz_service::{QuizPayload, QuizServiceError};
    use async_trait::async_trait;

    // ==================== Test Mocks ====================

    struct MockQuizService {
        result: fn() -> Result<QuizPayload, QuizServiceError>,
    }

    #[async_trait]
    impl QuizService for MockQuizService {
        async fn get_quiz(&self) -> Result<QuizPayload, QuizServiceError> {
            (self.result)()
        }
    }

    async fn collect_events(
        use_case: &FetchQuizUseCase,
    ) -> Vec<UseCaseEvent<QuizData, FetchQuizError>> {
        let mut events = Vec::new();
        use_case.execute(|event| events.push(event)).await;
        events
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_success_emits_loading_then_data() {
        let service = Arc::new(MockQuizService {
            result: || {
                Ok(QuizPayload {
                    question: "Some question".to_string(),
                    answer: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                })
            },
        });
        let use_case = FetchQuizUseCase::new(service);

        let events = collect_events(&use_case).await;

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], UseCaseEvent::Loading));
        match &events[1] {
            UseCaseEvent::Data(data) => {
                assert_eq!(data.title(), "Some question");
                // Answer text is kept verbatim, no capitalization here
                let texts: Vec<_> = data.items().iter().map(|i| i.text()).collect();
                assert_eq!(texts, vec!["a", "b", "c"]);
            }
            other => panic!("Expected Data, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failure_emits_loading_then_service_error() {
        let service = Arc::new(MockQuizService {
            result: || Err(QuizServiceError::UnexpectedStatus(503)),
        });
        let use_case = FetchQuizUseCase::new(service);

        let events = collect_events(&use_case).await;

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], UseCaseEvent::Loading));
        // The specific variant matters: service error, not business error
        assert!(matches!(
            events[1],
            UseCaseEvent::ServiceError(QuizServiceError::UnexpectedStatus(503))
        ));
    }
}

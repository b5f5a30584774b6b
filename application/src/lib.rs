//! Application layer for quiz-challenge
//!
//! This crate contains the use cases, port definitions, the quiz
//! orchestrator, and application configuration. It depends only on the
//! domain layer; adapters for the ports live in the infrastructure and
//! presentation crates.

pub mod config;
pub mod orchestrator;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GameConfig;
pub use orchestrator::QuizOrchestrator;
pub use ports::{
    binding::{ModalData, NoBinding, QuizBinding},
    countdown_timer::{CountdownTimer, OnFinish, OnTick},
    quiz_service::{QuizPayload, QuizService, QuizServiceError},
    view_state::{NoRendering, ViewFiller, ViewState, ViewStateRendering},
};
pub use use_cases::count_right_answers::CountRightAnswersUseCase;
pub use use_cases::event::UseCaseEvent;
pub use use_cases::fetch_quiz::{FetchQuizError, FetchQuizUseCase};

//! Use-case event model
//!
//! Events are how use-case results and errors are consumed. The two
//! error channels are deliberately distinct variants: `BusinessError`
//! carries a use-case-level failure, `ServiceError` carries an opaque
//! failure from the service boundary. Consumers match on the specific
//! variant rather than on "some error".

use crate::ports::quiz_service::QuizServiceError;

/// An event emitted by a use case
///
/// Per invocation, consumers receive exactly one `Loading` followed by
/// exactly one terminal event (`Data`, `BusinessError` or
/// `ServiceError`).
#[derive(Debug)]
pub enum UseCaseEvent<D, E> {
    /// Nothing happened yet
    Idle,
    /// The request started
    Loading,
    /// The request succeeded
    Data(D),
    /// The use case itself failed
    BusinessError(E),
    /// The underlying service failed
    ServiceError(QuizServiceError),
}

impl<D, E> UseCaseEvent<D, E> {
    /// Whether this is the `Loading` event
    pub fn is_loading(&self) -> bool {
        matches!(self, UseCaseEvent::Loading)
    }

    /// Whether this is a terminal event
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            UseCaseEvent::Data(_) | UseCaseEvent::BusinessError(_) | UseCaseEvent::ServiceError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_is_not_terminal() {
        let event: UseCaseEvent<(), ()> = UseCaseEvent::Loading;
        assert!(event.is_loading());
        assert!(!event.is_terminal());
    }

    #[test]
    fn test_terminal_variants() {
        let data: UseCaseEvent<u8, ()> = UseCaseEvent::Data(1);
        assert!(data.is_terminal());
        let err: UseCaseEvent<u8, ()> =
            UseCaseEvent::ServiceError(QuizServiceError::UnexpectedStatus(500));
        assert!(err.is_terminal());
        let idle: UseCaseEvent<u8, ()> = UseCaseEvent::Idle;
        assert!(!idle.is_terminal());
    }
}

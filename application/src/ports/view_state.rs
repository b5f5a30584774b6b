//! View-state rendering port
//!
//! The coarse-grained screen state pushed to the view layer while the
//! quiz data loads. Orthogonal to the field-level [`QuizBinding`]
//! notifications.
//!
//! [`QuizBinding`]: super::binding::QuizBinding

/// Filler content for the error and empty states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFiller {
    pub title: String,
    pub subtitle: Option<String>,
}

impl ViewFiller {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: Some(subtitle.into()),
        }
    }

    pub fn title_only(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
        }
    }
}

/// The possible states of the quiz screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Showing some kind of loader
    Loading,
    /// Showing the expected content
    Content,
    /// Describing an error to the user
    Error(Option<ViewFiller>),
    /// Describing an empty state
    Empty(Option<ViewFiller>),
}

/// Sink for coarse screen-state changes
pub trait ViewStateRendering: Send + Sync {
    /// Render a state on the view
    fn render(&self, state: ViewState);
}

/// No-op renderer for when no view is attached
pub struct NoRendering;

impl ViewStateRendering for NoRendering {
    fn render(&self, _state: ViewState) {}
}

//! View-model binding port
//!
//! Notifications emitted by the orchestrator whenever one of its display
//! fields changes or a modal should be shown. The presentation layer
//! implements this and renders the changes however it likes.
//!
//! Every notification is synchronous and fires exactly once per causing
//! mutation; setting a field to the value it already holds still fires.

/// Content for a simple title/subtitle/button modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalData {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
}

impl ModalData {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        button_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            button_text: button_text.into(),
        }
    }
}

/// Observer for orchestrator field changes and modal triggers
///
/// Implementations live in the presentation layer. The orchestrator
/// holds a non-owning reference to its binder, so implementations are
/// free to be dropped at any time.
pub trait QuizBinding: Send + Sync {
    /// The view title changed
    fn view_title_did_change(&self, title: Option<&str>);

    /// The answer text field placeholder changed
    fn text_field_placeholder_did_change(&self, placeholder: Option<&str>);

    /// The bottom-left (score) text changed
    fn bottom_left_text_did_change(&self, text: Option<&str>);

    /// The bottom-right (remaining time) text changed
    fn bottom_right_text_did_change(&self, text: Option<&str>);

    /// The bottom button title changed
    fn bottom_button_title_did_change(&self, title: Option<&str>);

    /// The round ended because time ran out
    fn show_timer_finished_modal(&self, data: &ModalData);

    /// The round ended because every answer was found
    fn show_winner_modal(&self, data: &ModalData);

    /// An input was rejected (e.g. submitted while the timer is stopped)
    fn show_error_modal(&self, data: &ModalData);
}

/// No-op binding for when nothing observes the orchestrator
pub struct NoBinding;

impl QuizBinding for NoBinding {
    fn view_title_did_change(&self, _title: Option<&str>) {}
    fn text_field_placeholder_did_change(&self, _placeholder: Option<&str>) {}
    fn bottom_left_text_did_change(&self, _text: Option<&str>) {}
    fn bottom_right_text_did_change(&self, _text: Option<&str>) {}
    fn bottom_button_title_did_change(&self, _title: Option<&str>) {}
    fn show_timer_finished_modal(&self, _data: &ModalData) {}
    fn show_winner_modal(&self, _data: &ModalData) {}
    fn show_error_modal(&self, _data: &ModalData) {}
}

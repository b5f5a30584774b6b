//! Quiz orchestrator
//!
//! The interaction core of the game: composes the countdown timer, the
//! fetch use case and the answer matcher into one state machine, and
//! publishes every display change to the attached binding/rendering
//! sinks.
//!
//! All state mutation goes through per-field set-and-notify helpers:
//! mutate first, then synchronously notify the binder. Notifications
//! fire once per causing mutation, with no deduplication, and no
//! internal lock is ever held across a notification.
//!
//! The orchestrator holds only [`Weak`] references to its sinks; it is
//! never the reason an observer outlives the component that composed it.

use crate::config::GameConfig;
use crate::ports::binding::{ModalData, QuizBinding};
use crate::ports::countdown_timer::{CountdownTimer, OnFinish, OnTick};
use crate::ports::view_state::{ViewFiller, ViewState, ViewStateRendering};
use crate::use_cases::count_right_answers::CountRightAnswersUseCase;
use crate::use_cases::event::UseCaseEvent;
use crate::use_cases::fetch_quiz::FetchQuizUseCase;
use quiz_domain::{QuizData, format_to_minutes};
use std::sync::{Arc, Mutex, Weak};
use tracing::{debug, info};

const TEXT_FIELD_PLACEHOLDER: &str = "Insert Word";
const START_BUTTON_TITLE: &str = "Start";
const RESET_BUTTON_TITLE: &str = "Reset";

/// Mutable orchestrator state, owned exclusively behind one lock
struct State {
    matcher: CountRightAnswersUseCase,
    number_of_right_answers: usize,
    view_title: Option<String>,
    text_field_placeholder: Option<String>,
    bottom_button_title: Option<String>,
    /// Score text, `"RR/NN"` zero-padded to two digits each
    bottom_left_text: Option<String>,
    /// Remaining time text, `"MM:SS"`
    bottom_right_text: Option<String>,
}

/// View-model-like state machine driving one quiz round
///
/// Inputs arrive from three directions (timer ticks, fetch results and
/// text submissions) and flow out as binding events to whatever
/// observes the orchestrator. Only one timer and one round of state
/// exist per instance; overlapping `load_quiz_data` calls are allowed
/// and both deliver (last writer wins on the display fields).
pub struct QuizOrchestrator {
    timer: Arc<dyn CountdownTimer>,
    fetch_quiz: FetchQuizUseCase,
    config: GameConfig,
    state: Mutex<State>,
    binder: Mutex<Option<Weak<dyn QuizBinding>>>,
    renderer: Mutex<Option<Weak<dyn ViewStateRendering>>>,
}

impl QuizOrchestrator {
    pub fn new(
        timer: Arc<dyn CountdownTimer>,
        fetch_quiz: FetchQuizUseCase,
        config: GameConfig,
    ) -> Self {
        Self {
            timer,
            fetch_quiz,
            config,
            state: Mutex::new(State {
                matcher: CountRightAnswersUseCase::new(Vec::new()),
                number_of_right_answers: 0,
                view_title: None,
                text_field_placeholder: None,
                bottom_button_title: None,
                bottom_left_text: None,
                bottom_right_text: None,
            }),
            binder: Mutex::new(None),
            renderer: Mutex::new(None),
        }
    }

    /// Attach the field-change/modal observer (non-owning)
    pub fn bind(&self, binder: &Arc<dyn QuizBinding>) {
        *self.binder.lock().unwrap() = Some(Arc::downgrade(binder));
    }

    /// Attach the coarse view-state sink (non-owning)
    pub fn attach_renderer(&self, renderer: &Arc<dyn ViewStateRendering>) {
        *self.renderer.lock().unwrap() = Some(Arc::downgrade(renderer));
    }

    // ==================== Display Logic ====================

    /// Seed the initial display defaults and load the quiz
    pub async fn on_view_did_load(&self) {
        self.set_view_title(Some(String::new()));
        self.set_text_field_placeholder(Some(TEXT_FIELD_PLACEHOLDER.to_string()));
        self.set_bottom_button_title(Some(START_BUTTON_TITLE.to_string()));
        self.set_bottom_left_text(Some(Self::score_text(0, 0)));
        self.set_bottom_right_text(Some(self.formatted_period()));
        self.load_quiz_data().await;
    }

    // ==================== Business Logic ====================

    /// Fetch a fresh quiz round and project the result
    pub async fn load_quiz_data(&self) {
        self.fetch_quiz
            .execute(|event| match event {
                UseCaseEvent::Loading => self.render(ViewState::Loading),
                UseCaseEvent::Data(data) => self.handle_quiz_data(data),
                UseCaseEvent::ServiceError(_) => self.handle_service_error(),
                UseCaseEvent::Idle | UseCaseEvent::BusinessError(_) => {}
            })
            .await;
    }

    /// Start the countdown, or restart it when already running
    ///
    /// Toggling while running restarts rather than pausing. That is the
    /// shipped behavior and is preserved here; whether pause/resume was
    /// intended is an open product question.
    pub fn toggle_timer(self: &Arc<Self>) {
        if self.timer.is_running() {
            debug!("Timer toggled while running; restarting the countdown");
            self.timer.restart();
        } else {
            self.start_timer();
        }
    }

    /// Reset the timer display and fetch a fresh quiz
    ///
    /// There is no local-only reset: a reset always reloads the round,
    /// which also replaces the matcher and clears the accepted answers.
    pub async fn reset_quiz(&self) {
        self.reset_timer_display();
        self.load_quiz_data().await;
    }

    /// Submit the text field content as an answer
    ///
    /// Guarded: while the timer is not running the submission is
    /// rejected with a validation modal and the score is untouched.
    pub fn verify_text_field_input(&self, input: Option<&str>) {
        if !self.timer.is_running() {
            self.with_binder(|b| b.show_error_modal(&Self::timer_not_running_modal_data()));
            return;
        }
        let count = self.state.lock().unwrap().matcher.execute(input);
        self.set_number_of_right_answers(count);
    }

    // ==================== Fetch Handlers ====================

    fn handle_quiz_data(&self, data: QuizData) {
        let (title, items) = data.into_parts();
        let total = items.len();
        info!("Quiz data loaded: \"{}\" with {} answers", title, total);
        {
            let mut state = self.state.lock().unwrap();
            state.matcher = CountRightAnswersUseCase::new(items);
            state.number_of_right_answers = 0;
        }
        self.set_view_title(Some(title));
        self.set_bottom_left_text(Some(Self::score_text(0, total)));
        self.render(ViewState::Content);
    }

    fn handle_service_error(&self) {
        // The underlying error detail is deliberately discarded
        let filler = ViewFiller::new("Ooops!", "Something wrong has happened");
        self.render(ViewState::Error(Some(filler)));
    }

    // ==================== Timer Logic ====================

    fn start_timer(self: &Arc<Self>) {
        self.set_bottom_button_title(Some(RESET_BUTTON_TITLE.to_string()));

        let weak = Arc::downgrade(self);
        let on_tick: OnTick = Arc::new(move |remaining_seconds| {
            if let Some(orchestrator) = weak.upgrade() {
                orchestrator.handle_tick(remaining_seconds);
            }
        });

        let weak = Arc::downgrade(self);
        let on_finish: OnFinish = Arc::new(move || {
            if let Some(orchestrator) = weak.upgrade() {
                orchestrator.handle_timer_finished();
            }
        });

        self.timer.dispatch(
            self.config.timer_period_seconds,
            self.config.tick_interval,
            on_tick,
            on_finish,
        );
    }

    fn handle_tick(&self, remaining_seconds: i64) {
        let text = format_to_minutes(remaining_seconds.max(0) as u64);
        self.set_bottom_right_text(Some(text));
    }

    fn handle_timer_finished(&self) {
        let (count, total) = self.score_snapshot();
        if count == total {
            // Idempotent with the auto-stop that already fired
            self.timer.stop();
            self.with_binder(|b| b.show_winner_modal(&Self::winner_modal_data()));
        } else {
            let data = Self::timer_finished_modal_data(count, total);
            self.with_binder(|b| b.show_timer_finished_modal(&data));
        }
        self.reset_timer_display();
    }

    fn reset_timer_display(&self) {
        self.set_bottom_button_title(Some(START_BUTTON_TITLE.to_string()));
        self.set_bottom_right_text(Some(self.formatted_period()));
    }

    // ==================== Set-and-Notify Helpers ====================

    fn set_view_title(&self, title: Option<String>) {
        self.state.lock().unwrap().view_title = title.clone();
        self.with_binder(|b| b.view_title_did_change(title.as_deref()));
    }

    fn set_text_field_placeholder(&self, placeholder: Option<String>) {
        self.state.lock().unwrap().text_field_placeholder = placeholder.clone();
        self.with_binder(|b| b.text_field_placeholder_did_change(placeholder.as_deref()));
    }

    fn set_bottom_button_title(&self, title: Option<String>) {
        self.state.lock().unwrap().bottom_button_title = title.clone();
        self.with_binder(|b| b.bottom_button_title_did_change(title.as_deref()));
    }

    fn set_bottom_left_text(&self, text: Option<String>) {
        self.state.lock().unwrap().bottom_left_text = text.clone();
        self.with_binder(|b| b.bottom_left_text_did_change(text.as_deref()));
    }

    fn set_bottom_right_text(&self, text: Option<String>) {
        self.state.lock().unwrap().bottom_right_text = text.clone();
        self.with_binder(|b| b.bottom_right_text_did_change(text.as_deref()));
    }

    /// Store the accepted-answer count, refresh the score and run the
    /// win check
    fn set_number_of_right_answers(&self, count: usize) {
        let total = {
            let mut state = self.state.lock().unwrap();
            state.number_of_right_answers = count;
            state.matcher.possible_answers_count()
        };
        self.set_bottom_left_text(Some(Self::score_text(count, total)));
        // The win check fires on every stored-count change, not only at
        // timer finish, pre-empting the timeout path.
        if count == total && self.timer.is_running() {
            info!("All {} answers found before the time ran out", total);
            self.timer.stop();
            self.with_binder(|b| b.show_winner_modal(&Self::winner_modal_data()));
        }
    }

    // ==================== Observer Access ====================

    fn with_binder(&self, f: impl FnOnce(&dyn QuizBinding)) {
        let binder = self.binder.lock().unwrap().clone();
        if let Some(binder) = binder.and_then(|weak| weak.upgrade()) {
            f(binder.as_ref());
        }
    }

    fn render(&self, state: ViewState) {
        let renderer = self.renderer.lock().unwrap().clone();
        if let Some(renderer) = renderer.and_then(|weak| weak.upgrade()) {
            renderer.render(state);
        }
    }

    // ==================== Formatting ====================

    fn score_snapshot(&self) -> (usize, usize) {
        let state = self.state.lock().unwrap();
        (
            state.number_of_right_answers,
            state.matcher.possible_answers_count(),
        )
    }

    fn formatted_period(&self) -> String {
        format_to_minutes(self.config.timer_period_seconds.max(0) as u64)
    }

    fn score_text(right: usize, total: usize) -> String {
        format!("{:02}/{:02}", right, total)
    }

    fn winner_modal_data() -> ModalData {
        ModalData::new(
            "Congratulations!",
            "Good job! You found all the answers on time.",
            "Play Again",
        )
    }

    fn timer_finished_modal_data(right: usize, total: usize) -> ModalData {
        ModalData::new(
            "Time finished",
            format!("Sorry, time is up! You got {} out of {} answers.", right, total),
            "Try Again",
        )
    }

    fn timer_not_running_modal_data() -> ModalData {
        ModalData::new(
            "Ooops!",
            "You need to start the timer for your points to count.",
            "Ok",
        )
    }
}

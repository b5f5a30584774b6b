//! Console presenter
//!
//! Terminal implementation of the orchestrator's binding and rendering
//! sinks. Field changes print as single status lines; modals print as
//! framed blocks.

use colored::Colorize;
use quiz_application::{ModalData, QuizBinding, ViewState, ViewStateRendering};

/// Renders orchestrator notifications on the terminal
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }

    fn print_modal(&self, data: &ModalData, color: colored::Color) {
        println!();
        println!("{}", format!("── {} ──", data.title).color(color).bold());
        println!("{}", data.subtitle);
        println!("{}", format!("[{}]", data.button_text).dimmed());
        println!();
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizBinding for ConsolePresenter {
    fn view_title_did_change(&self, title: Option<&str>) {
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            println!("\n{}\n", title.cyan().bold());
        }
    }

    fn text_field_placeholder_did_change(&self, placeholder: Option<&str>) {
        if let Some(placeholder) = placeholder {
            println!("{}", format!("({})", placeholder).dimmed());
        }
    }

    fn bottom_left_text_did_change(&self, text: Option<&str>) {
        if let Some(score) = text {
            println!("{} {}", "Score:".green().bold(), score);
        }
    }

    fn bottom_right_text_did_change(&self, text: Option<&str>) {
        if let Some(time) = text {
            println!("{} {}", "Time: ".yellow().bold(), time);
        }
    }

    fn bottom_button_title_did_change(&self, title: Option<&str>) {
        if let Some(title) = title {
            println!("{}", format!("[:start = {}]", title).dimmed());
        }
    }

    fn show_timer_finished_modal(&self, data: &ModalData) {
        self.print_modal(data, colored::Color::Red);
    }

    fn show_winner_modal(&self, data: &ModalData) {
        self.print_modal(data, colored::Color::Green);
    }

    fn show_error_modal(&self, data: &ModalData) {
        self.print_modal(data, colored::Color::Yellow);
    }
}

impl ViewStateRendering for ConsolePresenter {
    fn render(&self, state: ViewState) {
        match state {
            ViewState::Loading => println!("{}", "Loading quiz...".dimmed()),
            ViewState::Content => {}
            ViewState::Error(filler) => {
                let title = filler
                    .as_ref()
                    .map(|f| f.title.as_str())
                    .unwrap_or("Error");
                let subtitle = filler
                    .as_ref()
                    .and_then(|f| f.subtitle.as_deref())
                    .unwrap_or("");
                println!("{} {}", title.red().bold(), subtitle);
            }
            ViewState::Empty(filler) => {
                let title = filler
                    .as_ref()
                    .map(|f| f.title.as_str())
                    .unwrap_or("Nothing here");
                println!("{}", title.dimmed());
            }
        }
    }
}

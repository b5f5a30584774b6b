//! Use cases

pub mod count_right_answers;
pub mod event;
pub mod fetch_quiz;

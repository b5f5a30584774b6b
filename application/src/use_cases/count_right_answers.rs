//! Count right answers use case
//!
//! Tracks which of the round's possible answers the user has found so
//! far. Matching is case-insensitive: both sides are canonicalized with
//! [`capitalized`] before comparison.

use quiz_domain::{QuizItem, capitalized};
use std::collections::HashSet;

/// Stateful matcher counting distinct correct submissions
///
/// The accepted set only grows during a round; it is replaced wholesale
/// (by constructing a new instance) when the quiz reloads.
pub struct CountRightAnswersUseCase {
    possible_answers: Vec<QuizItem>,
    user_answers: HashSet<String>,
}

impl CountRightAnswersUseCase {
    pub fn new(possible_answers: Vec<QuizItem>) -> Self {
        Self {
            possible_answers,
            user_answers: HashSet::new(),
        }
    }

    /// Submit an answer and return the accepted count
    ///
    /// `None` reads the current count without mutating state. Otherwise
    /// the input is canonicalized and added iff it matches one of the
    /// possible answers and was not already accepted. Re-submitting an
    /// accepted answer or submitting a non-match leaves the count
    /// unchanged.
    pub fn execute(&mut self, input: Option<&str>) -> usize {
        let Some(input) = input else {
            return self.user_answers.len();
        };

        let canonical = capitalized(input);
        let is_possible = self
            .possible_answers
            .iter()
            .any(|item| capitalized(item.text()) == canonical);
        if is_possible && !self.user_answers.contains(&canonical) {
            self.user_answers.insert(canonical);
        }
        self.user_answers.len()
    }

    /// Number of answers in this round
    pub fn possible_answers_count(&self) -> usize {
        self.possible_answers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(answers: &[&str]) -> CountRightAnswersUseCase {
        CountRightAnswersUseCase::new(answers.iter().map(|a| QuizItem::new(*a)).collect())
    }

    #[test]
    fn test_correct_answer_counts_once() {
        let mut use_case = matcher(&["something"]);
        assert_eq!(use_case.execute(Some("something")), 1);
        assert_eq!(use_case.execute(Some("something")), 1);
    }

    #[test]
    fn test_wrong_answer_leaves_count_unchanged() {
        let mut use_case = matcher(&["something"]);
        assert_eq!(use_case.execute(Some("something")), 1);
        assert_eq!(use_case.execute(Some("other")), 1);
    }

    #[test]
    fn test_none_reads_without_mutating() {
        let mut use_case = matcher(&["something"]);
        assert_eq!(use_case.execute(None), 0);
        use_case.execute(Some("something"));
        assert_eq!(use_case.execute(None), 1);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let mut use_case = matcher(&["something"]);
        assert_eq!(use_case.execute(Some("SOMETHING")), 1);
        // Same answer under a different casing is still a duplicate
        assert_eq!(use_case.execute(Some("SoMeThInG")), 1);
    }

    #[test]
    fn test_count_grows_across_distinct_answers() {
        let mut use_case = matcher(&["for", "while", "repeat"]);
        assert_eq!(use_case.execute(Some("while")), 1);
        assert_eq!(use_case.execute(Some("FOR")), 2);
        assert_eq!(use_case.execute(Some("nope")), 2);
        assert_eq!(use_case.execute(Some("repeat")), 3);
        assert_eq!(use_case.possible_answers_count(), 3);
    }

    #[test]
    fn test_empty_round() {
        let mut use_case = matcher(&[]);
        assert_eq!(use_case.execute(Some("anything")), 0);
        assert_eq!(use_case.possible_answers_count(), 0);
    }
}

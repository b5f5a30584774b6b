//! Quiz round entities (Value Objects)

use serde::{Deserialize, Serialize};

/// A single acceptable answer for the current quiz round
///
/// Immutable once created; the text is kept verbatim as received from
/// the service; canonicalization happens only at comparison time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    text: String,
}

impl QuizItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the answer text
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The full quiz payload for one round
///
/// Created on a successful fetch and replaced wholesale when the quiz
/// is reset or reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizData {
    title: String,
    items: Vec<QuizItem>,
}

impl QuizData {
    pub fn new(title: impl Into<String>, items: Vec<QuizItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Get the question title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the acceptable answers
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    /// Consume and return the inner parts
    pub fn into_parts(self) -> (String, Vec<QuizItem>) {
        (self.title, self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_item_keeps_text_verbatim() {
        let item = QuizItem::new("for");
        assert_eq!(item.text(), "for");
        let item = QuizItem::new("WHILE");
        assert_eq!(item.text(), "WHILE");
    }

    #[test]
    fn test_quiz_data_accessors() {
        let data = QuizData::new(
            "Some question",
            vec![QuizItem::new("a"), QuizItem::new("b")],
        );
        assert_eq!(data.title(), "Some question");
        assert_eq!(data.items().len(), 2);
        assert_eq!(data.items()[1].text(), "b");
    }
}

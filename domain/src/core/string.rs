//! String utilities for the domain layer.

/// Canonicalize a string by capitalizing each whitespace-separated word
///
/// The first letter of every word is uppercased and the remainder is
/// lowercased, so `"something"`, `"SOMETHING"` and `"SoMeThInG"` all
/// canonicalize to `"Something"`. Applied to both sides of an answer
/// comparison, this makes matching case-insensitive.
pub fn capitalized(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            result.push(ch);
            at_word_start = true;
        } else if at_word_start {
            result.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(ch.to_lowercase());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalized_lowercase_word() {
        assert_eq!(capitalized("something"), "Something");
    }

    #[test]
    fn test_capitalized_uppercase_word() {
        assert_eq!(capitalized("SOMETHING"), "Something");
    }

    #[test]
    fn test_capitalized_mixed_case_word() {
        assert_eq!(capitalized("sOmEtHiNg"), "Something");
    }

    #[test]
    fn test_capitalized_multiple_words() {
        assert_eq!(capitalized("hello world"), "Hello World");
        assert_eq!(capitalized("HELLO  WORLD"), "Hello  World");
    }

    #[test]
    fn test_capitalized_empty_and_whitespace() {
        assert_eq!(capitalized(""), "");
        assert_eq!(capitalized("   "), "   ");
    }

    #[test]
    fn test_capitalized_multibyte() {
        assert_eq!(capitalized("état"), "État");
        assert_eq!(capitalized("ÉTAT"), "État");
    }
}

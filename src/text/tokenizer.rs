//! Word tokenizer shared by documents, sentences and queries.
//!
//! Pipeline, in order:
//! 1. split on Unicode (UAX #29) word boundaries
//! 2. lowercase each word
//! 3. strip punctuation characters (ASCII and Unicode `P*` categories)
//! 4. re-split what is left on word boundaries
//! 5. keep only non-empty, fully alphanumeric words
//! 6. drop English stopwords
//!
//! Step 4 matters for connectors: `ア_b` is one word until `_` is removed,
//! after which `ア` and `b` are separate words. Without it, tokenizing the
//! joined output a second time would not reproduce the first result.

use unicode_categories::UnicodeCategories;
use unicode_segmentation::UnicodeSegmentation;

use crate::text::stopwords::is_stopword;
use crate::types::TokenSequence;

/// Tokenize `text` into normalized content words, preserving order.
pub fn tokenize(text: &str) -> TokenSequence {
    text.split_word_bounds()
        .map(|word| strip_punctuation(&word.to_lowercase()))
        .flat_map(|stripped| resegment(&stripped))
        .filter(|word| is_alphanumeric_word(word))
        .filter(|word| !is_stopword(word))
        .collect()
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_punctuation()
}

fn strip_punctuation(word: &str) -> String {
    word.chars().filter(|c| !is_punctuation(*c)).collect()
}

fn resegment(stripped: &str) -> Vec<String> {
    stripped.split_word_bounds().map(str::to_string).collect()
}

fn is_alphanumeric_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        tokenize(text).into_inner()
    }

    #[test]
    fn lowercases_strips_and_drops_stopwords() {
        assert_eq!(words("The Quick, Fox!"), vec!["quick", "fox"]);
    }

    #[test]
    fn attached_punctuation_is_separated() {
        assert_eq!(words("(neural)networks;learning..."), vec!["neural", "networks", "learning"]);
    }

    #[test]
    fn inner_punctuation_is_removed() {
        assert_eq!(words("o'clock e.g. 3.14"), vec!["oclock", "eg", "314"]);
    }

    #[test]
    fn pure_symbols_and_whitespace_are_dropped() {
        assert!(tokenize("  -- ... !!! \t\n ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn unicode_punctuation_is_stripped() {
        assert_eq!(words("«Café» — naïve…"), vec!["café", "naïve"]);
    }

    #[test]
    fn removed_connectors_leave_separate_words() {
        assert_eq!(words("ア_b"), vec!["ア", "b"]);
        assert_eq!(words("ア b"), vec!["ア", "b"]);
    }

    #[test]
    fn connectors_between_letters_join_them() {
        assert_eq!(words("snake_case"), vec!["snakecase"]);
    }

    #[test]
    fn order_and_repeats_are_kept() {
        assert_eq!(words("dog cat dog"), vec!["dog", "cat", "dog"]);
    }
}

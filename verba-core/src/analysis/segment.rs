//! Segmentation of raw input into sentences, words and characters
//!
//! These are line- and space-based heuristics rather than linguistic
//! boundary detection. Abbreviations such as "Mr." split sentences, and a
//! terminator at the very end of the input without trailing whitespace does
//! not.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Any Unicode line terminator, treating CRLF as one
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x{85}\x{2028}\x{2029}]")
        .unwrap_or_else(|e| panic!("line break pattern: {e}"))
});

/// Leading or trailing runs of anything that is not a letter or mark
static NON_LETTER_EDGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\p{L}\p{M}]+|[^\p{L}\p{M}]+$")
        .unwrap_or_else(|e| panic!("non-letter pattern: {e}"))
});

/// Terminators that end a sentence when followed by a space
const TERMINATORS: [(&str, &str); 3] = [("! ", "!\n"), (". ", ".\n"), ("? ", "?\n")];

/// Split `input` into sentences
///
/// Every terminator followed by a space starts a new line; lines that are
/// blank after trimming are discarded. Kept lines are not trimmed.
pub fn sentences(input: &str) -> Vec<String> {
    let broken = TERMINATORS
        .iter()
        .fold(input.to_string(), |text, (from, to)| text.replace(from, to));

    LINE_BREAK
        .split(&broken)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Split `input` into words
///
/// Splits on the space character only. Non-letters are stripped from both
/// ends of each token; a token that strips down to nothing is still a word.
pub fn words(input: &str) -> Vec<String> {
    input
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(|token| NON_LETTER_EDGES.replace_all(token, "").into_owned())
        .collect()
}

/// Split `input` into extended grapheme clusters, spaces and punctuation
/// included
pub fn characters(input: &str) -> Vec<String> {
    input.graphemes(true).map(str::to_string).collect()
}

/// Grapheme count of the concatenation of `parts`
pub(crate) fn concatenated_length(parts: &[String]) -> usize {
    parts.concat().graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_split_on_terminators() {
        assert_eq!(
            sentences("Hello. Hallo? Hoi!"),
            vec!["Hello.", "Hallo?", "Hoi!"]
        );
    }

    #[test]
    fn test_sentences_without_terminators() {
        assert_eq!(sentences("Hello, world!"), vec!["Hello, world!"]);
        assert_eq!(sentences("no punctuation at all"), vec!["no punctuation at all"]);
    }

    #[test]
    fn test_sentences_drop_blank_lines() {
        assert_eq!(sentences("One.\n\n   \nTwo."), vec!["One.", "Two."]);
        assert!(sentences("").is_empty());
        assert!(sentences("   ").is_empty());
    }

    #[test]
    fn test_sentences_keep_untrimmed_text() {
        assert_eq!(sentences("Hi.  There"), vec!["Hi.", " There"]);
    }

    #[test]
    fn test_sentences_terminator_at_end() {
        // trailing space still produces a break, but only one sentence survives
        assert_eq!(sentences("Done. "), vec!["Done."]);
    }

    #[test]
    fn test_sentences_split_on_abbreviations() {
        assert_eq!(sentences("Mr. Smith left."), vec!["Mr.", "Smith left."]);
    }

    #[test]
    fn test_sentences_other_line_terminators() {
        assert_eq!(sentences("a\r\nb\rc\u{2028}d"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_words_strip_non_letters() {
        assert_eq!(words("Hello, world!"), vec!["Hello", "world"]);
        assert_eq!(words("(quoted)"), vec!["quoted"]);
    }

    #[test]
    fn test_words_keep_internal_punctuation() {
        assert_eq!(words("Can't feel my face"), vec!["Can't", "feel", "my", "face"]);
        assert_eq!(words("well-known"), vec!["well-known"]);
    }

    #[test]
    fn test_words_keep_empty_after_stripping() {
        assert_eq!(words("one - two"), vec!["one", "", "two"]);
        assert_eq!(words("42"), vec![""]);
    }

    #[test]
    fn test_words_ignore_repeated_spaces() {
        assert_eq!(words("  a  b "), vec!["a", "b"]);
        assert!(words("").is_empty());
    }

    #[test]
    fn test_words_split_on_space_only() {
        assert_eq!(words("tab\tseparated"), vec!["tab\tseparated"]);
        assert_eq!(words("line\nbreak"), vec!["line\nbreak"]);
    }

    #[test]
    fn test_words_keep_combining_marks() {
        assert_eq!(words("cafe\u{301}!"), vec!["cafe\u{301}"]);
    }

    #[test]
    fn test_characters_are_graphemes() {
        assert_eq!(characters("ab c"), vec!["a", "b", " ", "c"]);
        assert_eq!(characters("e\u{301}"), vec!["e\u{301}"]);
        assert_eq!(characters("👨‍👩‍👧"), vec!["👨‍👩‍👧"]);
        assert_eq!(characters("\r\n"), vec!["\r\n"]);
        assert!(characters("").is_empty());
    }

    #[test]
    fn test_concatenated_length() {
        let parts = vec!["ab".to_string(), "cd".to_string()];
        assert_eq!(concatenated_length(&parts), 4);
        assert_eq!(concatenated_length(&[]), 0);
    }
}

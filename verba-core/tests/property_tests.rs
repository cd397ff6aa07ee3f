//! Property tests for segmentation, identity and frequency invariants

use proptest::prelude::*;
use verba_core::{syllables, TextAnalysis};

/// Mostly-English text with a few accented letters and sentence punctuation
fn text() -> impl Strategy<Value = String> {
    "[a-zA-Zéü ,.!?'\n-]{0,120}"
}

proptest! {
    #[test]
    fn segmentation_is_deterministic(s in text()) {
        let first = TextAnalysis::new(s.clone());
        let second = TextAnalysis::new(s);
        prop_assert_eq!(first.sentences(), second.sentences());
        prop_assert_eq!(first.words(), second.words());
        prop_assert_eq!(first.characters(), second.characters());
    }

    #[test]
    fn equality_and_ordering_follow_input(a in text(), b in text()) {
        let left = TextAnalysis::new(a.clone());
        let right = TextAnalysis::new(b.clone());
        prop_assert_eq!(left == right, a == b);
        prop_assert_eq!(left.cmp(&right), a.cmp(&b));
    }

    #[test]
    fn characters_reassemble_input(s in text()) {
        let analysis = TextAnalysis::new(s.clone());
        prop_assert_eq!(analysis.characters().concat(), s);
    }

    #[test]
    fn space_count_is_the_difference(s in text()) {
        let analysis = TextAnalysis::new(s.clone());
        let spaces = s.chars().filter(|&c| c == ' ').count();
        prop_assert_eq!(
            analysis.character_count(true) - analysis.character_count(false),
            spaces
        );
    }

    #[test]
    fn sentences_are_never_blank(s in text()) {
        let analysis = TextAnalysis::new(s);
        prop_assert!(analysis.sentences().iter().all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn word_occurrences_sum_to_word_count(s in text(), case_sensitive in any::<bool>()) {
        let analysis = TextAnalysis::new(s);
        let total: usize = analysis.word_occurrences(case_sensitive).values().sum();
        prop_assert_eq!(total, analysis.word_count(false));
        prop_assert!(analysis.word_count(true) <= analysis.word_count(false));
    }

    #[test]
    fn character_frequencies_sum_to_one_hundred(s in "[a-zA-Z ,.!?]{1,120}", case_sensitive in any::<bool>()) {
        let analysis = TextAnalysis::new(s);
        let total: f64 = analysis
            .character_occurrences(case_sensitive)
            .keys()
            .map(|c| analysis.character_frequency(c, case_sensitive, true))
            .sum();
        prop_assert!((total - 100.0).abs() < 1e-6, "sum was {}", total);
    }

    #[test]
    fn non_space_frequencies_sum_to_one_hundred(s in "[a-zA-Z,.!?]{1,40}( [a-zA-Z,.!?]{1,40}){0,3}") {
        let analysis = TextAnalysis::new(s);
        let total: f64 = analysis
            .character_occurrences(false)
            .keys()
            .filter(|c| c.as_str() != " ")
            .map(|c| analysis.character_frequency(c, false, false))
            .sum();
        prop_assert!((total - 100.0).abs() < 1e-6, "sum was {}", total);
    }

    #[test]
    fn syllables_are_at_least_one(word in "[a-zA-Z]{1,24}") {
        prop_assert!(syllables(&word) >= 1);
    }

    #[test]
    fn syllable_count_is_sum_over_words(s in text()) {
        let analysis = TextAnalysis::new(s);
        let expected: usize = analysis.words().iter().map(|w| syllables(w)).sum();
        prop_assert_eq!(analysis.syllable_count(), expected);
    }
}

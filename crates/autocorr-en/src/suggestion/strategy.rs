// Correction strategy: runs the edit-distance-1 generators in order

use autocorr_core::character::first_unindexable;
use autocorr_core::{WordError, check_len};

use super::generators::{CandidateGenerator, Deletion, Insertion, Substitution, Transposition};
use super::status::{Correction, CorrectionStatus};
use crate::speller::WordFrequency;

/// Finds the most frequent known word one edit away from a misspelling.
///
/// The corrector holds no lexicon and no per-call state; each call to
/// [`Corrector::correct`] builds a fresh [`CorrectionStatus`], runs every
/// generator over it in order, and returns the surviving candidate by value.
pub struct Corrector {
    generators: Vec<Box<dyn CandidateGenerator>>,
}

impl Default for Corrector {
    fn default() -> Self {
        Self::edit_distance_one()
    }
}

impl Corrector {
    /// Build a corrector from an explicit generator list.
    ///
    /// Generators run in the given order, which is also the tie-break order.
    pub fn new(generators: Vec<Box<dyn CandidateGenerator>>) -> Self {
        Self { generators }
    }

    /// The standard corrector: deletions, transpositions, substitutions,
    /// then insertions.
    pub fn edit_distance_one() -> Self {
        Self::new(vec![
            Box::new(Deletion),
            Box::new(Transposition),
            Box::new(Substitution),
            Box::new(Insertion),
        ])
    }

    /// Number of generators this corrector runs.
    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    /// Run every generator over `status`.
    pub fn generate(&self, lexicon: &dyn WordFrequency, status: &mut CorrectionStatus<'_>) {
        for generator in &self.generators {
            generator.generate(lexicon, status);
        }
    }

    /// Suggest a correction for `word`.
    ///
    /// Returns `Ok(None)` when no single-edit variant of the word is known.
    /// Words longer than [`MAX_WORD_LEN`](autocorr_core::MAX_WORD_LEN), and
    /// words containing characters outside `[A-Za-z']`, are rejected before
    /// any candidate is built.
    pub fn correct(
        &self,
        lexicon: &dyn WordFrequency,
        word: &[char],
    ) -> Result<Option<Correction>, WordError> {
        check_len(word)?;
        if let Some((position, ch)) = first_unindexable(word) {
            return Err(WordError::Unindexable { ch, position });
        }

        let mut status = CorrectionStatus::new(word);
        self.generate(lexicon, &mut status);

        log::debug!(
            "corrected {:?} with {} probes: {:?}",
            word.iter().collect::<String>(),
            status.probes(),
            status.best().map(|c| c.word.as_str())
        );
        Ok(status.into_correction())
    }
}

/// Suggest a correction for `word` with the standard corrector.
pub fn correct(
    lexicon: &dyn WordFrequency,
    word: &[char],
) -> Result<Option<Correction>, WordError> {
    Corrector::edit_distance_one().correct(lexicon, word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::EditKind;
    use autocorr_core::MAX_WORD_LEN;
    use autocorr_trie::WordTrie;
    use std::num::NonZeroU32;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn trie_of(words: &[(&str, u32)]) -> WordTrie {
        let mut trie = WordTrie::new();
        for &(word, count) in words {
            trie.insert_with_count(&chars(word), NonZeroU32::new(count).unwrap())
                .unwrap();
        }
        trie
    }

    #[test]
    fn default_runs_four_families() {
        assert_eq!(Corrector::default().generator_count(), 4);
    }

    #[test]
    fn cot_corrects_to_cat() {
        let trie = trie_of(&[("cat", 5), ("cats", 2), ("bat", 1)]);
        let best = correct(&trie, &chars("cot")).unwrap().unwrap();
        assert_eq!(best.word, "cat");
        assert_eq!(best.frequency, 5);
        assert_eq!(best.edit, EditKind::Substitution);
    }

    #[test]
    fn teh_corrects_to_the_by_transposition() {
        let trie = trie_of(&[("the", 100)]);
        let best = correct(&trie, &chars("teh")).unwrap().unwrap();
        assert_eq!(best.word, "the");
        assert_eq!(best.edit, EditKind::Transposition);
    }

    #[test]
    fn empty_lexicon_has_no_suggestion() {
        let trie = WordTrie::new();
        assert_eq!(correct(&trie, &chars("anything")).unwrap(), None);
    }

    #[test]
    fn empty_word_can_only_become_a_single_letter() {
        let trie = trie_of(&[("a", 3), ("i", 7), ("at", 50)]);
        let best = correct(&trie, &[]).unwrap().unwrap();
        assert_eq!(best.word, "i");
        assert_eq!(best.edit, EditKind::Insertion);

        let trie = trie_of(&[("at", 50)]);
        assert_eq!(correct(&trie, &[]).unwrap(), None);
    }

    #[test]
    fn earlier_family_wins_ties() {
        // "cast" -> "cat" by deletion and "cart" by substitution, both 4.
        let trie = trie_of(&[("cat", 4), ("cart", 4)]);
        let best = correct(&trie, &chars("cast")).unwrap().unwrap();
        assert_eq!(best.word, "cat");
        assert_eq!(best.edit, EditKind::Deletion);
    }

    #[test]
    fn later_family_wins_with_strictly_higher_score() {
        let trie = trie_of(&[("cat", 4), ("cart", 5)]);
        let best = correct(&trie, &chars("cast")).unwrap().unwrap();
        assert_eq!(best.word, "cart");
    }

    #[test]
    fn correctly_spelled_word_may_suggest_itself() {
        // The no-op substitution is scored like any other candidate.
        let trie = trie_of(&[("dog", 9)]);
        let best = correct(&trie, &chars("dog")).unwrap().unwrap();
        assert_eq!(best.word, "dog");
        assert_eq!(best.edit, EditKind::Substitution);
    }

    #[test]
    fn correction_is_deterministic() {
        let trie = trie_of(&[("bat", 3), ("hat", 3), ("cat", 3), ("at", 3)]);
        let first = correct(&trie, &chars("xat")).unwrap();
        for _ in 0..5 {
            assert_eq!(correct(&trie, &chars("xat")).unwrap(), first);
        }
        // Deletion of 'x' gives "at" before any substitution is tried.
        assert_eq!(first.unwrap().word, "at");
    }

    #[test]
    fn over_long_word_is_rejected() {
        let trie = trie_of(&[("a", 1)]);
        let word = vec!['a'; MAX_WORD_LEN + 1];
        assert!(matches!(
            correct(&trie, &word),
            Err(WordError::TooLong { .. })
        ));
    }

    #[test]
    fn unindexable_character_is_rejected() {
        let trie = trie_of(&[("ct", 1)]);
        assert_eq!(
            correct(&trie, &chars("xc-t")),
            Err(WordError::Unindexable {
                ch: '-',
                position: 2
            })
        );
        assert_eq!(correct(&trie, &chars("xct")).unwrap().unwrap().word, "ct");
    }

    #[test]
    fn apostrophe_and_capitals_are_accepted() {
        let trie = trie_of(&[("don't", 3)]);
        let best = correct(&trie, &chars("Dn't")).unwrap().unwrap();
        assert_eq!(best.word, "Don't");
        assert_eq!(trie.lookup_str(&best.word), Some(3));
    }

    #[test]
    fn longest_allowed_word_is_searched() {
        let mut trie = WordTrie::new();
        trie.insert_str("pneumonoultramicroscopicsilicovolcanoconiosis")
            .unwrap();
        let best = correct(
            &trie,
            &chars("pneumonoultramicroscopicsilicovolcanoconiosi"),
        )
        .unwrap()
        .unwrap();
        assert_eq!(best.word, "pneumonoultramicroscopicsilicovolcanoconiosis");
    }

    #[test]
    fn custom_generator_list_limits_search() {
        let trie = trie_of(&[("the", 100)]);
        let only_deletions = Corrector::new(vec![Box::new(Deletion)]);
        assert_eq!(only_deletions.correct(&trie, &chars("teh")).unwrap(), None);
    }
}

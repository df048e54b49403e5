// Correction status tracking: best candidate so far and probe count

use std::fmt;

/// The edit that turns the misspelled word into a candidate.
///
/// Variants are declared in generation order; that order is also the
/// tie-break order between candidates of equal frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EditKind {
    /// One character removed.
    Deletion,
    /// Two adjacent characters swapped.
    Transposition,
    /// One character replaced by a letter.
    Substitution,
    /// One letter inserted.
    Insertion,
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditKind::Deletion => "deletion",
            EditKind::Transposition => "transposition",
            EditKind::Substitution => "substitution",
            EditKind::Insertion => "insertion",
        };
        f.write_str(name)
    }
}

/// A suggested correction.
///
/// The word is rebuilt from the candidate buffer; it does not borrow from
/// the trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// The suggested word.
    pub word: String,
    /// Its frequency in the loaded corpus (always at least 1).
    pub frequency: u32,
    /// The edit that produced it.
    pub edit: EditKind,
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)
    }
}

/// Tracks one correction pass.
///
/// Holds the word being corrected, the best candidate offered so far and
/// the number of lookups performed. A candidate replaces the current best
/// only if its score is strictly higher, and the starting score is 0, so
/// unknown words never become suggestions and earlier candidates win ties.
pub struct CorrectionStatus<'a> {
    word: &'a [char],
    best: Option<Correction>,
    best_score: u32,
    probes: usize,
}

impl<'a> CorrectionStatus<'a> {
    /// Create a status for correcting `word`.
    pub fn new(word: &'a [char]) -> Self {
        Self {
            word,
            best: None,
            best_score: 0,
            probes: 0,
        }
    }

    /// The word being corrected.
    pub fn word(&self) -> &'a [char] {
        self.word
    }

    /// Length of the word being corrected.
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Count one lookup.
    pub fn charge(&mut self) {
        self.probes += 1;
    }

    /// Count `n` lookups at once.
    pub fn charge_many(&mut self, n: usize) {
        self.probes += n;
    }

    /// Number of lookups performed so far.
    pub fn probes(&self) -> usize {
        self.probes
    }

    /// Score of the current best candidate (0 if there is none).
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Offer a scored candidate.
    ///
    /// Returns `true` if it became the new best.
    pub fn offer(&mut self, candidate: &[char], score: u32, edit: EditKind) -> bool {
        if score <= self.best_score {
            return false;
        }
        self.best_score = score;
        self.best = Some(Correction {
            word: candidate.iter().collect(),
            frequency: score,
            edit,
        });
        true
    }

    /// The current best candidate.
    pub fn best(&self) -> Option<&Correction> {
        self.best.as_ref()
    }

    /// Consume the status and return the best candidate.
    pub fn into_correction(self) -> Option<Correction> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn new_status_has_no_candidate() {
        let word = chars("cot");
        let status = CorrectionStatus::new(&word);
        assert_eq!(status.word_len(), 3);
        assert_eq!(status.probes(), 0);
        assert_eq!(status.best_score(), 0);
        assert!(status.best().is_none());
    }

    #[test]
    fn zero_score_never_becomes_a_suggestion() {
        let word = chars("cot");
        let mut status = CorrectionStatus::new(&word);
        assert!(!status.offer(&chars("cott"), 0, EditKind::Insertion));
        assert!(status.into_correction().is_none());
    }

    #[test]
    fn higher_score_replaces_best() {
        let word = chars("cot");
        let mut status = CorrectionStatus::new(&word);
        assert!(status.offer(&chars("cat"), 5, EditKind::Substitution));
        assert!(status.offer(&chars("cut"), 9, EditKind::Substitution));
        let best = status.into_correction().unwrap();
        assert_eq!(best.word, "cut");
        assert_eq!(best.frequency, 9);
    }

    #[test]
    fn ties_keep_the_earlier_candidate() {
        let word = chars("cot");
        let mut status = CorrectionStatus::new(&word);
        status.offer(&chars("co"), 4, EditKind::Deletion);
        assert!(!status.offer(&chars("cat"), 4, EditKind::Substitution));
        assert_eq!(status.best().unwrap().word, "co");
        assert_eq!(status.best().unwrap().edit, EditKind::Deletion);
    }

    #[test]
    fn charge_counts_probes() {
        let word = chars("a");
        let mut status = CorrectionStatus::new(&word);
        status.charge();
        status.charge_many(26);
        assert_eq!(status.probes(), 27);
    }

    #[test]
    fn edit_kinds_order_like_generation() {
        assert!(EditKind::Deletion < EditKind::Transposition);
        assert!(EditKind::Transposition < EditKind::Substitution);
        assert!(EditKind::Substitution < EditKind::Insertion);
        assert_eq!(EditKind::Transposition.to_string(), "transposition");
    }
}

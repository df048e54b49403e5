// Individual candidate generators: each enumerates one family of
// edit-distance-1 variants of the word and scores them against the lexicon.

use autocorr_core::character::CANDIDATE_LETTERS;

use super::status::{CorrectionStatus, EditKind};
use crate::speller::{WordFrequency, score};

const LETTER_COUNT: usize = CANDIDATE_LETTERS.len();

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// One family of single-edit candidates.
///
/// Candidates are numbered `0..candidate_count(len)` in generation order;
/// [`CandidateGenerator::build`] writes candidate `index` into a reusable
/// buffer. The numbering is what makes the tie-break between equally
/// frequent candidates deterministic: lower index wins.
pub trait CandidateGenerator: Send + Sync {
    /// Which edit this generator applies.
    fn kind(&self) -> EditKind;

    /// Number of candidates produced for a word of `word_len` characters.
    fn candidate_count(&self, word_len: usize) -> usize;

    /// Write candidate `index` of `word` into `buffer`, replacing its contents.
    fn build(&self, word: &[char], index: usize, buffer: &mut Vec<char>);

    /// Score every candidate for the word tracked by `status`.
    fn generate(&self, lexicon: &dyn WordFrequency, status: &mut CorrectionStatus<'_>) {
        let word = status.word();
        let mut buffer = Vec::with_capacity(word.len() + 1);
        for index in 0..self.candidate_count(word.len()) {
            self.build(word, index, &mut buffer);
            score_buffer(lexicon, status, &buffer, self.kind());
        }
    }
}

/// Look up a candidate buffer and offer it to `status`.
pub fn score_buffer(
    lexicon: &dyn WordFrequency,
    status: &mut CorrectionStatus<'_>,
    buffer: &[char],
    edit: EditKind,
) {
    let candidate_score = score(lexicon, buffer);
    status.charge();
    status.offer(buffer, candidate_score, edit);
}

/// Score all candidates of one family on the rayon pool.
///
/// Produces the same result as the sequential
/// [`CandidateGenerator::generate`]: the highest score wins and equal
/// scores go to the lowest candidate index.
#[cfg(feature = "parallel")]
pub fn generate_parallel<G: CandidateGenerator + ?Sized>(
    generator: &G,
    lexicon: &dyn WordFrequency,
    status: &mut CorrectionStatus<'_>,
) {
    use rayon::prelude::*;

    let word = status.word();
    let count = generator.candidate_count(word.len());
    let (best_score, best_index) = (0..count)
        .into_par_iter()
        .map_init(
            || Vec::with_capacity(word.len() + 1),
            |buffer, index| {
                generator.build(word, index, buffer);
                (score(lexicon, buffer), index)
            },
        )
        .reduce(|| (0, usize::MAX), better);
    status.charge_many(count);

    if best_score > 0 {
        let mut buffer = Vec::with_capacity(word.len() + 1);
        generator.build(word, best_index, &mut buffer);
        status.offer(&buffer, best_score, generator.kind());
    }
}

/// Pick the better of two `(score, index)` pairs.
#[cfg(feature = "parallel")]
fn better(a: (u32, usize), b: (u32, usize)) -> (u32, usize) {
    if b.0 > a.0 || (b.0 == a.0 && b.1 < a.1) { b } else { a }
}

// =========================================================================
// Individual generators
// =========================================================================

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Remove the character at each position.
///
/// `L` candidates of length `L - 1`.
pub struct Deletion;

impl CandidateGenerator for Deletion {
    fn kind(&self) -> EditKind {
        EditKind::Deletion
    }

    fn candidate_count(&self, word_len: usize) -> usize {
        word_len
    }

    fn build(&self, word: &[char], index: usize, buffer: &mut Vec<char>) {
        buffer.clear();
        buffer.extend_from_slice(&word[..index]);
        buffer.extend_from_slice(&word[index + 1..]);
    }
}

// ---------------------------------------------------------------------------
// Transposition
// ---------------------------------------------------------------------------

/// Swap each pair of adjacent characters.
///
/// `L - 1` candidates of length `L`.
pub struct Transposition;

impl CandidateGenerator for Transposition {
    fn kind(&self) -> EditKind {
        EditKind::Transposition
    }

    fn candidate_count(&self, word_len: usize) -> usize {
        word_len.saturating_sub(1)
    }

    fn build(&self, word: &[char], index: usize, buffer: &mut Vec<char>) {
        buffer.clear();
        buffer.extend_from_slice(word);
        buffer.swap(index, index + 1);
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace each character with each letter `a`..=`z`.
///
/// `26 * L` candidates of length `L`, position-major. Replacing a letter
/// with itself gives back the word; that candidate is scored like any other.
pub struct Substitution;

impl CandidateGenerator for Substitution {
    fn kind(&self) -> EditKind {
        EditKind::Substitution
    }

    fn candidate_count(&self, word_len: usize) -> usize {
        word_len * LETTER_COUNT
    }

    fn build(&self, word: &[char], index: usize, buffer: &mut Vec<char>) {
        let (position, letter) = (index / LETTER_COUNT, CANDIDATE_LETTERS[index % LETTER_COUNT]);
        buffer.clear();
        buffer.extend_from_slice(word);
        buffer[position] = letter;
    }

    #[cfg(feature = "parallel")]
    fn generate(&self, lexicon: &dyn WordFrequency, status: &mut CorrectionStatus<'_>) {
        generate_parallel(self, lexicon, status);
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert each letter `a`..=`z` before each position, and at the end.
///
/// `26 * (L + 1)` candidates of length `L + 1`, position-major.
pub struct Insertion;

impl CandidateGenerator for Insertion {
    fn kind(&self) -> EditKind {
        EditKind::Insertion
    }

    fn candidate_count(&self, word_len: usize) -> usize {
        (word_len + 1) * LETTER_COUNT
    }

    fn build(&self, word: &[char], index: usize, buffer: &mut Vec<char>) {
        let (position, letter) = (index / LETTER_COUNT, CANDIDATE_LETTERS[index % LETTER_COUNT]);
        buffer.clear();
        buffer.extend_from_slice(&word[..position]);
        buffer.push(letter);
        buffer.extend_from_slice(&word[position..]);
    }

    #[cfg(feature = "parallel")]
    fn generate(&self, lexicon: &dyn WordFrequency, status: &mut CorrectionStatus<'_>) {
        generate_parallel(self, lexicon, status);
    }
}

// =========================================================================
// Tests
// =========================================================================

// Spell checking: the frequency lookup contract

use autocorr_trie::WordTrie;

/// Source of word frequencies.
///
/// The corrector only ever asks "how often does this exact word occur?", so
/// anything that can answer that (the trie, a test double) can drive it.
/// Implementations must be read-only; `Sync` lets candidate scoring fan out
/// across threads.
pub trait WordFrequency: Sync {
    /// Frequency of `word`, or `None` if it is not a known word.
    fn frequency(&self, word: &[char]) -> Option<u32>;

    /// Whether `word` is a known word.
    fn spell(&self, word: &[char]) -> bool {
        self.frequency(word).is_some()
    }
}

impl WordFrequency for WordTrie {
    #[inline]
    fn frequency(&self, word: &[char]) -> Option<u32> {
        self.lookup(word)
    }
}

/// Score a word for ranking: its frequency, or 0 when unknown.
#[inline]
pub fn score(lexicon: &dyn WordFrequency, word: &[char]) -> u32 {
    lexicon.frequency(word).unwrap_or(0)
}

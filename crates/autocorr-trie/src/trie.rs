// WordTrie: the word-frequency store

use std::num::NonZeroU32;

use autocorr_core::character::slot_index;
use autocorr_core::{MAX_WORD_LEN, WordError, check_len};

use crate::iter::Words;
use crate::node::TrieNode;

/// In-memory word-frequency dictionary.
///
/// Words are case-folded on the way in and on lookup, so `"Don't"`,
/// `"don't"` and `"DON'T"` share one path. Characters outside
/// `[A-Za-z']` are skipped when computing the path; callers that want them
/// rejected instead validate the word before it gets here.
///
/// Nodes are only ever added. The whole tree is released at once by
/// [`WordTrie::teardown`] or when the trie is dropped, using an explicit
/// stack so deep prefix chains never recurse.
#[derive(Debug)]
pub struct WordTrie {
    root: Box<TrieNode>,
    /// Distinct words stored.
    word_count: usize,
    /// Nodes below the root.
    node_count: usize,
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: Box::new(TrieNode::new()),
            word_count: 0,
            node_count: 0,
        }
    }

    /// Record one occurrence of `word`.
    ///
    /// The first insertion of a word marks it present with frequency 1 and
    /// counts it as a new distinct word; every later insertion increments its
    /// frequency. Returns the word's frequency after the update.
    pub fn insert(&mut self, word: &[char]) -> Result<u32, WordError> {
        self.add(word, 1)
    }

    /// Record `count` occurrences of `word` at once.
    ///
    /// Used for corpora that list a precomputed count next to each word.
    pub fn insert_with_count(&mut self, word: &[char], count: NonZeroU32) -> Result<u32, WordError> {
        self.add(word, count.get())
    }

    /// Convenience wrapper around [`WordTrie::insert`] for string input.
    pub fn insert_str(&mut self, word: &str) -> Result<u32, WordError> {
        let chars: Vec<char> = word.chars().collect();
        self.insert(&chars)
    }

    fn add(&mut self, word: &[char], count: u32) -> Result<u32, WordError> {
        check_len(word)?;

        let mut created = 0;
        let mut node: &mut TrieNode = &mut self.root;
        for &c in word {
            let Some(slot) = slot_index(c) else {
                continue;
            };
            let (child, new) = node.child_or_insert(slot);
            if new {
                created += 1;
            }
            node = child;
        }

        if node.is_word {
            node.frequency = node.frequency.saturating_add(count);
        } else {
            node.is_word = true;
            node.frequency = count;
            self.word_count += 1;
        }
        let frequency = node.frequency;
        self.node_count += created;
        Ok(frequency)
    }

    /// Frequency of `word`, or `None` if it was never inserted.
    ///
    /// A path that exists only as the prefix of a longer word is not a hit.
    /// Words longer than [`MAX_WORD_LEN`] characters are never stored, so
    /// they are never found, even when skipping their unindexable characters
    /// would land on a stored word.
    pub fn lookup(&self, word: &[char]) -> Option<u32> {
        self.walk(word.iter().copied())
            .filter(|node| node.is_word)
            .map(|node| node.frequency)
    }

    /// [`WordTrie::lookup`] for string input, without allocating.
    pub fn lookup_str(&self, word: &str) -> Option<u32> {
        self.walk(word.chars())
            .filter(|node| node.is_word)
            .map(|node| node.frequency)
    }

    /// Whether `word` is stored.
    pub fn contains(&self, word: &[char]) -> bool {
        self.lookup(word).is_some()
    }

    /// Whether any stored word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &[char]) -> bool {
        self.walk(prefix.iter().copied()).is_some()
    }

    /// Follow `chars` from the root. `None` if the path does not exist or the
    /// input is longer than [`MAX_WORD_LEN`].
    fn walk(&self, chars: impl IntoIterator<Item = char>) -> Option<&TrieNode> {
        let mut node: &TrieNode = &self.root;
        for (walked, c) in chars.into_iter().enumerate() {
            if walked == MAX_WORD_LEN {
                return None;
            }
            let Some(slot) = slot_index(c) else {
                continue;
            };
            node = node.children[slot].as_deref()?;
        }
        Some(node)
    }

    /// Number of distinct words stored.
    pub fn size(&self) -> usize {
        self.word_count
    }

    /// Whether no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The root node (empty prefix).
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Iterate over every stored word and its frequency, in slot order.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.root)
    }

    /// Release every node, leaving an empty trie.
    ///
    /// Children are detached before their parent is freed, so each node is
    /// visited exactly once. Calling this on an empty trie does nothing.
    /// Returns the number of nodes released.
    pub fn teardown(&mut self) -> usize {
        let mut released = 0;
        let mut stack: Vec<Box<TrieNode>> = self.root.take_children().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children());
            released += 1;
        }
        self.root.is_word = false;
        self.root.frequency = 0;
        self.word_count = 0;
        self.node_count = 0;
        if released > 0 {
            log::debug!("released {released} trie nodes");
        }
        released
    }
}

impl Drop for WordTrie {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<'a> IntoIterator for &'a WordTrie {
    type Item = (String, u32);
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn empty_trie_finds_nothing() {
        let trie = WordTrie::new();
        assert_eq!(trie.size(), 0);
        assert!(trie.is_empty());
        assert_eq!(trie.lookup(&chars("anything")), None);
    }

    #[test]
    fn repeated_insert_counts_frequency_not_size() {
        let mut trie = WordTrie::new();
        for n in 1..=4 {
            assert_eq!(trie.insert(&chars("cat")).unwrap(), n);
        }
        assert_eq!(trie.lookup(&chars("cat")), Some(4));
        assert_eq!(trie.size(), 1);
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn prefix_is_not_a_word() {
        let trie = trie_of(&[("cat", 5)]);
        assert_eq!(trie.lookup(&chars("ca")), None);
        assert!(trie.has_prefix(&chars("ca")));
        assert!(!trie.has_prefix(&chars("co")));
    }

    #[test]
    fn longer_word_than_stored_is_not_found() {
        let trie = trie_of(&[("cat", 5)]);
        assert_eq!(trie.lookup(&chars("cats")), None);
    }

    #[test]
    fn case_and_apostrophe_share_one_path() {
        let mut trie = WordTrie::new();
        trie.insert(&chars("don't")).unwrap();
        trie.insert(&chars("Don't")).unwrap();
        trie.insert(&chars("DON'T")).unwrap();
        assert_eq!(trie.size(), 1);
        assert_eq!(trie.lookup_str("don't"), Some(3));
        assert_eq!(trie.lookup_str("Don't"), Some(3));
        assert_eq!(trie.lookup_str("DON'T"), Some(3));
        assert_eq!(trie.lookup_str("dont"), None);
    }

    #[test]
    fn unindexable_characters_are_skipped() {
        let mut trie = WordTrie::new();
        trie.insert(&chars("co-op")).unwrap();
        assert_eq!(trie.lookup_str("coop"), Some(1));
        assert_eq!(trie.lookup_str("c\u{00F6}oop"), Some(1));
    }

    #[test]
    fn sample_corpus_matches_expected_counts() {
        let trie = trie_of(&[("cat", 5), ("cats", 2), ("bat", 1)]);
        assert_eq!(trie.lookup_str("cat"), Some(5));
        assert_eq!(trie.lookup_str("cats"), Some(2));
        assert_eq!(trie.lookup_str("bat"), Some(1));
        assert_eq!(trie.lookup_str("ca"), None);
        assert_eq!(trie.size(), 3);
    }

    #[test]
    fn counted_insert_adds_to_existing_frequency() {
        let mut trie = trie_of(&[("the", 100)]);
        trie.insert(&chars("the")).unwrap();
        assert_eq!(
            trie.insert_with_count(&chars("the"), NonZeroU32::new(9).unwrap())
                .unwrap(),
            110
        );
        assert_eq!(trie.size(), 1);
    }

    #[test]
    fn frequency_saturates() {
        let mut trie = trie_of(&[("a", u32::MAX)]);
        assert_eq!(trie.insert(&chars("a")).unwrap(), u32::MAX);
    }

    #[test]
    fn over_long_word_is_rejected_without_mutation() {
        let mut trie = WordTrie::new();
        let word = vec!['a'; MAX_WORD_LEN + 1];
        assert!(matches!(
            trie.insert(&word),
            Err(WordError::TooLong { len: 46, max: 45 })
        ));
        assert_eq!(trie.size(), 0);
        assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn over_long_lookup_does_not_fall_back_to_shorter_word() {
        let trie = trie_of(&[("cat", 1)]);
        let word = format!("c{}at", "-".repeat(60));
        let chars: Vec<char> = word.chars().collect();
        assert_eq!(chars.len(), 63);
        assert!(matches!(
            trie_of(&[]).insert(&chars),
            Err(WordError::TooLong { len: 63, max: 45 })
        ));
        assert_eq!(trie.lookup(&chars), None);
        assert_eq!(trie.lookup_str(&word), None);
        assert!(!trie.has_prefix(&chars));
    }

    #[test]
    fn lookup_at_exactly_max_length_still_skips_foreign_characters() {
        let trie = trie_of(&[("cat", 1)]);
        let word = format!("c{}at", "-".repeat(MAX_WORD_LEN - 3));
        assert_eq!(word.chars().count(), MAX_WORD_LEN);
        assert_eq!(trie.lookup_str(&word), Some(1));
        let one_more = format!("c{}at", "-".repeat(MAX_WORD_LEN - 2));
        assert_eq!(trie.lookup_str(&one_more), None);
    }

    #[test]
    fn teardown_releases_every_node_once() {
        let mut trie = trie_of(&[("cat", 5), ("cats", 2), ("bat", 1)]);
        // c-a-t-s and b-a-t
        assert_eq!(trie.node_count(), 7);
        assert_eq!(trie.teardown(), 7);
        assert_eq!(trie.size(), 0);
        assert_eq!(trie.lookup_str("cat"), None);
        assert_eq!(trie.root().child_count(), 0);
    }

    #[test]
    fn teardown_is_a_noop_when_empty() {
        let mut trie = WordTrie::new();
        assert_eq!(trie.teardown(), 0);
        assert_eq!(trie.teardown(), 0);
    }

    #[test]
    fn trie_is_reusable_after_teardown() {
        let mut trie = trie_of(&[("cat", 5)]);
        trie.teardown();
        trie.insert(&chars("dog")).unwrap();
        assert_eq!(trie.size(), 1);
        assert_eq!(trie.lookup_str("dog"), Some(1));
    }

    #[test]
    fn deep_chain_drops_without_recursion() {
        let mut trie = WordTrie::new();
        let word = vec!['z'; MAX_WORD_LEN];
        trie.insert(&word).unwrap();
        assert_eq!(trie.node_count(), MAX_WORD_LEN);
        drop(trie);
    }
}

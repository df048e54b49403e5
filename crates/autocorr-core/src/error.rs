// Word-shape errors

/// A word violates the shape the trie and corrector rely on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// The word is longer than the configured maximum.
    #[error("word is {len} characters long, maximum is {max}")]
    TooLong { len: usize, max: usize },

    /// The word contains a character with no trie slot.
    #[error("character {ch:?} at position {position} is not a letter or apostrophe")]
    Unindexable { ch: char, position: usize },
}

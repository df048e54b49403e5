// Word length limits

use crate::error::WordError;

/// Longest word accepted anywhere in the workspace
/// (pneumonoultramicroscopicsilicovolcanoconiosis).
pub const MAX_WORD_LEN: usize = 45;

/// Reject words longer than [`MAX_WORD_LEN`] characters.
pub fn check_len(word: &[char]) -> Result<(), WordError> {
    if word.len() > MAX_WORD_LEN {
        return Err(WordError::TooLong {
            len: word.len(),
            max: MAX_WORD_LEN,
        });
    }
    Ok(())
}

// Counted corpus format: one `<count> <word>` entry per line

use std::num::NonZeroU32;

use autocorr_core::character::first_unindexable;
use autocorr_core::{WordError, check_len};

/// Why a counted-corpus line could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("invalid count {0:?}")]
    InvalidCount(String),
    #[error("count must be positive")]
    ZeroCount,
    #[error("missing word after count")]
    MissingWord,
    #[error("unexpected text after word: {0:?}")]
    TrailingText(String),
    #[error(transparent)]
    Word(#[from] WordError),
}

/// One parsed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedEntry {
    pub count: NonZeroU32,
    pub word: Vec<char>,
}

/// Parse one line. Blank lines give `Ok(None)`.
///
/// The word must consist of letters and apostrophes only and fit within
/// the maximum word length.
pub fn parse_line(line: &str) -> Result<Option<CountedEntry>, EntryError> {
    let mut fields = line.split_whitespace();
    let Some(count_field) = fields.next() else {
        return Ok(None);
    };
    let count: u32 = count_field
        .parse()
        .map_err(|_| EntryError::InvalidCount(count_field.to_string()))?;
    let count = NonZeroU32::new(count).ok_or(EntryError::ZeroCount)?;

    let word_field = fields.next().ok_or(EntryError::MissingWord)?;
    if let Some(extra) = fields.next() {
        return Err(EntryError::TrailingText(extra.to_string()));
    }

    let word: Vec<char> = word_field.chars().collect();
    check_len(&word)?;
    if let Some((position, ch)) = first_unindexable(&word) {
        return Err(WordError::Unindexable { ch, position }.into());
    }
    Ok(Some(CountedEntry { count, word }))
}

// Character classification and trie slot mapping
//
// Words are spelled over a 27-symbol alphabet: the ASCII letters (case-folded)
// and the apostrophe. Everything else is "not indexable".

/// Number of child slots per trie node: `a`..=`z` plus the apostrophe.
pub const SLOT_COUNT: usize = 27;

/// Slot used for the apostrophe character.
pub const APOSTROPHE_SLOT: usize = 26;

/// Canonical character of every slot, indexed by slot.
pub const SLOT_CHARS: [char; SLOT_COUNT] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '\'',
];

/// Letters tried by the substitution and insertion generators, in order.
pub const CANDIDATE_LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Character class as seen by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letter, either case.
    Letter,
    /// The apostrophe `'`.
    Apostrophe,
    /// ASCII digit.
    Digit,
    /// Anything else: whitespace, punctuation, non-ASCII.
    Other,
}

/// Classify a character for tokenization.
pub fn char_class(c: char) -> CharClass {
    if c.is_ascii_alphabetic() {
        CharClass::Letter
    } else if c == '\'' {
        CharClass::Apostrophe
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

/// Map a character to its trie slot.
///
/// Letters are case-folded into `0..26`, the apostrophe maps to
/// [`APOSTROPHE_SLOT`]. Returns `None` for every other character, including
/// non-ASCII letters.
#[inline]
pub fn slot_index(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize),
        '\'' => Some(APOSTROPHE_SLOT),
        _ => None,
    }
}

/// Inverse of [`slot_index`]: the canonical (lowercase) character of a slot.
///
/// Returns `None` for `slot >= SLOT_COUNT`.
pub fn slot_char(slot: usize) -> Option<char> {
    SLOT_CHARS.get(slot).copied()
}

/// Check whether a character can be stored in the trie.
pub fn is_word_char(c: char) -> bool {
    slot_index(c).is_some()
}

/// Position and value of the first character that has no trie slot.
pub fn first_unindexable(word: &[char]) -> Option<(usize, char)> {
    word.iter()
        .copied()
        .enumerate()
        .find(|&(_, c)| !is_word_char(c))
}

/// Lowercase a word and collect it into a `char` buffer.
///
/// Non-ASCII characters are kept as they are.
pub fn fold_word(word: &str) -> Vec<char> {
    word.chars().map(|c| c.to_ascii_lowercase()).collect()
}

// Tokenizer: splits raw text into candidate words
//
// Rules:
//   - letters are kept (lowercased); an apostrophe is kept only inside a word
//   - a word that grows past MAX_WORD_LEN is dropped with the rest of its
//     alphabetic run
//   - a digit drops the current word and the rest of its alphanumeric run
//   - any other character ends the current word
//   - end of input ends the current word

use std::ops::AddAssign;

use autocorr_core::MAX_WORD_LEN;
use autocorr_core::character::{CharClass, char_class};

/// A word found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lowercased word.
    pub word: String,
    /// Character offset of the word's first character.
    pub offset: usize,
}

/// Counts of what the tokenizer kept and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenStats {
    /// Words emitted.
    pub words: usize,
    /// Runs dropped for exceeding the maximum word length.
    pub too_long: usize,
    /// Runs dropped for containing a digit.
    pub with_digits: usize,
}

impl AddAssign for TokenStats {
    fn add_assign(&mut self, other: Self) {
        self.words += other.words;
        self.too_long += other.too_long;
        self.with_digits += other.with_digits;
    }
}

/// Iterator over the words of a character stream.
pub struct Tokens<I> {
    chars: I,
    pos: usize,
    start: usize,
    word: String,
    stats: TokenStats,
}

impl<I: Iterator<Item = char>> Tokens<I> {
    /// Tokenize any character stream.
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            pos: 0,
            start: 0,
            word: String::with_capacity(MAX_WORD_LEN + 1),
            stats: TokenStats::default(),
        }
    }

    /// What has been kept and dropped so far.
    pub fn stats(&self) -> TokenStats {
        self.stats
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos += 1;
        Some(c)
    }

    /// Consume characters up to and including the first one failing `keep`.
    fn skip_run(&mut self, keep: fn(char) -> bool) {
        while let Some(c) = self.bump() {
            if !keep(c) {
                break;
            }
        }
    }

    fn push(&mut self, c: char) {
        if self.word.is_empty() {
            self.start = self.pos - 1;
        }
        self.word.push(c.to_ascii_lowercase());
        if self.word.len() > MAX_WORD_LEN {
            self.skip_run(|c| c.is_ascii_alphabetic());
            self.word.clear();
            self.stats.too_long += 1;
        }
    }

    fn emit(&mut self) -> Token {
        self.stats.words += 1;
        Token {
            word: std::mem::take(&mut self.word),
            offset: self.start,
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Tokens<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let Some(c) = self.bump() else {
                return (!self.word.is_empty()).then(|| self.emit());
            };
            match char_class(c) {
                CharClass::Letter => self.push(c),
                CharClass::Apostrophe if !self.word.is_empty() => self.push(c),
                CharClass::Digit => {
                    self.skip_run(|c| c.is_ascii_alphanumeric());
                    self.word.clear();
                    self.stats.with_digits += 1;
                }
                _ => {
                    if !self.word.is_empty() {
                        return Some(self.emit());
                    }
                }
            }
        }
    }
}

/// Tokenize a string.
pub fn tokenize(text: &str) -> Tokens<std::str::Chars<'_>> {
    Tokens::new(text.chars())
}

/// Tokenize raw bytes, one byte per character.
///
/// Bytes outside ASCII become non-letters, so arbitrary encodings split
/// cleanly instead of failing to decode.
pub fn tokenize_bytes(bytes: &[u8]) -> Tokens<impl Iterator<Item = char> + '_> {
    Tokens::new(bytes.iter().map(|&b| b as char))
}

//! Shared types for the autocorr workspace.
//!
//! - [`character`] -- mapping between word characters and trie slots
//! - [`limits`] -- word-length bounds shared by the store and the corrector
//! - [`error`] -- word-shape errors raised before a word reaches the trie

pub mod character;
pub mod error;
pub mod limits;

pub use error::WordError;
pub use limits::{MAX_WORD_LEN, check_len};

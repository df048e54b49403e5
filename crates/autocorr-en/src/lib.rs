//! English word-frequency spell checker with single-edit correction.
//!
//! # Architecture
//!
//! - [`corpus`] -- tokenizing raw text and loading corpora into a
//!   [`WordTrie`](autocorr_trie::WordTrie)
//! - [`speller`] -- the frequency lookup contract the corrector depends on
//! - [`suggestion`] -- edit-distance-1 candidate generators and the
//!   corrector that runs them
//! - [`handle`] -- [`AutocorrHandle`](handle::AutocorrHandle), owning the
//!   loaded trie and exposing load / lookup / correct / size / teardown

pub mod corpus;
pub mod handle;
pub mod speller;
pub mod suggestion;

pub use autocorr_core::{MAX_WORD_LEN, WordError};
pub use autocorr_trie::WordTrie;
pub use handle::{AutocorrHandle, CharPolicy, HandleOptions};
pub use suggestion::{Correction, Corrector, EditKind};

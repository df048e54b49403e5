// AutocorrHandle: owns the loaded word trie and answers queries against it.
//
// Loading always builds a fresh trie and swaps it in only after the source
// has been read completely. Queries take `&self`; the only mutations are
// `load*` and `teardown`, both `&mut self`, so a correction pass can never
// observe a trie that is changing underneath it.

use std::io::BufRead;
use std::path::Path;

use autocorr_core::character::{first_unindexable, fold_word, slot_index};
use autocorr_core::{WordError, check_len};
use autocorr_trie::WordTrie;

use crate::corpus::{self, CorpusFormat, LoadError, LoadStats};
use crate::suggestion::{Correction, Corrector};

/// What to do with characters that have no trie slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharPolicy {
    /// Drop them before walking the trie.
    #[default]
    Skip,
    /// Fail with [`WordError::Unindexable`].
    Reject,
}

/// Options controlling how the handle treats query words and corpora.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandleOptions {
    /// Handling of characters outside `[A-Za-z']`.
    pub char_policy: CharPolicy,
    /// Drop one trailing apostrophe from query words.
    pub ignore_trailing_apostrophe: bool,
    /// Format used by [`AutocorrHandle::load_file`].
    pub format: CorpusFormat,
}

/// Top-level handle: load a corpus, then look up, spell check and correct.
pub struct AutocorrHandle {
    trie: WordTrie,
    loaded: bool,
    corrector: Corrector,
    options: HandleOptions,
}

impl Default for AutocorrHandle {
    fn default() -> Self {
        Self::new(HandleOptions::default())
    }
}

impl AutocorrHandle {
    /// Create an empty handle. Nothing is found until a corpus is loaded.
    pub fn new(options: HandleOptions) -> Self {
        Self {
            trie: WordTrie::new(),
            loaded: false,
            corrector: Corrector::default(),
            options,
        }
    }

    /// Load a corpus from a reader, replacing any previously loaded one.
    ///
    /// On error the handle keeps whatever it held before the call.
    pub fn load<R: BufRead>(
        &mut self,
        reader: R,
        format: CorpusFormat,
    ) -> Result<LoadStats, LoadError> {
        let (trie, stats) = corpus::load_reader(reader, format)?;
        self.publish(trie, &stats);
        Ok(stats)
    }

    /// Load a corpus file in the configured format.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadStats, LoadError> {
        let (trie, stats) = corpus::load_path(path, self.options.format)?;
        log::info!("loaded {}", path.display());
        self.publish(trie, &stats);
        Ok(stats)
    }

    fn publish(&mut self, trie: WordTrie, stats: &LoadStats) {
        // The previous trie is torn down by its Drop.
        self.trie = trie;
        self.loaded = true;
        log::info!(
            "published corpus: {} distinct words, {} occurrences, {} nodes",
            stats.distinct,
            stats.occurrences,
            self.trie.node_count()
        );
    }

    /// Whether a corpus is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Fold a query word into the character sequence the trie is walked with.
    pub fn normalize(&self, word: &str) -> Result<Vec<char>, WordError> {
        let mut chars = fold_word(word);
        if self.options.ignore_trailing_apostrophe && chars.last() == Some(&'\'') {
            chars.pop();
        }
        match self.options.char_policy {
            CharPolicy::Reject => {
                if let Some((position, ch)) = first_unindexable(&chars) {
                    return Err(WordError::Unindexable { ch, position });
                }
            }
            CharPolicy::Skip => chars.retain(|&c| slot_index(c).is_some()),
        }
        check_len(&chars)?;
        Ok(chars)
    }

    /// Frequency of `word`, or an error if it cannot be a stored word.
    pub fn try_lookup(&self, word: &str) -> Result<Option<u32>, WordError> {
        let chars = self.normalize(word)?;
        Ok(self.trie.lookup(&chars))
    }

    /// Frequency of `word` in the loaded corpus. `None` if it is unknown.
    pub fn lookup(&self, word: &str) -> Option<u32> {
        self.try_lookup(word).ok().flatten()
    }

    /// Whether `word` is in the loaded corpus.
    pub fn spell(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// The most frequent known word one edit away from `word`.
    pub fn correct(&self, word: &str) -> Result<Option<Correction>, WordError> {
        let chars = self.normalize(word)?;
        self.corrector.correct(&self.trie, &chars)
    }

    /// Number of distinct words loaded.
    pub fn size(&self) -> usize {
        self.trie.size()
    }

    /// Release the loaded corpus. Returns the number of nodes freed.
    ///
    /// Calling this on an empty or already torn-down handle does nothing.
    pub fn teardown(&mut self) -> usize {
        if !self.loaded {
            return 0;
        }
        self.loaded = false;
        self.trie.teardown()
    }

    /// The loaded trie.
    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }

    pub fn options(&self) -> &HandleOptions {
        &self.options
    }

    pub fn set_char_policy(&mut self, policy: CharPolicy) {
        self.options.char_policy = policy;
    }

    pub fn set_ignore_trailing_apostrophe(&mut self, value: bool) {
        self.options.ignore_trailing_apostrophe = value;
    }

    pub fn set_format(&mut self, format: CorpusFormat) {
        self.options.format = format;
    }
}

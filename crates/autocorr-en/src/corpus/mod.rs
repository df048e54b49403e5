// Corpus loading
//
// Builds a WordTrie from either raw text (every token is one occurrence) or
// a counted list of `<count> <word>` lines. The trie is built privately and
// only handed back once the whole source has been read, so a failed load
// never exposes a partially filled trie.

pub mod counted;
pub mod tokenizer;

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use autocorr_trie::WordTrie;

pub use counted::{CountedEntry, EntryError};
pub use tokenizer::{Token, TokenStats, Tokens, tokenize, tokenize_bytes};

/// Layout of a corpus source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CorpusFormat {
    /// Raw text; each token counts as one occurrence.
    #[default]
    Tokens,
    /// One `<count> <word>` entry per line.
    Counted,
}

impl fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CorpusFormat::Tokens => "tokens",
            CorpusFormat::Counted => "counted",
        })
    }
}

impl FromStr for CorpusFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tokens" | "text" => Ok(CorpusFormat::Tokens),
            "counted" | "counts" => Ok(CorpusFormat::Counted),
            other => Err(format!(
                "unknown corpus format {other:?} (expected \"tokens\" or \"counted\")"
            )),
        }
    }
}

/// Error type for corpus loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The corpus file could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed part way through.
    #[error("failed to read corpus at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A line could not be turned into a word.
    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: EntryError,
    },
}

/// Summary of a completed load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read.
    pub lines: usize,
    /// Total occurrences recorded (sum of counts).
    pub occurrences: u64,
    /// Distinct words in the resulting trie.
    pub distinct: usize,
    /// Tokenizer counters; all zero for counted corpora.
    pub tokens: TokenStats,
}

/// Build a trie from a buffered reader.
pub fn load_reader<R: BufRead>(
    reader: R,
    format: CorpusFormat,
) -> Result<(WordTrie, LoadStats), LoadError> {
    let mut trie = WordTrie::new();
    let mut stats = LoadStats::default();
    match format {
        CorpusFormat::Tokens => load_tokens(reader, &mut trie, &mut stats)?,
        CorpusFormat::Counted => load_counted(reader, &mut trie, &mut stats)?,
    }
    stats.distinct = trie.size();

    if stats.tokens.too_long > 0 || stats.tokens.with_digits > 0 {
        log::warn!(
            "skipped {} over-long and {} digit-bearing tokens",
            stats.tokens.too_long,
            stats.tokens.with_digits
        );
    }
    Ok((trie, stats))
}

/// Build a trie from a file.
pub fn load_path(path: &Path, format: CorpusFormat) -> Result<(WordTrie, LoadStats), LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(BufReader::new(file), format)
}

/// Read the next line into `buf` (cleared first). Returns `false` at end of input.
fn next_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    stats: &mut LoadStats,
) -> Result<bool, LoadError> {
    buf.clear();
    let n = reader
        .read_until(b'\n', buf)
        .map_err(|source| LoadError::Read {
            line: stats.lines + 1,
            source,
        })?;
    if n == 0 {
        return Ok(false);
    }
    stats.lines += 1;
    Ok(true)
}

fn load_tokens<R: BufRead>(
    mut reader: R,
    trie: &mut WordTrie,
    stats: &mut LoadStats,
) -> Result<(), LoadError> {
    let mut buf = Vec::new();
    while next_line(&mut reader, &mut buf, stats)? {
        let mut tokens = tokenize_bytes(&buf);
        for token in &mut tokens {
            trie.insert_str(&token.word)
                .map_err(|e| LoadError::Malformed {
                    line: stats.lines,
                    source: e.into(),
                })?;
            stats.occurrences += 1;
        }
        stats.tokens += tokens.stats();
    }
    Ok(())
}

fn load_counted<R: BufRead>(
    mut reader: R,
    trie: &mut WordTrie,
    stats: &mut LoadStats,
) -> Result<(), LoadError> {
    let mut buf = Vec::new();
    while next_line(&mut reader, &mut buf, stats)? {
        let line = String::from_utf8_lossy(&buf);
        let line_no = stats.lines;
        let malformed = |source: EntryError| LoadError::Malformed {
            line: line_no,
            source,
        };
        let Some(entry) = counted::parse_line(&line).map_err(&malformed)? else {
            continue;
        };
        trie.insert_with_count(&entry.word, entry.count)
            .map_err(|e| malformed(e.into()))?;
        stats.occurrences += u64::from(entry.count.get());
    }
    Ok(())
}

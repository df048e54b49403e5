// autocorr-cli: shared utilities for the command-line tools.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use autocorr_en::corpus::CorpusFormat;
use autocorr_en::{AutocorrHandle, Correction, HandleOptions, MAX_WORD_LEN};
use log::LevelFilter;

/// Word data file name looked up inside search directories.
pub const DATA_FILE: &str = "word_data.txt";

/// Word data format used when none is given: raw text, one occurrence per token.
pub const DEFAULT_FORMAT: &str = "tokens";

/// Environment variable naming a word data file or a directory holding one.
pub const DATA_ENV: &str = "AUTOCORR_DATA_PATH";

/// Find the word data file and load it into a new handle.
///
/// Search order:
/// 1. `data_path` argument (if provided, nothing else is tried)
/// 2. `AUTOCORR_DATA_PATH` environment variable
/// 3. `~/.autocorr/word_data.txt`
/// 4. `word_data.txt` in the current working directory
pub fn load_handle(
    data_path: Option<&Path>,
    options: HandleOptions,
) -> Result<(AutocorrHandle, PathBuf), String> {
    let path = find_data_file(data_path)?;
    let mut handle = AutocorrHandle::new(options);
    handle
        .load_file(&path)
        .map_err(|e| format!("could not load word data from {}: {e}", path.display()))?;
    Ok((handle, path))
}

/// Locate the word data file without loading it.
pub fn find_data_file(data_path: Option<&Path>) -> Result<PathBuf, String> {
    let search_paths = build_search_paths(data_path);
    if let Some(found) = search_paths.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DATA_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

fn build_search_paths(data_path: Option<&Path>) -> Vec<PathBuf> {
    search_paths_from(
        data_path,
        std::env::var_os(DATA_ENV).map(PathBuf::from),
        home_dir(),
        std::env::current_dir().ok(),
    )
}

/// Candidate data files, most specific first.
fn search_paths_from(
    data_path: Option<&Path>,
    env_path: Option<PathBuf>,
    home: Option<PathBuf>,
    cwd: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // An explicit path is the only candidate.
    if let Some(p) = data_path {
        push_file_or_dir(&mut paths, p);
        return paths;
    }

    if let Some(p) = env_path {
        push_file_or_dir(&mut paths, &p);
    }

    if let Some(home) = home {
        paths.push(home.join(".autocorr").join(DATA_FILE));
    }

    if let Some(cwd) = cwd {
        paths.push(cwd.join(DATA_FILE));
    }

    paths
}

fn push_file_or_dir(paths: &mut Vec<PathBuf>, p: &Path) {
    if p.is_dir() {
        paths.push(p.join(DATA_FILE));
    } else {
        paths.push(p.to_path_buf());
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Set up `env_logger`. `RUST_LOG` overrides the level picked from `verbose`.
pub fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// One line of the misspelling listing: the word padded to the maximum
/// word length, then the suggestion.
pub fn misspelling_line(word: &str, correction: Option<&Correction>) -> String {
    match correction {
        Some(c) => format!("{word:<width$} Suggested Correction: {c}", width = MAX_WORD_LEN),
        None => format!("{word:<width$} No suggested correction", width = MAX_WORD_LEN),
    }
}

/// Counters and timings gathered by a spell-check run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub misspelled: usize,
    pub dictionary_words: usize,
    pub text_words: usize,
    pub load: Duration,
    pub check: Duration,
    pub correct: Duration,
    pub size: Duration,
    pub unload: Duration,
}

impl Report {
    pub fn total(&self) -> Duration {
        self.load + self.check + self.correct + self.size + self.unload
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: [(&str, String); 9] = [
            ("WORDS MISSPELLED:", self.misspelled.to_string()),
            ("WORDS IN DICTIONARY:", self.dictionary_words.to_string()),
            ("WORDS IN TEXT:", self.text_words.to_string()),
            ("Time in loading word data file:", seconds(self.load)),
            ("Time in checking text:", seconds(self.check)),
            ("Time in correcting text:", seconds(self.correct)),
            ("Time in finding size of word data:", seconds(self.size)),
            ("Time in unloading word data:", seconds(self.unload)),
            ("TIME IN TOTAL:", seconds(self.total())),
        ];
        for (label, value) in rows {
            writeln!(f, "{label:<41}{value}")?;
        }
        Ok(())
    }
}

fn seconds(d: Duration) -> String {
    format!("{:.2} seconds", d.as_secs_f64())
}

/// Parse a corpus format name for clap.
pub fn parse_format(s: &str) -> Result<CorpusFormat, String> {
    s.parse()
}

// autocorr-speller: Spell check a text file and suggest corrections.
//
// Loads the word data, tokenizes the text file, and lists every word that
// is not in the word data together with its most likely correction:
//   word<padding> Suggested Correction: fix
//   word<padding> No suggested correction
// A report with word counts and per-phase timings follows the listing.
//
// Usage:
//   autocorr-speller [-d DATA] [-f FORMAT] [-v] TEXT_FILE

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use autocorr_cli::{Report, fatal, misspelling_line};
use autocorr_en::HandleOptions;
use autocorr_en::corpus::{CorpusFormat, tokenize_bytes};
use clap::Parser;

/// Spell check a text file against a word-frequency list.
#[derive(Parser, Debug)]
#[command(name = "autocorr-speller", version)]
struct Args {
    /// Text file to check
    text: PathBuf,

    /// Word data file, or a directory containing word_data.txt
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Word data format: "tokens" (raw text) or "counted" (<count> <word> lines)
    #[arg(short, long, default_value = autocorr_cli::DEFAULT_FORMAT, value_parser = autocorr_cli::parse_format)]
    format: CorpusFormat,

    /// Treat "dogs'" as "dogs" when checking
    #[arg(long)]
    ignore_trailing_apostrophe: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    autocorr_cli::init_logging(args.verbose);

    let options = HandleOptions {
        ignore_trailing_apostrophe: args.ignore_trailing_apostrophe,
        format: args.format,
        ..HandleOptions::default()
    };

    let mut report = Report::default();

    let started = Instant::now();
    let (mut handle, data_path) = autocorr_cli::load_handle(args.data.as_deref(), options)
        .unwrap_or_else(|e| fatal(&e));
    report.load = started.elapsed();
    log::info!("word data: {}", data_path.display());

    let text = std::fs::read(&args.text).unwrap_or_else(|e| {
        fatal(&format!("could not open text file {}: {e}", args.text.display()))
    });

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = writeln!(out, "\nMisspelled Words\n");

    let mut tokens = tokenize_bytes(&text);
    for token in &mut tokens {
        report.text_words += 1;

        let started = Instant::now();
        let known = handle.spell(&token.word);
        report.check += started.elapsed();
        if known {
            continue;
        }
        report.misspelled += 1;

        let started = Instant::now();
        let correction = match handle.correct(&token.word) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("cannot correct {:?}: {e}", token.word);
                None
            }
        };
        report.correct += started.elapsed();

        let _ = writeln!(out, "{}", misspelling_line(&token.word, correction.as_ref()));
    }

    let skipped = tokens.stats();
    if skipped.too_long > 0 || skipped.with_digits > 0 {
        log::info!(
            "ignored {} over-long and {} digit-bearing tokens in text",
            skipped.too_long,
            skipped.with_digits
        );
    }

    let started = Instant::now();
    report.dictionary_words = handle.size();
    report.size = started.elapsed();

    let started = Instant::now();
    let released = handle.teardown();
    report.unload = started.elapsed();
    log::debug!("released {released} nodes");

    let _ = write!(out, "\n{report}\n");
    if let Err(e) = out.flush() {
        fatal(&format!("could not write output: {e}"));
    }
}

// autocorr-suggest: Look up words and suggest corrections.
//
// Reads words from the command line, or from stdin (one per line) when no
// words are given, and prints:
//   word (correct, frequency N)
//   word: suggestion
//   word: (no suggestion)
//
// With --dump, prints the loaded word data as `<count> <word>` lines instead.
//
// Usage:
//   autocorr-suggest [-d DATA] [-f FORMAT] [--dump] [WORD...]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use autocorr_cli::fatal;
use autocorr_en::corpus::CorpusFormat;
use autocorr_en::{AutocorrHandle, CharPolicy, HandleOptions};
use clap::Parser;

/// Look up words in a word-frequency list and suggest corrections.
#[derive(Parser, Debug)]
#[command(name = "autocorr-suggest", version)]
struct Args {
    /// Words to check; read from stdin when empty
    words: Vec<String>,

    /// Word data file, or a directory containing word_data.txt
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Word data format: "tokens" (raw text) or "counted" (<count> <word> lines)
    #[arg(short, long, default_value = autocorr_cli::DEFAULT_FORMAT, value_parser = autocorr_cli::parse_format)]
    format: CorpusFormat,

    /// Report words containing characters other than letters and apostrophes
    #[arg(long)]
    strict: bool,

    /// Treat "dogs'" as "dogs"
    #[arg(long)]
    ignore_trailing_apostrophe: bool,

    /// Print every loaded word with its frequency and exit
    #[arg(long)]
    dump: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn suggest_word(word: &str, handle: &AutocorrHandle, out: &mut impl Write) {
    match handle.try_lookup(word) {
        Ok(Some(frequency)) => {
            let _ = writeln!(out, "{word} (correct, frequency {frequency})");
        }
        Ok(None) => match handle.correct(word) {
            Ok(Some(c)) => {
                let _ = writeln!(out, "{word}: {c}");
            }
            Ok(None) => {
                let _ = writeln!(out, "{word}: (no suggestion)");
            }
            Err(e) => {
                let _ = writeln!(out, "{word}: error: {e}");
            }
        },
        Err(e) => {
            let _ = writeln!(out, "{word}: error: {e}");
        }
    }
}

fn main() {
    let args = Args::parse();
    autocorr_cli::init_logging(args.verbose);

    let options = HandleOptions {
        char_policy: if args.strict {
            CharPolicy::Reject
        } else {
            CharPolicy::Skip
        },
        ignore_trailing_apostrophe: args.ignore_trailing_apostrophe,
        format: args.format,
    };
    let (handle, _) = autocorr_cli::load_handle(args.data.as_deref(), options)
        .unwrap_or_else(|e| fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.dump {
        for (word, frequency) in handle.trie() {
            let _ = writeln!(out, "{frequency} {word}");
        }
    } else if args.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &handle, &mut out);
        }
    } else {
        for word in &args.words {
            suggest_word(word, &handle, &mut out);
        }
    }

    if let Err(e) = out.flush() {
        fatal(&format!("could not write output: {e}"));
    }
}

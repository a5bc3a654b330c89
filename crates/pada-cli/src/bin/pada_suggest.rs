// pada-suggest: Generate spelling suggestions for Kannada words.
//
// Prints suggestions for misspelled words. Correctly spelled words are
// printed as-is.
//
// Usage:
//   pada-suggest [-w WORDLIST] [OPTIONS] [WORD...]
//
// Options:
//   -w, --wordlist PATH       Categorized word list
//   -n, --max-suggestions N   Maximum number of suggestions (default: 8)
//   --preserve-category       Only suggest roots of the same suffix category
//   -h, --help                Print help

use std::io::{self, BufRead, Write};

use pada_core::enums::DEFAULT_MAX_SUGGESTIONS;
use pada_kn::PadaHandle;

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist, args) = pada_cli::parse_wordlist_path(&args);
    let (max, args) = pada_cli::parse_option(&args, &["-n", "--max-suggestions"]);

    if pada_cli::wants_help(&args) {
        println!("pada-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: pada-suggest [-w WORDLIST] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH      Categorized word list");
        println!("  -n, --max-suggestions N  Maximum number of suggestions");
        println!("                           (default: {DEFAULT_MAX_SUGGESTIONS})");
        println!("  --preserve-category      Only suggest roots of the same suffix category");
        println!("  -h, --help               Print this help");
        return;
    }

    let max_suggestions = match max {
        Some(n) => n
            .parse()
            .unwrap_or_else(|_| pada_cli::fatal("invalid number for --max-suggestions")),
        None => DEFAULT_MAX_SUGGESTIONS,
    };
    let preserve_category = args.iter().any(|a| a == "--preserve-category");
    let words: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();

    let mut handle =
        pada_cli::load_handle(wordlist.as_deref()).unwrap_or_else(|e| pada_cli::fatal(&e));
    handle.set_max_suggestions(max_suggestions);
    handle.set_preserve_category(preserve_category);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
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
            if !word.is_empty() {
                suggest_word(word, &handle, &mut out);
            }
        }
    } else {
        for word in words {
            suggest_word(word, &handle, &mut out);
        }
    }
}

fn suggest_word(word: &str, handle: &PadaHandle, out: &mut impl Write) {
    if handle.spell(word) {
        let _ = writeln!(out, "{word} (correct)");
        return;
    }
    let suggestions = handle.suggestions(word);
    if suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
        for s in &suggestions {
            let _ = writeln!(out, "  {s}");
        }
    }
}

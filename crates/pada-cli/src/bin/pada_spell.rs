// pada-spell: Check spelling of Kannada words from stdin.
//
// Reads text from stdin and reports each whitespace-delimited token:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   N: word    (not checked: numeral or non-Kannada text)
//
// Usage:
//   pada-spell [-w WORDLIST] [OPTIONS]
//
// Options:
//   -w, --wordlist PATH    Categorized word list
//   -s, --suggest          Also print suggestions for misspelled words
//   --ignore PATH          Accept every word listed in PATH
//   --ignore-all           Accept each misspelled word after its first report
//   --save-ignore PATH     Write the ignore list to PATH after the run
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use pada_core::TokenType;
use pada_kn::tokenizer::tokenize;

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist, args) = pada_cli::parse_wordlist_path(&args);
    let (ignore_path, args) = pada_cli::parse_option(&args, &["--ignore"]);
    let (save_path, args) = pada_cli::parse_option(&args, &["--save-ignore"]);

    if pada_cli::wants_help(&args) {
        println!("pada-spell: Check spelling of Kannada words from stdin.");
        println!();
        println!("Usage: pada-spell [-w WORDLIST] [OPTIONS]");
        println!();
        println!("Reads text from stdin. Prints one line per token:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!("  N: word    (numeral or non-Kannada, not checked)");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH   Categorized word list");
        println!("  -s, --suggest         Also print suggestions for misspelled words");
        println!("  --ignore PATH         Accept every word listed in PATH");
        println!("  --ignore-all          Accept each misspelled word after its first report");
        println!("  --save-ignore PATH    Write the ignore list to PATH after the run");
        println!("  -h, --help            Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");
    let ignore_all = args.iter().any(|a| a == "--ignore-all");

    let mut handle =
        pada_cli::load_handle(wordlist.as_deref()).unwrap_or_else(|e| pada_cli::fatal(&e));

    if let Some(path) = ignore_path {
        let words = pada_cli::load_ignore_list(&path).unwrap_or_else(|e| pada_cli::fatal(&e));
        for word in words {
            handle.ignore_word(word);
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        for token in tokenize(&line) {
            let word = token.text.as_str();
            if token.token_type != TokenType::Word {
                let _ = writeln!(out, "N: {word}");
            } else if handle.spell(word) {
                let _ = writeln!(out, "C: {word}");
            } else {
                let _ = writeln!(out, "W: {word}");
                if show_suggestions {
                    for suggestion in handle.suggestions(word) {
                        let _ = writeln!(out, "S: {suggestion}");
                    }
                }
                if ignore_all {
                    handle.ignore_word(word);
                }
            }
        }
    }
    let _ = out.flush();

    if let Some(path) = save_path {
        pada_cli::save_ignore_list(&path, &handle).unwrap_or_else(|e| pada_cli::fatal(&e));
    }
}

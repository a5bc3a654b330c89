// pada-accuracy: Measure how well suggestions recover expected words.
//
// Reads `misspelled<TAB>expected` pairs and reports, for each pair, the
// position of the expected word among the suggestions, followed by a
// summary line:
//   [#1] 33.33% [^5] 66.67% [^8] 83.33% [any] 83.33% [none] 0.00% [wrong] 16.67%
//
// Usage:
//   pada-accuracy [-w WORDLIST] [OPTIONS] [PAIRS]
//
// Options:
//   -w, --wordlist PATH       Categorized word list
//   -n, --max-suggestions N   Suggestions examined per word (default: 8)
//   -o, --json-output PATH    Also write the full report as JSON
//   -h, --help                Print help

use std::io::{self, Read, Write};

use pada_core::enums::DEFAULT_MAX_SUGGESTIONS;

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (wordlist, args) = pada_cli::parse_wordlist_path(&args);
    let (max, args) = pada_cli::parse_option(&args, &["-n", "--max-suggestions"]);
    let (json_path, args) = pada_cli::parse_option(&args, &["-o", "--json-output"]);

    if pada_cli::wants_help(&args) {
        println!("pada-accuracy: Measure suggestion accuracy.");
        println!();
        println!("Usage: pada-accuracy [-w WORDLIST] [OPTIONS] [PAIRS]");
        println!();
        println!("PAIRS is a file of misspelled<TAB>expected lines; stdin if omitted.");
        println!("Lines starting with # are skipped.");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH      Categorized word list");
        println!("  -n, --max-suggestions N  Suggestions examined per word");
        println!("                           (default: {DEFAULT_MAX_SUGGESTIONS})");
        println!("  -o, --json-output PATH   Also write the full report as JSON");
        println!("  -h, --help               Print this help");
        return;
    }

    let limit = match max {
        Some(n) => n
            .parse()
            .unwrap_or_else(|_| pada_cli::fatal("invalid number for --max-suggestions")),
        None => DEFAULT_MAX_SUGGESTIONS,
    };

    let pairs = match args.iter().find(|a| !a.starts_with('-')) {
        Some(path) => pada_cli::load_pairs(path).unwrap_or_else(|e| pada_cli::fatal(&e)),
        None => {
            let mut text = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut text) {
                pada_cli::fatal(&format!("error reading stdin: {e}"));
            }
            pada_cli::parse_pairs(&text)
        }
    };
    if pairs.is_empty() {
        pada_cli::fatal("no misspelled<TAB>expected pairs to evaluate");
    }

    let handle =
        pada_cli::load_handle(wordlist.as_deref()).unwrap_or_else(|e| pada_cli::fatal(&e));
    log::info!("evaluating {} pairs with limit {limit}", pairs.len());
    let report = handle.evaluate(pairs, limit);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for result in &report.results {
        let position = match result.rank {
            Some(rank) => format!("#{rank}"),
            None if result.suggestions.is_empty() => "(no suggestions)".to_string(),
            None => "(not found)".to_string(),
        };
        let _ = writeln!(out, "{} -> {}: {position}", result.input, result.expected);
    }
    let _ = writeln!(out, "{}", report.summary);
    let _ = out.flush();

    if let Some(path) = json_path {
        let json = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| pada_cli::fatal(&format!("failed to serialize report: {e}")));
        std::fs::write(&path, json)
            .unwrap_or_else(|e| pada_cli::fatal(&format!("failed to write {path}: {e}")));
    }
}

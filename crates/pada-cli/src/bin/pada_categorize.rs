// pada-categorize: Build a categorized word list from a plain one.
//
// Reads a plain word list (one word per line), discovers roots whose full
// paradigm is present and writes the categorized format to stdout:
//
//   Category 2:
//   ಮನೆ
//
//   Uncategorized:
//   ಕನ್ನಡ
//
// Usage:
//   pada-categorize [-c CATALOG] INPUT
//
// Options:
//   -c, --catalog PATH   JSON suffix catalog (default: built-in paradigm table)
//   -h, --help           Print help

use std::io::{self, Write};

use pada_kn::SuffixCatalog;
use pada_kn::wordlist;

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (catalog_path, args) = pada_cli::parse_catalog_path(&args);

    if pada_cli::wants_help(&args) || args.is_empty() {
        println!("pada-categorize: Build a categorized word list from a plain one.");
        println!();
        println!("Usage: pada-categorize [-c CATALOG] INPUT");
        println!();
        println!("Options:");
        println!("  -c, --catalog PATH   JSON suffix catalog (default: built-in paradigm table)");
        println!("  -h, --help           Print this help");
        return;
    }

    let catalog = match catalog_path {
        Some(path) => pada_cli::load_catalog(&path).unwrap_or_else(|e| pada_cli::fatal(&e)),
        None => SuffixCatalog::paradigm(),
    };

    let input = &args[0];
    let text = std::fs::read_to_string(input)
        .unwrap_or_else(|e| pada_cli::fatal(&format!("failed to read {input}: {e}")));
    let words = wordlist::parse_plain(&text);
    let categorization = wordlist::categorize(&words, &catalog);

    for (category, roots) in categorization.categories() {
        log::info!("category {category}: {} roots", roots.len());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = out.write_all(wordlist::render_categorized(&categorization, &words).as_bytes())
    {
        pada_cli::fatal(&format!("failed to write output: {e}"));
    }
}

// pada-stem: Resolve Kannada words to their roots.
//
// For each word prints the root, the suffix categories applied and the
// removed suffix, followed by the single batch-classification category:
//   ಮಾಡಲು -> ಮಾಡು [73] (ಲು) class 73
//
// Usage:
//   pada-stem [-c CATALOG] [WORD...]
//
// Options:
//   -c, --catalog PATH   JSON suffix catalog (default: built-in stemmer table)
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use pada_kn::morphology::{SuffixCatalog, SuffixResolver};

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (catalog_path, args) = pada_cli::parse_catalog_path(&args);

    if pada_cli::wants_help(&args) {
        println!("pada-stem: Resolve Kannada words to their roots.");
        println!();
        println!("Usage: pada-stem [-c CATALOG] [WORD...]");
        println!();
        println!("If WORD arguments are given, resolves each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -c, --catalog PATH   JSON suffix catalog (default: built-in stemmer table)");
        println!("  -h, --help           Print this help");
        return;
    }

    let catalog = match catalog_path {
        Some(path) => pada_cli::load_catalog(&path).unwrap_or_else(|e| pada_cli::fatal(&e)),
        None => SuffixCatalog::stemmer(),
    };
    let resolver = SuffixResolver::new(&catalog);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut stem = |word: &str| {
        let resolved = resolver.resolve(word);
        let categories = resolved
            .categories
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let class = catalog
            .classify(word)
            .map_or_else(|| "unclassified".to_string(), |c| c.to_string());
        let _ = writeln!(
            out,
            "{word} -> {} [{categories}] ({}) class {class}",
            resolved.root, resolved.suffix
        );
    };

    let words: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
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
                stem(word);
            }
        }
    } else {
        for word in words {
            stem(word.as_str());
        }
    }
}

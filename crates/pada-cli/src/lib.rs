// pada-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use pada_kn::{PadaHandle, SuffixCatalog};

/// Word list file name looked up in the working directory.
const DEFAULT_WORDLIST: &str = "categorized.txt";

/// Environment variable naming the categorized word list.
const WORDLIST_ENV: &str = "PADA_WORDLIST";

/// Locate the categorized word list and create a PadaHandle.
///
/// Search order:
/// 1. `wordlist` argument (if provided)
/// 2. `PADA_WORDLIST` environment variable
/// 3. `categorized.txt` in the current working directory
pub fn load_handle(wordlist: Option<&str>) -> Result<PadaHandle, String> {
    let search_paths = build_search_paths(wordlist);

    for path in &search_paths {
        if path.is_file() {
            let text = read_text(path)?;
            log::debug!("loading word list from {}", path.display());
            return PadaHandle::from_categorized(&text)
                .map_err(|e| format!("failed to load {}: {e}", path.display()));
        }
    }

    Err(format!(
        "could not find a categorized word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

fn build_search_paths(wordlist: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = wordlist {
        paths.push(PathBuf::from(p));
    }
    if let Ok(env_path) = std::env::var(WORDLIST_ENV) {
        paths.push(PathBuf::from(env_path));
    }
    paths.push(PathBuf::from(DEFAULT_WORDLIST));
    paths
}

/// Load a suffix catalog from a JSON file.
pub fn load_catalog(path: &str) -> Result<SuffixCatalog, String> {
    let text = read_text(Path::new(path))?;
    SuffixCatalog::from_json(&text).map_err(|e| format!("{path}: {e}"))
}

/// Read an ignore list: one word per line, blank lines skipped.
pub fn load_ignore_list(path: &str) -> Result<Vec<String>, String> {
    let text = read_text(Path::new(path))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect())
}

/// Write the handle's ignore list, one word per line, sorted.
///
/// Nothing is written when the list is empty.
pub fn save_ignore_list(path: &str, handle: &PadaHandle) -> Result<(), String> {
    let mut words: Vec<&str> = handle.ignored_words().collect();
    if words.is_empty() {
        log::info!("no ignored words; {path} not written");
        return Ok(());
    }
    words.sort_unstable();
    let mut text = words.join("\n");
    text.push('\n');
    std::fs::write(path, text).map_err(|e| format!("failed to write {path}: {e}"))
}

/// Parse tab-separated `misspelled<TAB>expected` pairs.
///
/// Blank lines and lines starting with `#` are skipped, as are lines with
/// fewer than two fields. Fields after the second are ignored.
pub fn parse_pairs(text: &str) -> Vec<(String, String)> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split('\t').map(str::trim);
            match (fields.next(), fields.next()) {
                (Some(input), Some(expected)) if !expected.is_empty() => {
                    Some((input.to_string(), expected.to_string()))
                }
                _ => {
                    log::warn!("skipping line without a tab-separated pair: {line}");
                    None
                }
            }
        })
        .collect()
}

/// Read `misspelled<TAB>expected` pairs from a file; see [`parse_pairs`].
pub fn load_pairs(path: &str) -> Result<Vec<(String, String)>, String> {
    Ok(parse_pairs(&read_text(Path::new(path))?))
}

fn read_text(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

/// Extract an option value given as `--name=VALUE` or `NAME VALUE`.
///
/// `names` lists the accepted spellings, e.g. `["-w", "--wordlist"]`.
/// Returns `(value, remaining_args)`. Exits when the option has no value.
pub fn parse_option(args: &[String], names: &[&str]) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = inline_value(arg, names) {
            value = Some(val.to_string());
        } else if names.contains(&arg.as_str()) {
            match args.get(i + 1) {
                Some(next) => {
                    value = Some(next.clone());
                    skip_next = true;
                }
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Value of a `--name=VALUE` argument for one of the long `names`.
fn inline_value<'a>(arg: &'a str, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .filter(|name| name.starts_with("--"))
        .find_map(|name| arg.strip_prefix(name)?.strip_prefix('='))
}

/// Parse a `--wordlist=PATH` or `-w PATH` argument.
pub fn parse_wordlist_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, &["-w", "--wordlist"])
}

/// Parse a `--catalog=PATH` or `-c PATH` argument.
pub fn parse_catalog_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_option(args, &["-c", "--catalog"])
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

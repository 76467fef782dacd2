use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Token delimiters recognized in filename stems
    static ref DELIMITERS: Regex = Regex::new(r"[\s\-_.]+").unwrap();
}

/// Split a stem into tokens on whitespace, hyphen, underscore and period.
pub fn tokenize(stem: &str) -> Vec<&str> {
    DELIMITERS.split(stem).filter(|t| !t.is_empty()).collect()
}

/// Strip removal words from a stem and re-join the remaining tokens with
/// single spaces. Matching is whole-token and case-insensitive; a removal
/// word never matches inside a larger token.
pub fn clean_stem(stem: &str, remove_words: &[String]) -> String {
    let lowered: Vec<String> = remove_words.iter().map(|w| w.to_lowercase()).collect();
    tokenize(stem)
        .into_iter()
        .filter(|token| !lowered.contains(&token.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a cleaned stem to camelCase: first token lowercased, each
/// subsequent token capitalized, no separators.
pub fn to_camel_case(cleaned: &str) -> String {
    let mut words = cleaned.split_whitespace();
    let mut out = match words.next() {
        Some(first) => first.to_lowercase(),
        None => return String::new(),
    };
    for word in words {
        out.push_str(&capitalize(word));
    }
    out
}

/// Convert a cleaned stem to lowercase with single underscores.
pub fn to_lower_case(cleaned: &str) -> String {
    cleaned
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Capitalize each whitespace-separated word: first letter uppercased,
/// remainder lowercased.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().collect::<String>() + &rest
        }
    }
}

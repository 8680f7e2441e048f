//! Text Normalizer — turns raw extracted text into the canonical token stream.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9 ]").expect("valid character class"));

/// Lowercases, collapses whitespace runs to one space, then drops every
/// character outside `[a-z0-9 ]`. Never fails; garbage in yields an empty string.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let collapsed = WHITESPACE_RUN.replace_all(&lowered, " ");
    let stripped = NON_ALPHANUMERIC.replace_all(&collapsed, "");
    stripped.trim().to_string()
}

/// Whitespace-delimited tokens of normalized text.
///
/// Stripping can leave double spaces behind ("c - rust" → "c  rust"), so empty
/// pieces are dropped here.
pub fn tokens(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("Python\t\tDeveloper\n\nNeeded"), "python developer needed");
    }

    #[test]
    fn test_strips_punctuation_and_symbols() {
        assert_eq!(normalize("C++, Rust & Go!"), "c rust  go");
        assert_eq!(normalize("e-mail: jane@corp.io"), "email janecorpio");
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(normalize("5+ years, AWS S3"), "5 years aws s3");
    }

    #[test]
    fn test_non_ascii_letters_removed() {
        assert_eq!(normalize("Résumé naïve"), "rsum nave");
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
        assert_eq!(normalize("•••  ###"), "");
    }

    #[test]
    fn test_renormalizing_keeps_tokens() {
        let once = normalize("Senior Rust Engineer — Core Infra (Remote)");
        assert_eq!(once, "senior rust engineer  core infra remote");
        assert_eq!(tokens(&normalize(&once)), tokens(&once));
    }

    #[test]
    fn test_tokens_skip_double_spaces() {
        let text = normalize("C++ - Rust");
        assert_eq!(tokens(&text), vec!["c", "rust"]);
        assert!(tokens("").is_empty());
    }
}

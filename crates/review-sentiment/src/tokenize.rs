//! Word tokenization shared by the scorer and the term counter.

use std::sync::LazyLock;

use regex::Regex;

// A word starts with a word character and may carry apostrophes ("don't", "don’t").
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w'\x{2019}]*").expect("word regex is valid"));

const TYPOGRAPHIC_APOSTROPHE: char = '\u{2019}';

/// Raw word slices in order of appearance. Punctuation and whitespace split words.
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str())
}

/// Lowercase form of a raw word with `’` folded to `'`.
pub fn normalize_word(word: &str) -> String {
    word.replace(TYPOGRAPHIC_APOSTROPHE, "'").to_lowercase()
}

/// Lowercased words with trailing apostrophes removed.
pub fn tokenize(text: &str) -> Vec<String> {
    word_tokens(text)
        .map(|word| normalize_word(word).trim_end_matches('\'').to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

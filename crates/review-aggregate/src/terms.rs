//! Term frequency extraction for the word cloud.

use std::collections::HashMap;

use tracing::{debug, warn};

use review_model::{
    AnalysisOptions, DEFAULT_MIN_TOKEN_LEN, DEFAULT_TOP_TERMS, TermCount, TermFrequencyOutcome,
    TermFrequencyTable,
};
use review_sentiment::{normalize_word, word_tokens};

use crate::stopwords::is_stopword;

/// Tokenization and truncation settings for term counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermOptions {
    pub top_n: usize,
    pub min_token_len: usize,
    pub filter_stopwords: bool,
}

impl Default for TermOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_TERMS,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            filter_stopwords: true,
        }
    }
}

impl From<&AnalysisOptions> for TermOptions {
    fn from(options: &AnalysisOptions) -> Self {
        Self {
            top_n: options.top_terms,
            min_token_len: options.min_token_len,
            filter_stopwords: options.filter_stopwords,
        }
    }
}

/// Counts word occurrences across all reviews and keeps the `top_n` most
/// frequent, using the default tokenization settings.
pub fn extract_frequencies<S: AsRef<str>>(reviews: &[S], top_n: usize) -> TermFrequencyOutcome {
    extract_frequencies_with(
        reviews,
        &TermOptions {
            top_n,
            ..TermOptions::default()
        },
    )
}

/// Counts word occurrences across all reviews.
///
/// Non-empty reviews are joined with a space and split into words; counting
/// is case-insensitive and a trailing possessive `'s` is dropped. Ties keep
/// first-seen order. Returns `NoTextAvailable` when the joined text is blank
/// or every token was filtered out.
pub fn extract_frequencies_with<S: AsRef<str>>(
    reviews: &[S],
    options: &TermOptions,
) -> TermFrequencyOutcome {
    let text = reviews
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|review| !review.is_empty())
        .collect::<Vec<&str>>()
        .join(" ");
    if text.trim().is_empty() {
        warn!("no review text available for term frequencies");
        return TermFrequencyOutcome::NoTextAvailable;
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();
    for word in word_tokens(&text) {
        let Some(token) = normalize_token(word, options) else {
            continue;
        };
        match index.get(&token) {
            Some(&slot) => entries[slot].1 += 1,
            None => {
                index.insert(token.clone(), entries.len());
                entries.push((token, 1));
            }
        }
    }
    if entries.is_empty() {
        warn!("every review token was filtered out of term frequencies");
        return TermFrequencyOutcome::NoTextAvailable;
    }

    let distinct = entries.len();
    // Stable sort keeps first-seen order among equal counts.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(options.top_n);
    let max_count = entries.first().map_or(1, |entry| entry.1).max(1);
    let terms = entries
        .into_iter()
        .map(|(term, count)| TermCount {
            term,
            count,
            weight: count as f64 / max_count as f64,
        })
        .collect::<Vec<_>>();
    debug!(distinct, kept = terms.len(), "term frequencies extracted");
    TermFrequencyOutcome::Terms(TermFrequencyTable { terms })
}

fn normalize_token(word: &str, options: &TermOptions) -> Option<String> {
    let lower = normalize_word(word);
    let stripped = lower.strip_suffix("'s").unwrap_or(&lower);
    let token = stripped.trim_matches('\'');
    if token.chars().count() < options.min_token_len {
        return None;
    }
    if options.filter_stopwords && is_stopword(token) {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_case_insensitively() {
        let outcome = extract_frequencies(&["Great phone", "great price, GREAT battery"], 10);
        let table = outcome.table().expect("terms");
        assert_eq!(table.get("great").map(|t| t.count), Some(3));
        assert_eq!(table.top().map(|t| t.term.as_str()), Some("great"));
    }

    #[test]
    fn typographic_possessive_is_stripped() {
        let outcome = extract_frequencies(&["the seller\u{2019}s reply", "seller was quick"], 10);
        let table = outcome.table().expect("terms");
        assert_eq!(table.get("seller").map(|t| t.count), Some(2));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let outcome = extract_frequencies(&["zebra apple mango", "mango apple zebra"], 10);
        let terms: Vec<&str> = outcome
            .table()
            .expect("terms")
            .iter()
            .map(|t| t.term.as_str())
            .collect();
        assert_eq!(terms, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn truncates_to_top_n() {
        let outcome = extract_frequencies(&["alpha alpha beta beta beta gamma"], 2);
        let table = outcome.into_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.terms[0].term, "beta");
        assert_eq!(table.terms[1].term, "alpha");
    }

    #[test]
    fn weights_are_relative_to_top_term() {
        let outcome = extract_frequencies(&["fast fast fast fast cheap"], 10);
        let table = outcome.into_table();
        assert_eq!(table.terms[0].weight, 1.0);
        assert!((table.terms[1].weight - 0.25).abs() < 1e-12);
    }

    #[test]
    fn drops_stopwords_short_tokens_and_possessives() {
        let outcome = extract_frequencies(&["The seller's box is a 5 star box"], 10);
        let table = outcome.into_table();
        let terms: Vec<&str> = table.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["box", "seller", "star"]);
    }

    #[test]
    fn stopwords_can_be_kept() {
        let options = TermOptions {
            filter_stopwords: false,
            ..TermOptions::default()
        };
        let outcome = extract_frequencies_with(&["it was the best"], &options);
        assert_eq!(outcome.into_table().len(), 4);
    }

    #[test]
    fn blank_text_signals_no_text() {
        assert!(extract_frequencies(&["", "", ""], 100).is_no_text_available());
        assert!(extract_frequencies(&["   ", "\t"], 100).is_no_text_available());
        assert!(extract_frequencies::<&str>(&[], 100).is_no_text_available());
    }

    #[test]
    fn only_stopwords_signals_no_text() {
        assert!(extract_frequencies(&["it was the"], 100).is_no_text_available());
    }
}

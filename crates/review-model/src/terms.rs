//! Term frequency data consumed by the word-cloud renderer.

use serde::{Deserialize, Serialize};

/// One normalized token with its occurrence count.
///
/// `weight` is `count / max_count` across the table, i.e. the relative size
/// the renderer draws the token at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
    pub weight: f64,
}

/// Most frequent tokens, ordered by descending count then first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermFrequencyTable {
    pub terms: Vec<TermCount>,
}

impl TermFrequencyTable {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<&TermCount> {
        self.terms.iter().find(|entry| entry.term == term)
    }

    pub fn top(&self) -> Option<&TermCount> {
        self.terms.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TermCount> {
        self.terms.iter()
    }
}

/// Result of term extraction.
///
/// `NoTextAvailable` is not a failure: the word cloud is skipped with a
/// warning while every other output is still produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "table", rename_all = "snake_case")]
pub enum TermFrequencyOutcome {
    Terms(TermFrequencyTable),
    NoTextAvailable,
}

impl TermFrequencyOutcome {
    pub fn is_no_text_available(&self) -> bool {
        matches!(self, TermFrequencyOutcome::NoTextAvailable)
    }

    pub fn table(&self) -> Option<&TermFrequencyTable> {
        match self {
            TermFrequencyOutcome::Terms(table) => Some(table),
            TermFrequencyOutcome::NoTextAvailable => None,
        }
    }

    /// The extracted table, or an empty one when no text was available.
    pub fn into_table(self) -> TermFrequencyTable {
        match self {
            TermFrequencyOutcome::Terms(table) => table,
            TermFrequencyOutcome::NoTextAvailable => TermFrequencyTable::default(),
        }
    }
}

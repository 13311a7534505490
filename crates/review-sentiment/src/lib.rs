//! Polarity scoring and label classification.
//!
//! The pipeline only depends on the [`PolarityScorer`] capability. The
//! bundled [`LexiconScorer`] averages per-word weights from an English
//! review lexicon, with negation and intensifier handling; any other scorer
//! that keeps its output in `[-1, 1]` can be swapped in.

pub mod classify;
pub mod lexicon;
pub mod scorer;
pub mod tokenize;

pub use classify::{LabelClassifier, classify};
pub use lexicon::{Lexicon, LexiconError, LexiconScorer};
pub use scorer::{PolarityScorer, sanitize_score};
pub use tokenize::{normalize_word, tokenize, word_tokens};

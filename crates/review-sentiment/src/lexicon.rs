//! English review lexicon and the lexicon-averaging scorer.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::scorer::{PolarityScorer, sanitize_score};
use crate::tokenize::tokenize;

/// Weight applied to a polar word inside a negation window ("not good").
const NEGATION_FACTOR: f64 = -0.5;
/// Number of following tokens a negation reaches.
const DEFAULT_NEGATION_WINDOW: usize = 3;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("clean", 0.37),
    ("comfortable", 0.4),
    ("convenient", 0.3),
    ("delicious", 1.0),
    ("delighted", 0.7),
    ("easy", 0.43),
    ("efficient", 0.4),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("excellent", 1.0),
    ("exceptional", 0.67),
    ("fabulous", 0.4),
    ("fantastic", 0.4),
    ("fast", 0.2),
    ("fine", 0.42),
    ("flawless", 0.8),
    ("fresh", 0.3),
    ("friendly", 0.38),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("gorgeous", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("impressed", 0.6),
    ("impressive", 0.6),
    ("incredible", 0.9),
    ("like", 0.2),
    ("liked", 0.3),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("loves", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("perfectly", 1.0),
    ("pleasant", 0.73),
    ("pleased", 0.5),
    ("polite", 0.4),
    ("positive", 0.23),
    ("quick", 0.33),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("reliable", 0.5),
    ("satisfied", 0.5),
    ("smooth", 0.4),
    ("solid", 0.3),
    ("sturdy", 0.35),
    ("superb", 1.0),
    ("thanks", 0.2),
    ("useful", 0.3),
    ("valuable", 0.5),
    ("well", 0.3),
    ("wonderful", 1.0),
    ("worth", 0.3),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("broke", -0.4),
    ("broken", -0.4),
    ("cheap", -0.2),
    ("cold", -0.3),
    ("complaint", -0.4),
    ("confusing", -0.4),
    ("damaged", -0.5),
    ("defective", -0.6),
    ("dirty", -0.6),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disgusting", -1.0),
    ("dislike", -0.5),
    ("expensive", -0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("faulty", -0.5),
    ("frustrating", -0.4),
    ("hate", -0.8),
    ("hated", -0.8),
    ("horrible", -1.0),
    ("late", -0.3),
    ("mediocre", -0.5),
    ("mess", -0.4),
    ("negative", -0.3),
    ("noisy", -0.4),
    ("overpriced", -0.6),
    ("poor", -0.4),
    ("poorly", -0.4),
    ("problem", -0.3),
    ("refund", -0.2),
    ("rude", -0.3),
    ("sad", -0.5),
    ("slow", -0.3),
    ("sorry", -0.5),
    ("stale", -0.5),
    ("terrible", -1.0),
    ("unhappy", -0.6),
    ("unhelpful", -0.5),
    ("unreliable", -0.5),
    ("upset", -0.5),
    ("useless", -0.5),
    ("waste", -0.6),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.3),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("super", 1.3),
    ("too", 1.2),
    ("totally", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &[
    "barely", "cannot", "hardly", "neither", "never", "no", "nobody", "none", "nor", "not",
    "nothing", "dont", "didnt", "doesnt", "isnt", "wasnt", "wont", "cant",
];

/// Errors loading a custom lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon row: {0}")]
    Csv(#[from] csv::Error),

    #[error("polarity {polarity} for '{word}' is outside [-1, 1]")]
    OutOfRange { word: String, polarity: f64 },

    #[error("lexicon contains no words")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct LexiconRow {
    word: String,
    polarity: f64,
}

/// Word polarity weights plus negation and intensifier vocabularies.
#[derive(Debug, Clone)]
pub struct Lexicon {
    polarity: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// Built-in English lexicon tuned for product and service reviews.
    pub fn english() -> Self {
        let mut lexicon = Self::with_modifiers();
        for (word, polarity) in POSITIVE_WORDS.iter().chain(NEGATIVE_WORDS) {
            lexicon.polarity.insert((*word).to_string(), *polarity);
        }
        lexicon
    }

    /// Empty polarity table with the English negations and intensifiers.
    fn with_modifiers() -> Self {
        Self {
            polarity: HashMap::new(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(word, factor)| ((*word).to_string(), *factor))
                .collect(),
            negations: NEGATIONS.iter().map(|word| (*word).to_string()).collect(),
        }
    }

    /// Loads `word,polarity` rows from a CSV file with a header row.
    ///
    /// The file replaces the built-in polarity table; negations and
    /// intensifiers stay the English defaults.
    pub fn from_csv_path(path: &Path) -> Result<Self, LexiconError> {
        let file = File::open(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_csv_reader(file)?;
        debug!(path = %path.display(), words = lexicon.len(), "loaded custom lexicon");
        Ok(lexicon)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut lexicon = Self::with_modifiers();
        for row in csv_reader.deserialize::<LexiconRow>() {
            let row = row?;
            if row.word.is_empty() {
                continue;
            }
            if !(-1.0..=1.0).contains(&row.polarity) {
                return Err(LexiconError::OutOfRange {
                    word: row.word,
                    polarity: row.polarity,
                });
            }
            lexicon.polarity.insert(row.word.to_lowercase(), row.polarity);
        }
        if lexicon.polarity.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(lexicon)
    }

    /// Adds or replaces one polarity entry. Out-of-range weights are clamped.
    #[must_use]
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.polarity
            .insert(word.to_lowercase(), sanitize_score(polarity));
        self
    }

    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.polarity.get(word).copied()
    }

    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    /// Number of polar words.
    pub fn len(&self) -> usize {
        self.polarity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }
}

/// Averages lexicon weights over the polar words of a text.
///
/// An intensifier scales the next polar word; a negation flips and damps the
/// first polar word within the following few tokens. Texts without polar
/// words, including the empty string, score `0.0`.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Lexicon,
    negation_window: usize,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(Lexicon::english())
    }
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }

    #[must_use]
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut hits = 0usize;
        let mut modifier: Option<f64> = None;
        let mut negation_left = 0usize;

        for token in tokenize(text) {
            if self.lexicon.is_negation(&token) {
                negation_left = self.negation_window;
                continue;
            }
            if let Some(factor) = self.lexicon.intensifier(&token) {
                modifier = Some(modifier.unwrap_or(1.0) * factor);
                continue;
            }
            if let Some(polarity) = self.lexicon.polarity(&token) {
                let mut weight = polarity * modifier.take().unwrap_or(1.0);
                if negation_left > 0 {
                    weight *= NEGATION_FACTOR;
                    negation_left = 0;
                }
                total += weight;
                hits += 1;
                continue;
            }
            modifier = None;
            negation_left = negation_left.saturating_sub(1);
        }

        if hits == 0 {
            0.0
        } else {
            sanitize_score(total / hits as f64)
        }
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

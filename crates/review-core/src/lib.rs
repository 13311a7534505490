//! Review sentiment pipeline.
//!
//! Data flows one way: validated table, polarity scoring, labelling,
//! aggregation, term extraction. Each stage is a pure function of the
//! previous stage's output; nothing here holds global state.

pub mod error;
pub mod pipeline;
pub mod scoring;

pub use error::{AnalysisError, Result};
pub use pipeline::{AnalysisResult, ReviewPipeline, analyze_file};
pub use scoring::{augment_frame, score_reviews};

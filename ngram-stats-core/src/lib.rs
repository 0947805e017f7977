//! N-gram frequency statistics over text corpora.
//!
//! This crate provides the whole text-to-n-gram pipeline:
//! - Sentence segmentation with abbreviation-aware boundary correction
//! - Clause ("idea") splitting and word tokenization
//! - Counting of every n-gram of order 1 to N
//! - Ranking of the most frequent n-grams with their percentages
//!
//! Reading documents is left to the caller; the `io` module offers
//! a file-based source for convenience.

/// Sentence, idea and word splitting.
pub mod text;

/// Frequency tables, counting, ranking and the pipeline itself.
pub mod model;

/// File-system document sources.
pub mod io;

/// Error type shared by the whole crate.
pub mod error;

pub use error::PipelineError;
pub use model::{NGramPipeline, PipelineConfig, Report};

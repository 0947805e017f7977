//! Text preparation: raw document → sentences → ideas → words.

/// Sentence segmentation with abbreviation-aware boundary correction.
///
/// Boundary detection is pluggable through `BoundaryProvider`.
pub mod segmenter;

/// Clause ("idea") splitting on commas and semicolons.
pub mod ideas;

/// Normalization of a clause into lowercase ASCII words.
pub mod tokenizer;

pub use ideas::split_ideas;
pub use segmenter::{BoundaryProvider, PunctuationBoundaries, SentenceSegmenter, ABBREVIATIONS};
pub use tokenizer::tokenize;

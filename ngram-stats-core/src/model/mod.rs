//! N-gram counting and ranking.
//!
//! This module provides:
//! - Per-order frequency tables (`FrequencyTable`)
//! - Multi-order counting over token sequences (`NGramCounter`)
//! - Ranking and percentage reports (`Report`)
//! - Pipeline configuration (`PipelineConfig`)
//! - The document-to-report pipeline (`NGramPipeline`)

/// Occurrence counts of the n-grams of a single order.
pub mod frequency_table;

/// Sliding-window extraction of every order from 1 to the maximum order.
pub mod counter;

/// Sorting, truncation and percentage computation.
pub mod ranker;

/// Validated pipeline parameters.
pub mod config;

/// Accumulate-then-report pipeline with an explicit state.
pub mod pipeline;

pub use config::PipelineConfig;
pub use counter::NGramCounter;
pub use frequency_table::FrequencyTable;
pub use pipeline::{NGramPipeline, PipelineState, PipelineStats};
pub use ranker::{rank, OrderReport, RankedEntry, Report};

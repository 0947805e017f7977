use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::config::PipelineConfig;
use super::counter::NGramCounter;
use super::ranker::{rank, Report};
use crate::error::PipelineError;
use crate::text::{split_ideas, tokenize, BoundaryProvider, PunctuationBoundaries, SentenceSegmenter};

/// Lifecycle of a pipeline.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineState {
	/// Documents are accepted and counted.
	Accumulating,
	/// A report was produced; tables are read-only until `resume()`.
	Reported,
}

/// Amount of input processed so far.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineStats {
	pub documents: usize,
	pub sentences: usize,
	pub ideas: usize,
}

/// Text → n-gram frequency pipeline.
///
/// Each document is segmented into sentences, each sentence into ideas,
/// each idea into words, and every n-gram of every idea is counted.
/// N-grams never span two ideas.
///
/// # Responsibilities
/// - Own the frequency tables of orders `1..=max_order`
/// - Track the ACCUMULATING / REPORTED state
/// - Produce ranked reports on demand
pub struct NGramPipeline<B = PunctuationBoundaries> {
	config: PipelineConfig,
	segmenter: SentenceSegmenter<B>,
	counter: NGramCounter,
	state: PipelineState,
	stats: PipelineStats,
}

impl NGramPipeline {
	/// Creates an empty pipeline using punctuation-based sentence boundaries.
	pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
		Self::with_segmenter(config, SentenceSegmenter::default())
	}
}

impl<B: BoundaryProvider> NGramPipeline<B> {
	/// Creates an empty pipeline with a custom sentence boundary provider.
	pub fn with_boundaries(config: PipelineConfig, boundaries: B) -> Result<Self, PipelineError> {
		Self::with_segmenter(config, SentenceSegmenter::new(boundaries))
	}

	/// Creates an empty pipeline with a fully configured segmenter.
	pub fn with_segmenter(config: PipelineConfig, segmenter: SentenceSegmenter<B>) -> Result<Self, PipelineError> {
		Ok(Self {
			config,
			segmenter,
			counter: NGramCounter::new(config.max_order())?,
			state: PipelineState::Accumulating,
			stats: PipelineStats::default(),
		})
	}

	pub fn config(&self) -> &PipelineConfig {
		&self.config
	}

	pub fn state(&self) -> PipelineState {
		self.state
	}

	pub fn stats(&self) -> PipelineStats {
		self.stats
	}

	/// Read access to the raw frequency tables.
	pub fn counter(&self) -> &NGramCounter {
		&self.counter
	}

	/// Counts the n-grams of one raw document.
	///
	/// Line breaks are turned into spaces before segmentation.
	///
	/// # Errors
	/// Returns `AlreadyReported` once `report()` was called, until `resume()`.
	pub fn add_document(&mut self, document: &str) -> Result<(), PipelineError> {
		if self.state == PipelineState::Reported {
			return Err(PipelineError::AlreadyReported);
		}

		let text = document.replace(['\n', '\r'], " ");
		let sentences = self.segmenter.segment(&text);
		let mut ideas = 0;
		for sentence in &sentences {
			for idea in split_ideas(sentence) {
				self.counter.add_tokens(&tokenize(idea));
				ideas += 1;
			}
		}

		self.stats.documents += 1;
		self.stats.sentences += sentences.len();
		self.stats.ideas += ideas;
		debug!("Document {}: {} sentences, {} ideas", self.stats.documents, sentences.len(), ideas);
		Ok(())
	}

	/// Counts every document of `documents`, stopping at the first error.
	pub fn add_documents<I, S>(&mut self, documents: I) -> Result<(), PipelineError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for document in documents {
			self.add_document(document.as_ref())?;
		}
		Ok(())
	}

	/// Ranks every order with the configured top count, without changing state.
	///
	/// Calling it twice without new input gives identical reports.
	pub fn snapshot(&self) -> Report {
		self.snapshot_top(self.config.top_count())
	}

	/// Ranks every order keeping `top` entries per order.
	///
	/// Orders longer than every idea seen are left implicit (see `Report::order`).
	pub fn snapshot_top(&self, top: usize) -> Report {
		Report {
			top_count: top,
			max_order: self.config.max_order(),
			orders: self.counter.tables().iter().map(|table| rank(table, top)).collect(),
		}
	}

	/// Produces the final report and switches to REPORTED.
	pub fn report(&mut self) -> Report {
		let report = self.snapshot();
		for order in &report.orders {
			info!("{}-grams: {} windows, {} reported", order.order, order.total, order.entries.len());
		}
		if report.orders.len() < report.max_order {
			info!("{}-grams and longer: no windows", report.orders.len() + 1);
		}
		self.state = PipelineState::Reported;
		report
	}

	/// Switches back to ACCUMULATING so that more documents can be added.
	///
	/// Counts are kept.
	pub fn resume(&mut self) {
		self.state = PipelineState::Accumulating;
	}
}

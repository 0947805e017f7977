use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Parameters of a pipeline, fixed for its whole lifetime.
///
/// # Invariants
/// - `max_order >= 1`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
	max_order: usize,
	top_count: usize,
}

impl PipelineConfig {
	/// Builds a configuration.
	///
	/// # Errors
	/// Returns `InvalidMaxOrder` if `max_order < 1`. Values are never clamped.
	pub fn new(max_order: usize, top_count: usize) -> Result<Self, PipelineError> {
		if max_order < 1 {
			return Err(PipelineError::InvalidMaxOrder(max_order.to_string()));
		}
		Ok(Self { max_order, top_count })
	}

	/// Builds a configuration from textual values (prompt answers, query
	/// parameters, environment variables).
	///
	/// Surrounding whitespace is ignored.
	///
	/// # Errors
	/// - `InvalidMaxOrder` if `max_order` is not an integer >= 1
	/// - `InvalidTopCount` if `top_count` is not an integer >= 0
	pub fn parse(max_order: &str, top_count: &str) -> Result<Self, PipelineError> {
		let max_order = max_order.trim();
		let top_count = top_count.trim();

		let n = max_order
			.parse::<usize>()
			.map_err(|_| PipelineError::InvalidMaxOrder(max_order.to_owned()))?;
		let t = parse_top_count(top_count)?;
		Self::new(n, t)
	}

	pub fn max_order(&self) -> usize {
		self.max_order
	}

	pub fn top_count(&self) -> usize {
		self.top_count
	}
}

/// Parses a number of top entries, rejecting negative or non-numeric values.
pub fn parse_top_count(value: &str) -> Result<usize, PipelineError> {
	let value = value.trim();
	value.parse::<usize>().map_err(|_| PipelineError::InvalidTopCount(value.to_owned()))
}

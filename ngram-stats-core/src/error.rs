use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the n-gram statistics pipeline.
///
/// Empty inputs and orders without any observed n-gram are not errors:
/// they produce empty reports.
#[derive(Debug, Error)]
pub enum PipelineError {
	/// The maximum n-gram order is missing, not a number, or lower than 1.
	#[error("invalid max order '{0}': must be an integer >= 1")]
	InvalidMaxOrder(String),

	/// The number of top entries to report is not a non-negative integer.
	#[error("invalid top count '{0}': must be an integer >= 0")]
	InvalidTopCount(String),

	/// A document was fed after the report was produced, without `resume()`.
	#[error("pipeline already reported, call resume() before adding documents")]
	AlreadyReported,

	/// Two tables or counters with different orders were merged.
	#[error("order mismatch: expected {expected}, found {found}")]
	OrderMismatch { expected: usize, found: usize },

	/// A document source could not be read.
	#[error("failed to read '{}': {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

use std::borrow::Cow;

use super::frequency_table::FrequencyTable;
use crate::error::PipelineError;

/// Counts contiguous word sequences of every order from 1 to `max_order`.
///
/// Holds one `FrequencyTable` per order, created when the first idea long
/// enough for that order is added. Orders without a table have no
/// occurrence. Counts only grow while ideas are added; tables are never reset.
///
/// # Invariants
/// - `max_order >= 1`, fixed at construction
/// - `tables[k - 1]` holds the k-grams
/// - `tables.len()` is at most `max_order` and at most the longest idea seen
#[derive(Clone, Debug)]
pub struct NGramCounter {
	max_order: usize,
	tables: Vec<FrequencyTable>,
}

impl NGramCounter {
	/// Creates a counter for orders `1..=max_order`.
	///
	/// # Errors
	/// Returns `InvalidMaxOrder` if `max_order < 1`.
	pub fn new(max_order: usize) -> Result<Self, PipelineError> {
		if max_order < 1 {
			return Err(PipelineError::InvalidMaxOrder(max_order.to_string()));
		}
		Ok(Self { max_order, tables: Vec::new() })
	}

	pub fn max_order(&self) -> usize {
		self.max_order
	}

	/// Returns the table of `order`, `None` outside `1..=max_order`.
	///
	/// Orders never observed give an owned empty table.
	pub fn table(&self, order: usize) -> Option<Cow<'_, FrequencyTable>> {
		if order < 1 || order > self.max_order {
			return None;
		}
		Some(match self.tables.get(order - 1) {
			Some(table) => Cow::Borrowed(table),
			None => Cow::Owned(FrequencyTable::new(order)),
		})
	}

	/// Tables created so far, from 1-grams upwards.
	///
	/// Every order past the last one is empty.
	pub fn tables(&self) -> &[FrequencyTable] {
		&self.tables
	}

	fn grow(&mut self, orders: usize) {
		while self.tables.len() < orders {
			self.tables.push(FrequencyTable::new(self.tables.len() + 1));
		}
	}

	/// Adds every n-gram of one idea.
	///
	/// Orders longer than the idea are skipped; an empty idea adds nothing.
	pub fn add_tokens<S: AsRef<str>>(&mut self, tokens: &[S]) {
		let longest = tokens.len().min(self.max_order);
		self.grow(longest);
		for (i, table) in self.tables.iter_mut().take(longest).enumerate() {
			for window in tokens.windows(i + 1) {
				let ngram = window.iter().map(|t| t.as_ref()).collect::<Vec<&str>>().join(" ");
				table.increment(ngram);
			}
		}
	}

	/// Adds the counts of another counter, table by table.
	///
	/// Merging is commutative on counts, so partial counters built from
	/// separate chunks of input can be reduced in any order.
	///
	/// # Errors
	/// Returns `OrderMismatch` if the maximum orders differ.
	pub fn merge(&mut self, other: &Self) -> Result<(), PipelineError> {
		if self.max_order != other.max_order {
			return Err(PipelineError::OrderMismatch { expected: self.max_order, found: other.max_order });
		}
		self.grow(other.tables.len());
		for (table, other_table) in self.tables.iter_mut().zip(&other.tables) {
			table.merge(other_table)?;
		}
		Ok(())
	}
}

use std::collections::HashMap;

use crate::error::PipelineError;

/// Occurrence record of one n-gram inside a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occurrence {
	/// Number of times the n-gram was observed.
	pub count: usize,
	/// Rank of the n-gram among the distinct keys of the table, by first observation.
	pub first_seen: usize,
}

/// Occurrence counts of every n-gram of a single order.
///
/// Keys are n-grams with their words joined by single spaces.
///
/// # Invariants
/// - Every count is >= 1
/// - `total` is the sum of all counts
/// - `first_seen` values are distinct and lower than `len()`
#[derive(Clone, Debug)]
pub struct FrequencyTable {
	order: usize,
	counts: HashMap<String, Occurrence>,
	total: usize,
}

impl FrequencyTable {
	/// Creates an empty table for n-grams of `order` words.
	pub fn new(order: usize) -> Self {
		Self { order, counts: HashMap::new(), total: 0 }
	}

	pub fn order(&self) -> usize {
		self.order
	}

	/// Sum of all counts, i.e. the number of windows observed.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Returns the count of `ngram`, 0 if never observed.
	pub fn count(&self, ngram: &str) -> usize {
		self.counts.get(ngram).map_or(0, |o| o.count)
	}

	/// Records one occurrence of `ngram`.
	///
	/// Inserts it with a count of 1 if it is new.
	pub fn increment(&mut self, ngram: String) {
		self.add(ngram, 1);
	}

	fn add(&mut self, ngram: String, count: usize) {
		let next = self.counts.len();
		self.counts.entry(ngram).or_insert(Occurrence { count: 0, first_seen: next }).count += count;
		self.total += count;
	}

	/// Iterates over `(ngram, occurrence)` pairs in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, Occurrence)> {
		self.counts.iter().map(|(k, o)| (k.as_str(), *o))
	}

	/// Adds the counts of `other` to this table.
	///
	/// N-grams unknown to `self` are ranked after the existing ones,
	/// keeping their relative order from `other`.
	///
	/// # Errors
	/// Returns `OrderMismatch` if the tables have different orders.
	pub fn merge(&mut self, other: &Self) -> Result<(), PipelineError> {
		if self.order != other.order {
			return Err(PipelineError::OrderMismatch { expected: self.order, found: other.order });
		}

		let mut entries: Vec<(&String, &Occurrence)> = other.counts.iter().collect();
		entries.sort_by_key(|(_, o)| o.first_seen);
		for (ngram, occurrence) in entries {
			self.add(ngram.clone(), occurrence.count);
		}

		Ok(())
	}
}

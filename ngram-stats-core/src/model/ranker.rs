use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::frequency_table::{FrequencyTable, Occurrence};

/// One line of a report: an n-gram, its count and its share of the order total.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RankedEntry {
	pub ngram: String,
	pub count: usize,
	/// `100 * count / total` of the entry's order, in `(0, 100]`.
	pub percentage: f64,
}

/// Top entries of a single order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderReport {
	pub order: usize,
	/// Number of windows of this order observed in the whole input.
	pub total: usize,
	/// Sorted by count descending, ties by first occurrence.
	pub entries: Vec<RankedEntry>,
}

/// Ranked frequencies for every order from 1 to the maximum order.
///
/// `orders` holds orders `1..=orders.len()`; every order after it, up to
/// `max_order`, had no n-gram and is reported empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Report {
	pub top_count: usize,
	pub max_order: usize,
	pub orders: Vec<OrderReport>,
}

impl Report {
	/// Report of `order`, `None` outside `1..=max_order`.
	pub fn order(&self, order: usize) -> Option<Cow<'_, OrderReport>> {
		if order < 1 || order > self.max_order {
			return None;
		}
		Some(match self.orders.get(order - 1) {
			Some(report) => Cow::Borrowed(report),
			None => Cow::Owned(OrderReport { order, total: 0, entries: Vec::new() }),
		})
	}

	/// True when no order has any entry.
	pub fn is_empty(&self) -> bool {
		self.orders.iter().all(|r| r.entries.is_empty())
	}
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for order in &self.orders {
			writeln!(f, "The top {} {}-grams:", self.top_count, order.order)?;
			for entry in &order.entries {
				writeln!(f, "\"{}\" with frequency = {} ({:.2}%)", entry.ngram, entry.count, entry.percentage)?;
			}
			writeln!(f)?;
		}

		let first_empty = self.orders.len() + 1;
		if first_empty == self.max_order {
			writeln!(f, "The top {} {}-grams:\n", self.top_count, first_empty)?;
		} else if first_empty < self.max_order {
			writeln!(f, "The top {} {}-grams to {}-grams:\n", self.top_count, first_empty, self.max_order)?;
		}
		Ok(())
	}
}

/// Ranks a table and keeps its `top` most frequent n-grams.
///
/// Entries are sorted by count descending; equal counts keep the order in
/// which the n-grams were first observed. A table with a total of 0
/// yields an empty list.
pub fn rank(table: &FrequencyTable, top: usize) -> OrderReport {
	let total = table.total();
	if total == 0 {
		return OrderReport { order: table.order(), total, entries: Vec::new() };
	}

	let mut sorted: Vec<(&str, Occurrence)> = table.iter().collect();
	sorted.sort_by(|(_, a), (_, b)| b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen)));

	let entries = sorted
		.into_iter()
		.take(top)
		.map(|(ngram, occurrence)| RankedEntry {
			ngram: ngram.to_owned(),
			count: occurrence.count,
			percentage: 100.0 * occurrence.count as f64 / total as f64,
		})
		.collect();

	OrderReport { order: table.order(), total, entries }
}

use std::sync::LazyLock;

use regex::Regex;

/// Everything that is not an ASCII letter, a clause separator or whitespace.
static NOISE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^a-zA-Z,;\s]").expect("Failed to build regex"));

/// Splits a clause into lowercase words.
///
/// - Removes every character that is not an ASCII letter, `,`, `;` or whitespace
/// - Lowercases and trims the remaining text
/// - Splits on whitespace runs
///
/// An empty or punctuation-only clause gives an empty vector.
pub fn tokenize(fragment: &str) -> Vec<String> {
	let cleaned = NOISE.replace_all(fragment, "").to_lowercase();
	cleaned.split_whitespace().map(str::to_owned).collect()
}

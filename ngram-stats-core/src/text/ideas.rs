/// Splits a sentence into ideas (clauses) on `,` and `;`.
///
/// Separators are discarded. Adjacent separators produce empty ideas,
/// which tokenize to nothing downstream.
pub fn split_ideas(sentence: &str) -> Vec<&str> {
	if !sentence.contains([',', ';']) {
		return vec![sentence];
	}
	sentence.split([',', ';']).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sentence_without_separator_is_one_idea() {
		assert_eq!(split_ideas("The cat sat."), vec!["The cat sat."]);
	}

	#[test]
	fn splits_on_commas() {
		assert_eq!(
			split_ideas("I came, I saw, I conquered."),
			vec!["I came", " I saw", " I conquered."]
		);
	}

	#[test]
	fn splits_on_semicolons_and_keeps_empty_ideas() {
		assert_eq!(split_ideas("a;b,,c"), vec!["a", "b", "", "c"]);
	}

	#[test]
	fn trailing_separator_gives_trailing_empty_idea() {
		assert_eq!(split_ideas("end;"), vec!["end", ""]);
	}
}

use log::trace;

/// Abbreviations whose period must not end a sentence.
pub const ABBREVIATIONS: [&str; 7] = ["Dr.", "Prof.", "Mr.", "Mrs.", "Ms.", "Jr.", "Ph.D."];

/// Locates candidate sentence ends in a text.
///
/// Implementations return byte offsets, strictly increasing, each on a
/// `char` boundary. When the text is not empty the last offset must be
/// `text.len()`, so that every character belongs to exactly one span.
pub trait BoundaryProvider {
	fn boundaries(&self, text: &str) -> Vec<usize>;
}

/// Rule-based sentence boundaries driven by terminal punctuation.
///
/// A boundary follows a run of `.`, `?` or `!`, optional closing quotes or
/// brackets, and at least one whitespace character. It is placed after the
/// whitespace, so sentences keep their trailing spaces.
///
/// A run made only of periods does not break when the next visible
/// character continues the sentence (lowercase letter, digit, `,` or `;`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationBoundaries;

impl PunctuationBoundaries {
	fn is_terminator(c: char) -> bool {
		matches!(c, '.' | '?' | '!')
	}

	fn is_closing(c: char) -> bool {
		matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{2019}' | '\u{201D}')
	}

	fn continues_sentence(c: char) -> bool {
		c.is_lowercase() || c.is_ascii_digit() || c == ',' || c == ';'
	}
}

impl BoundaryProvider for PunctuationBoundaries {
	fn boundaries(&self, text: &str) -> Vec<usize> {
		let chars: Vec<(usize, char)> = text.char_indices().collect();
		let mut offsets = Vec::new();

		let mut i = 0;
		while i < chars.len() {
			if !Self::is_terminator(chars[i].1) {
				i += 1;
				continue;
			}

			// Terminator run, e.g. "...", "?!"
			let mut only_periods = true;
			let mut j = i;
			while j < chars.len() && Self::is_terminator(chars[j].1) {
				only_periods &= chars[j].1 == '.';
				j += 1;
			}
			while j < chars.len() && Self::is_closing(chars[j].1) {
				j += 1;
			}
			let spaces = j;
			while j < chars.len() && chars[j].1.is_whitespace() {
				j += 1;
			}

			if j == chars.len() {
				offsets.push(text.len());
				break;
			}

			// "3.14", "Ph.D" or "e.g. the"
			let glued = j == spaces;
			if glued || (only_periods && Self::continues_sentence(chars[j].1)) {
				i = j;
				continue;
			}

			offsets.push(chars[j].0);
			i = j;
		}

		if !text.is_empty() && offsets.last() != Some(&text.len()) {
			offsets.push(text.len());
		}
		offsets
	}
}

/// Splits a text into sentences, merging spans cut by abbreviations.
///
/// Each candidate span (previous candidate to current candidate) is
/// checked for an abbreviation. A span containing one is not emitted:
/// it is carried over and prefixed to the next accepted sentence.
/// A span still pending after the last candidate is emitted as a final
/// sentence, so no text is lost.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter<B = PunctuationBoundaries> {
	boundaries: B,
	abbreviations: Vec<String>,
}

impl Default for SentenceSegmenter {
	fn default() -> Self {
		Self::new(PunctuationBoundaries)
	}
}

impl<B: BoundaryProvider> SentenceSegmenter<B> {
	/// Creates a segmenter using `boundaries` and the default abbreviation list.
	pub fn new(boundaries: B) -> Self {
		Self {
			boundaries,
			abbreviations: ABBREVIATIONS.iter().map(|a| (*a).to_owned()).collect(),
		}
	}

	/// Replaces the abbreviation list.
	pub fn with_abbreviations<I, S>(mut self, abbreviations: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.abbreviations = abbreviations.into_iter().map(Into::into).collect();
		self
	}

	fn has_abbreviation(&self, span: &str) -> bool {
		!span.is_empty() && self.abbreviations.iter().any(|a| span.contains(a.as_str()))
	}

	/// Returns the sentences of `text`, in order, as slices of it.
	pub fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
		let mut sentences = Vec::new();
		let mut start = 0;
		let mut accepted = 0;

		for end in self.boundaries.boundaries(text) {
			let span = &text[start..end];
			if self.has_abbreviation(span) {
				trace!("Abbreviation in {:?}, boundary at {} suppressed", span, end);
			} else {
				let sentence = &text[accepted..end];
				if !sentence.trim().is_empty() {
					sentences.push(sentence);
				}
				accepted = end;
			}
			start = end;
		}

		let rest = &text[accepted..];
		if !rest.trim().is_empty() {
			sentences.push(rest);
		}
		sentences
	}
}

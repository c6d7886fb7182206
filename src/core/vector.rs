//! Sparse term-frequency vectors for FAQ matching
//!
//! Text is case-folded, stripped of punctuation, split on whitespace and
//! filtered of short words. Each surviving term is weighted by its share of
//! the surviving tokens, so the weights of a non-empty vector sum to 1.0.

use std::collections::BTreeMap;

use crate::config::DEFAULT_MIN_TERM_LEN;

/// Term to weight mapping.
///
/// Backed by an ordered map so that similarity sums run in the same term
/// order for both operands, which keeps `similarity(a, b) == similarity(b, a)`
/// bit-for-bit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector(BTreeMap<String, f64>);

impl TermVector {
	/// Vectorize text with the default short-word cutoff
	pub fn new(text: &str) -> Self {
		Self::with_min_len(text, DEFAULT_MIN_TERM_LEN)
	}

	/// Vectorize text, keeping only tokens of at least `min_len` characters
	pub fn with_min_len(text: &str, min_len: usize) -> Self {
		let tokens = tokenize(text, min_len);
		if tokens.is_empty() {
			return Self::default();
		}

		let mut counts: BTreeMap<String, usize> = BTreeMap::new();
		for token in &tokens {
			*counts.entry(token.clone()).or_insert(0) += 1;
		}

		let total = tokens.len() as f64;
		Self(
			counts
				.into_iter()
				.map(|(term, count)| (term, count as f64 / total))
				.collect(),
		)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of distinct terms
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Weight of a term, 0.0 when absent
	pub fn weight(&self, term: &str) -> f64 {
		self.0.get(term).copied().unwrap_or(0.0)
	}

	/// Terms and weights in lexical order
	pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
		self.0.iter().map(|(term, weight)| (term.as_str(), *weight))
	}

	/// Euclidean norm
	pub fn magnitude(&self) -> f64 {
		self.0.values().map(|w| w * w).sum::<f64>().sqrt()
	}

	/// Cosine similarity [0.0, 1.0]. Zero when either vector is empty.
	pub fn similarity(&self, other: &Self) -> f64 {
		// Terms missing from either side contribute nothing to the dot product.
		let dot: f64 = self
			.0
			.iter()
			.filter_map(|(term, a)| other.0.get(term).map(|b| a * b))
			.sum();

		let magnitude = self.magnitude() * other.magnitude();
		if magnitude == 0.0 {
			return 0.0;
		}

		(dot / magnitude).min(1.0)
	}
}

/// Vectorize text with default settings
pub fn vectorize(text: &str) -> TermVector {
	TermVector::new(text)
}

/// Cosine similarity between two term vectors
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
	a.similarity(b)
}

/// Normalize and split text into tokens of at least `min_len` characters.
///
/// Anything outside `[a-z0-9]` and whitespace becomes a separator, so
/// "what's" yields "what" and "s" rather than "whats".
pub fn tokenize(text: &str, min_len: usize) -> Vec<String> {
	let cleaned: String = text
		.to_lowercase()
		.chars()
		.map(|c| {
			if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
				c
			} else {
				' '
			}
		})
		.collect();

	cleaned
		.split_whitespace()
		.filter(|word| word.len() >= min_len)
		.map(str::to_string)
		.collect()
}

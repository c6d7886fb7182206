//! Best-answer selection by cosine similarity
//!
//! Every FAQ question is scored against the query vector. The highest score
//! that strictly exceeds both the threshold and the running best wins, so on
//! ties the earliest entry is kept.

use serde::Serialize;

use crate::config::MatchConfig;
use crate::core::knowledge::{FaqEntry, KnowledgeBase};
use crate::core::vector::TermVector;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
	Answer(String),
	NoMatch,
}

impl MatchResult {
	pub fn answer(&self) -> Option<&str> {
		match self {
			MatchResult::Answer(text) => Some(text),
			MatchResult::NoMatch => None,
		}
	}

	pub fn is_match(&self) -> bool {
		matches!(self, MatchResult::Answer(_))
	}
}

/// Score of a single FAQ entry against a query
#[derive(Debug, Clone, Serialize)]
pub struct Ranked {
	pub position: usize,
	pub question: String,
	pub score: f64,
	pub accepted: bool,
}

/// Match with default parameters
pub fn find_best_match(query: &str, kb: &KnowledgeBase) -> MatchResult {
	Matcher::default().find_best_match(query, kb)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
	config: MatchConfig,
}

impl Matcher {
	pub fn new(config: MatchConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &MatchConfig {
		&self.config
	}

	pub fn vectorize(&self, text: &str) -> TermVector {
		TermVector::with_min_len(text, self.config.min_term_len())
	}

	/// Vectorize every question on the fly and pick the best answer
	pub fn find_best_match(&self, query: &str, kb: &KnowledgeBase) -> MatchResult {
		let query = self.vectorize(query);
		let scored = kb
			.faqs
			.iter()
			.map(|faq| (query.similarity(&self.vectorize(&faq.question)), faq.answer.as_str()));
		select(scored, &self.config)
	}

	/// Score every entry, highest first. Entries with equal scores keep their order.
	pub fn rank(&self, query: &str, kb: &KnowledgeBase) -> Vec<Ranked> {
		let query = self.vectorize(query);
		let mut ranked: Vec<Ranked> = kb
			.faqs
			.iter()
			.enumerate()
			.map(|(position, faq)| {
				let score = query.similarity(&self.vectorize(&faq.question));
				Ranked {
					position,
					question: faq.question.clone(),
					score,
					accepted: self.config.clears_threshold(score),
				}
			})
			.collect();

		ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
		ranked
	}
}

/// Fold scores in order, keeping the first strictly-best answer above threshold
fn select<'a>(scored: impl Iterator<Item = (f64, &'a str)>, config: &MatchConfig) -> MatchResult {
	let mut best_score = 0.0;
	let mut best_answer = None;

	for (score, answer) in scored {
		if score > best_score && config.clears_threshold(score) {
			best_score = score;
			best_answer = Some(answer);
		}
	}

	match best_answer {
		Some(answer) => MatchResult::Answer(answer.to_string()),
		None => MatchResult::NoMatch,
	}
}

struct IndexedFaq<'a> {
	entry: &'a FaqEntry,
	vector: TermVector,
}

/// Question vectors computed once for repeated queries against the same knowledge base
pub struct FaqIndex<'a> {
	matcher: Matcher,
	entries: Vec<IndexedFaq<'a>>,
}

impl<'a> FaqIndex<'a> {
	pub fn build(kb: &'a KnowledgeBase, matcher: Matcher) -> Self {
		let entries = kb
			.faqs
			.iter()
			.map(|entry| IndexedFaq { entry, vector: matcher.vectorize(&entry.question) })
			.collect();
		Self { matcher, entries }
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn matcher(&self) -> &Matcher {
		&self.matcher
	}

	/// Same selection as [`Matcher::find_best_match`], reusing stored vectors
	pub fn find_best_match(&self, query: &str) -> MatchResult {
		let query = self.matcher.vectorize(query);
		let scored = self
			.entries
			.iter()
			.map(|faq| (query.similarity(&faq.vector), faq.entry.answer.as_str()));
		select(scored, self.matcher.config())
	}

	/// Questions that produce an empty vector and therefore never match
	pub fn unmatchable(&self) -> impl Iterator<Item = &'a FaqEntry> + '_ {
		self.entries.iter().filter(|faq| faq.vector.is_empty()).map(|faq| faq.entry)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn kb(entries: &[(&str, &str)]) -> KnowledgeBase {
		KnowledgeBase::new(
			entries.iter().map(|(q, a)| FaqEntry::new(*q, *a)).collect(),
			vec!["fallback".to_string()],
		)
	}

	#[test]
	fn empty_knowledge_base_never_matches() {
		assert_eq!(find_best_match("anything at all", &kb(&[])), MatchResult::NoMatch);
	}

	#[test]
	fn picks_highest_scoring_answer() {
		let kb = kb(&[
			("What programming languages do you know", "languages"),
			("What RAG projects have you built", "projects"),
		]);
		let result = find_best_match("tell me about your RAG projects", &kb);
		assert_eq!(result.answer(), Some("projects"));
	}

	#[test]
	fn first_entry_wins_ties() {
		let kb = kb(&[("What is RAG", "first"), ("What is RAG", "second")]);
		assert_eq!(find_best_match("what is rag", &kb).answer(), Some("first"));
	}

	#[test]
	fn score_equal_to_threshold_is_rejected() {
		// one shared term out of four on each side scores exactly 0.25
		let quarter = kb(&[("alpha echo foxtrot golf", "quarter")]);
		assert_eq!(find_best_match("alpha bravo charlie delta", &quarter), MatchResult::NoMatch);

		let lenient = Matcher::new(MatchConfig::new(0.2499999, 3).unwrap());
		assert_eq!(lenient.find_best_match("alpha bravo charlie delta", &quarter).answer(), Some("quarter"));
	}

	#[test]
	fn score_just_above_threshold_is_selected() {
		// one shared term, four against three: 1/sqrt(12) ~ 0.289
		let kb = kb(&[("alpha echo foxtrot", "above")]);
		assert_eq!(find_best_match("alpha bravo charlie delta", &kb).answer(), Some("above"));
	}

	#[test]
	fn unrelated_query_is_no_match() {
		let kb = kb(&[("What is RAG", "Retrieval Augmented Generation")]);
		assert_eq!(find_best_match("zzz qqq xxx", &kb), MatchResult::NoMatch);
	}

	#[test]
	fn empty_question_never_matches() {
		let kb = kb(&[("is it", "short")]);
		assert_eq!(find_best_match("is it", &kb), MatchResult::NoMatch);
	}

	#[test]
	fn index_agrees_with_direct_matching() {
		let kb = kb(&[
			("Where did you study", "education"),
			("What is your work experience", "experience"),
			("What is your experience with vector databases", "vectors"),
		]);
		let index = FaqIndex::build(&kb, Matcher::default());
		assert_eq!(index.matcher().config().threshold(), 0.25);
		for query in ["work experience", "vector databases experience", "study", "hello"] {
			assert_eq!(index.find_best_match(query), find_best_match(query, &kb), "query: {}", query);
		}
	}

	#[test]
	fn rank_orders_by_score_and_flags_acceptance() {
		let kb = kb(&[("python scripts", "py"), ("rust services", "rs"), ("rust rust services", "rs2")]);
		let ranked = Matcher::default().rank("rust services", &kb);
		assert_eq!(ranked.len(), 3);
		assert_eq!(ranked[0].position, 1);
		assert!(ranked[0].accepted);
		assert_eq!(ranked[2].position, 0);
		assert!(!ranked[2].accepted);
		assert_eq!(ranked[2].score, 0.0);
	}

	#[test]
	fn unmatchable_lists_empty_questions() {
		let kb = kb(&[("is it ok", "short"), ("What is RAG", "rag")]);
		let index = FaqIndex::build(&kb, Matcher::default());
		let unmatchable: Vec<_> = index.unmatchable().map(|faq| faq.answer.as_str()).collect();
		assert_eq!(unmatchable, vec!["short"]);
	}
}

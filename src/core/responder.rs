//! Chat replies: matched answers, or a random fallback when nothing matches

use rand::Rng;

use crate::core::knowledge::{KnowledgeBase, DEFAULT_FALLBACK};
use crate::core::matcher::{FaqIndex, MatchResult, Matcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
	Matched,
	Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
	pub text: String,
	pub kind: ReplyKind,
}

/// Pick a fallback uniformly at random. An empty list yields the built-in default.
pub fn pick_fallback<'a, R: Rng + ?Sized>(fallbacks: &'a [String], rng: &mut R) -> &'a str {
	if fallbacks.is_empty() {
		return DEFAULT_FALLBACK;
	}
	&fallbacks[rng.random_range(0..fallbacks.len())]
}

/// Answers user messages against a loaded knowledge base.
///
/// The randomness source is injected so fallback selection can be seeded.
pub struct Responder<'a, R: Rng> {
	kb: &'a KnowledgeBase,
	index: FaqIndex<'a>,
	rng: R,
}

impl<'a, R: Rng> Responder<'a, R> {
	pub fn new(kb: &'a KnowledgeBase, matcher: Matcher, rng: R) -> Self {
		Self { kb, index: FaqIndex::build(kb, matcher), rng }
	}

	pub fn knowledge(&self) -> &'a KnowledgeBase {
		self.kb
	}

	/// Reply to a message. Blank input gets no reply.
	pub fn process_message(&mut self, input: &str) -> Option<Reply> {
		let input = input.trim();
		if input.is_empty() {
			return None;
		}

		let reply = match self.index.find_best_match(input) {
			MatchResult::Answer(text) => Reply { text, kind: ReplyKind::Matched },
			MatchResult::NoMatch => Reply { text: self.fallback().to_string(), kind: ReplyKind::Fallback },
		};
		Some(reply)
	}

	pub fn fallback(&mut self) -> &'a str {
		let kb = self.kb;
		pick_fallback(&kb.fallback_responses, &mut self.rng)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::core::knowledge::FaqEntry;
	use rand::rngs::StdRng;
	use rand::SeedableRng;

	fn kb() -> KnowledgeBase {
		KnowledgeBase::new(
			vec![FaqEntry::new("What is RAG", "Retrieval Augmented Generation")],
			vec!["one".to_string(), "two".to_string(), "three".to_string()],
		)
	}

	#[test]
	fn blank_input_gets_no_reply() {
		let kb = kb();
		let mut responder = Responder::new(&kb, Matcher::default(), StdRng::seed_from_u64(1));
		assert_eq!(responder.process_message("   "), None);
	}

	#[test]
	fn matched_reply() {
		let kb = kb();
		let mut responder = Responder::new(&kb, Matcher::default(), StdRng::seed_from_u64(1));
		assert_eq!(responder.knowledge().len(), 1);
		let reply = responder.process_message("  Tell me about RAG ").unwrap();
		assert_eq!(reply.kind, ReplyKind::Matched);
		assert_eq!(reply.text, "Retrieval Augmented Generation");
	}

	#[test]
	fn fallback_comes_from_list() {
		let kb = kb();
		let mut responder = Responder::new(&kb, Matcher::default(), StdRng::seed_from_u64(7));
		for _ in 0..20 {
			let reply = responder.process_message("zzz qqq xxx").unwrap();
			assert_eq!(reply.kind, ReplyKind::Fallback);
			assert!(kb.fallback_responses.contains(&reply.text));
		}
	}

	#[test]
	fn seeded_fallbacks_repeat() {
		let kb = kb();
		let mut a = Responder::new(&kb, Matcher::default(), StdRng::seed_from_u64(42));
		let mut b = Responder::new(&kb, Matcher::default(), StdRng::seed_from_u64(42));
		let first: Vec<_> = (0..10).map(|_| a.fallback()).collect();
		let second: Vec<_> = (0..10).map(|_| b.fallback()).collect();
		assert_eq!(first, second);
	}

	#[test]
	fn empty_fallback_list_uses_default() {
		let mut rng = StdRng::seed_from_u64(3);
		assert_eq!(pick_fallback(&[], &mut rng), DEFAULT_FALLBACK);
	}
}

//! Knowledge base types

use serde::{Deserialize, Serialize};

pub const DEFAULT_FALLBACK: &str =
	"I'm not sure about that. Try asking about my RAG projects, experience, or skills!";

const DEFAULT_GREETING: &str =
	"Hi! I'm Ishaan's AI assistant. Ask me about his RAG expertise, projects, experience, or anything else!";
const DEFAULT_LOADING_ERROR: &str =
	"Sorry, I'm still loading my knowledge base. Please try again in a moment.";
const DEFAULT_CONNECTION_ERROR: &str = "Sorry, I cannot access my knowledge base right now.";

/// A stored question with the answer returned verbatim on match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
	pub question: String,
	pub answer: String,
}

impl FaqEntry {
	pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
		Self { question: question.into(), answer: answer.into() }
	}
}

/// Canned messages shown by the chat front end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
	pub greeting: String,
	pub loading_error: String,
	pub connection_error: String,
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			greeting: DEFAULT_GREETING.to_string(),
			loading_error: DEFAULT_LOADING_ERROR.to_string(),
			connection_error: DEFAULT_CONNECTION_ERROR.to_string(),
		}
	}
}

/// FAQ entries in priority order plus fallback replies.
///
/// Earlier entries win ties during matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
	#[serde(default)]
	pub faqs: Vec<FaqEntry>,
	#[serde(default)]
	pub fallback_responses: Vec<String>,
	#[serde(default)]
	pub messages: Messages,
}

impl KnowledgeBase {
	pub fn new(faqs: Vec<FaqEntry>, fallback_responses: Vec<String>) -> Self {
		Self { faqs, fallback_responses, messages: Messages::default() }
	}

	/// Minimal knowledge base used when the configured one cannot be loaded
	pub fn offline() -> Self {
		let messages = Messages::default();
		Self {
			faqs: Vec::new(),
			fallback_responses: vec![messages.connection_error.clone()],
			messages,
		}
	}

	pub fn len(&self) -> usize {
		self.faqs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.faqs.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn offline_base_answers_with_connection_error() {
		let kb = KnowledgeBase::offline();
		assert!(kb.is_empty());
		assert_eq!(kb.fallback_responses, vec![DEFAULT_CONNECTION_ERROR.to_string()]);
	}

	#[test]
	fn messages_fill_missing_fields() {
		let messages: Messages = serde_json::from_str(r#"{"greeting": "Hello"}"#).unwrap();
		assert_eq!(messages.greeting, "Hello");
		assert_eq!(messages.loading_error, DEFAULT_LOADING_ERROR);
	}
}

//! Knowledge base file loading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::knowledge::DEFAULT_FALLBACK;
use crate::core::KnowledgeBase;
use crate::ui;

/// Parse knowledge base JSON and fill in missing fallbacks
pub fn parse(json: &str) -> Result<KnowledgeBase> {
	let kb: KnowledgeBase = serde_json::from_str(json).context("Failed to parse knowledge base")?;
	Ok(normalize(kb))
}

/// Load knowledge base from disk
pub fn load(path: &Path) -> Result<KnowledgeBase> {
	let json = fs::read_to_string(path)
		.with_context(|| format!("Failed to read knowledge base: {}", path.display()))?;
	parse(&json).with_context(|| format!("Invalid knowledge base: {}", path.display()))
}

/// Load knowledge base, falling back to the offline one on any failure
pub fn load_or_offline(path: Option<&Path>) -> KnowledgeBase {
	let Some(path) = path else {
		ui::warn("No knowledge base found, answering with fallbacks only");
		return KnowledgeBase::offline();
	};

	match load(path) {
		Ok(kb) => {
			ui::debug(&format!(
				"Loaded {} FAQs and {} fallbacks from {}",
				kb.faqs.len(),
				kb.fallback_responses.len(),
				path.display()
			));
			kb
		}
		Err(e) => {
			ui::error(&format!("Failed to load knowledge base: {:#}", e));
			KnowledgeBase::offline()
		}
	}
}

/// Save knowledge base as pretty JSON
pub fn save(kb: &KnowledgeBase, path: &Path) -> Result<()> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent).context("Failed to create knowledge base directory")?;
	}

	let json = serde_json::to_string_pretty(kb).context("Failed to serialize knowledge base")?;
	fs::write(path, json).context("Failed to write knowledge base")?;

	Ok(())
}

fn normalize(mut kb: KnowledgeBase) -> KnowledgeBase {
	if kb.fallback_responses.is_empty() {
		ui::debug("No fallback responses configured, using default");
		kb.fallback_responses.push(DEFAULT_FALLBACK.to_string());
	}
	kb
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_full_document() {
		let kb = parse(
			r#"{
				"faqs": [{"question": "What is RAG", "answer": "Retrieval Augmented Generation"}],
				"fallback_responses": ["Ask me something else"],
				"messages": {"greeting": "Hey there"}
			}"#,
		)
		.unwrap();
		assert_eq!(kb.faqs.len(), 1);
		assert_eq!(kb.fallback_responses, vec!["Ask me something else"]);
		assert_eq!(kb.messages.greeting, "Hey there");
	}

	#[test]
	fn missing_fallbacks_get_default() {
		let kb = parse(r#"{"faqs": []}"#).unwrap();
		assert_eq!(kb.fallback_responses, vec![DEFAULT_FALLBACK.to_string()]);
		let kb = parse(r#"{"faqs": [], "fallback_responses": []}"#).unwrap();
		assert_eq!(kb.fallback_responses, vec![DEFAULT_FALLBACK.to_string()]);
	}

	#[test]
	fn configured_fallbacks_are_kept_verbatim() {
		let kb = parse(r#"{"fallback_responses": ["  ", "Ask again"]}"#).unwrap();
		assert_eq!(kb.fallback_responses, vec!["  ".to_string(), "Ask again".to_string()]);
	}

	#[test]
	fn malformed_json_is_error() {
		assert!(parse("{ not json").is_err());
		assert!(parse(r#"{"faqs": [{"question": "only"}]}"#).is_err());
	}

	#[test]
	fn missing_file_falls_back_to_offline() {
		let kb = load_or_offline(Some(Path::new("/nonexistent/chatbot-knowledge.json")));
		assert_eq!(kb, KnowledgeBase::offline());
		assert_eq!(load_or_offline(None), KnowledgeBase::offline());
	}
}

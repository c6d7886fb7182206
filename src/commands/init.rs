//! Init command - write a starter knowledge base

use anyhow::{bail, Result};
use std::path::Path;

use crate::core::{FaqEntry, KnowledgeBase};
use crate::storage;
use crate::ui;

pub fn run(path: &Path, force: bool) -> Result<()> {
	if path.exists() && !force {
		bail!("{} already exists (use --force to overwrite)", path.display());
	}

	storage::save(&starter(), path)?;
	ui::success(&format!("Wrote starter knowledge base to {}", path.display()));
	Ok(())
}

/// Small example knowledge base to edit
pub fn starter() -> KnowledgeBase {
	KnowledgeBase::new(
		vec![
			FaqEntry::new(
				"What is RAG?",
				"Retrieval Augmented Generation combines a search step with a language model so answers are grounded in your own documents.",
			),
			FaqEntry::new(
				"What projects have you built?",
				"Mostly retrieval pipelines, vector search services and small developer tools.",
			),
			FaqEntry::new(
				"What programming languages do you use?",
				"Python for data work, Rust for services and TypeScript for the web.",
			),
			FaqEntry::new(
				"How can I contact you?",
				"Use the contact form at the bottom of the page or send an email.",
			),
		],
		vec![
			"I'm not sure about that. Try asking about my RAG projects, experience, or skills!".to_string(),
			"I don't have an answer for that yet. Ask me about projects or experience.".to_string(),
		],
	)
}

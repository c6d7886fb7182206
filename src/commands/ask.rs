//! Ask command - answer a single question

use anyhow::Result;
use colored::*;

use crate::core::{KnowledgeBase, Matcher, ReplyKind, Responder};
use crate::ui;

pub fn run(kb: &KnowledgeBase, matcher: Matcher, seed: Option<u64>, query: &str) -> Result<()> {
	let mut responder = Responder::new(kb, matcher, super::seeded_rng(seed));

	let Some(reply) = responder.process_message(query) else {
		ui::warn("Empty question");
		return Ok(());
	};

	match reply.kind {
		ReplyKind::Matched => ui::debug("Matched a FAQ entry"),
		ReplyKind::Fallback => ui::debug(&format!(
			"No FAQ scored above {:.2}, using fallback",
			matcher.config().threshold()
		)),
	}

	println!("{}", reply.text.bright_white());
	Ok(())
}

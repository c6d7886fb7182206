//! Check command - validate a knowledge base file

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::core::{FaqIndex, Matcher};
use crate::storage;
use crate::ui;

pub fn run(path: &Path, matcher: Matcher) -> Result<()> {
	ui::info(&format!("Checking: {}", path.display()));

	let kb = storage::load(path)?;
	let index = FaqIndex::build(&kb, matcher);

	ui::success(&format!(
		"{} FAQs, {} fallback responses",
		index.len(),
		kb.fallback_responses.len()
	));

	ui::header("Messages");
	println!("  {} {}", "Greeting:".bright_blue(), kb.messages.greeting);
	println!("  {} {}", "Loading:".bright_blue(), kb.messages.loading_error);
	println!("  {} {}", "Offline:".bright_blue(), kb.messages.connection_error);
	println!();

	let unmatchable: Vec<_> = index.unmatchable().collect();
	if unmatchable.is_empty() {
		ui::success("Every question can be matched");
	} else {
		ui::warn(&format!(
			"{} questions have no terms of {}+ characters and can never match:",
			unmatchable.len(),
			index.matcher().config().min_term_len()
		));
		for faq in unmatchable {
			println!("  {}", faq.question.dimmed());
		}
	}

	Ok(())
}

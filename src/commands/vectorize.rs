//! Vectorize command - show term weights

use anyhow::Result;
use colored::*;

use crate::core::Matcher;
use crate::ui;

pub fn run(matcher: Matcher, text: &str) -> Result<()> {
	let vector = matcher.vectorize(text);

	if vector.is_empty() {
		ui::warn(&format!(
			"No terms of {}+ characters, this text can never match",
			matcher.config().min_term_len()
		));
		return Ok(());
	}

	ui::header("Terms");

	let mut terms: Vec<(&str, f64)> = vector.iter().collect();
	terms.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

	for (term, weight) in terms {
		println!("  {:<24} {}", term.bright_white(), format!("{:.4}", weight).dimmed());
	}

	println!();
	ui::debug(&format!("Magnitude: {:.4}", vector.magnitude()));
	ui::success(&format!("{} distinct terms", vector.len()));

	Ok(())
}

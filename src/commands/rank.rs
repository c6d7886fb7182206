//! Rank command - score every FAQ against a query

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

use crate::core::{KnowledgeBase, Matcher, Ranked};
use crate::ui;

#[derive(Debug, Serialize)]
struct RankExport<'a> {
	query: &'a str,
	threshold: f64,
	results: &'a [Ranked],
}

pub fn run(kb: &KnowledgeBase, matcher: Matcher, query: &str, limit: usize, export: Option<&Path>) -> Result<()> {
	let start = Instant::now();

	if kb.is_empty() {
		ui::warn("Knowledge base has no FAQs to rank");
		return Ok(());
	}

	let ranked = matcher.rank(query, kb);

	if let Some(export_path) = export {
		let export_data = RankExport {
			query,
			threshold: matcher.config().threshold(),
			results: &ranked,
		};

		let json = serde_json::to_string_pretty(&export_data)?;
		if export_path.to_str() == Some("-") || export_path.as_os_str().is_empty() {
			println!("{}", json);
		} else {
			std::fs::write(export_path, json)
				.with_context(|| format!("Failed to write {}", export_path.display()))?;
			ui::success(&format!("Exported to {}", export_path.display()));
		}
		return Ok(());
	}

	ui::info(&format!("Ranking: \"{}\"", query));
	ui::header("Results");

	for (i, entry) in ranked.iter().take(limit).enumerate() {
		let marker = if entry.accepted { "✓".bright_green() } else { " ".normal() };
		println!(
			"{}. {} {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			marker,
			entry.question.bright_white(),
			ui::score(entry.score),
		);
	}

	println!();

	match ranked.first() {
		Some(top) if top.accepted => {}
		Some(top) => ui::warn(&format!(
			"Top result ({:.0}%) does not exceed the {:.0}% threshold, a fallback would be used",
			top.score * 100.0,
			matcher.config().threshold() * 100.0
		)),
		None => {}
	}

	ui::success(&format!(
		"Scored {} FAQs in {:.0}ms",
		ranked.len(),
		start.elapsed().as_secs_f32() * 1000.0
	));

	Ok(())
}

//! chatmatch - FAQ chatbot in the terminal
//!
//! Answers questions from a JSON knowledge base by cosine similarity of
//! term-frequency vectors, falling back to canned replies.

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};

use chatmatch::cli::{Cli, Command};
use chatmatch::commands;
use chatmatch::config::{self, MatchConfig};
use chatmatch::core::Matcher;
use chatmatch::storage;
use chatmatch::ui::{self, Log};

fn main() -> Result<()> {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);
	if let Some(path) = cli.knowledge.clone() {
		config::set_knowledge_path(path);
	}

	let match_config = MatchConfig::new(cli.threshold, cli.min_term_len).map_err(|e| anyhow!(e))?;
	let matcher = Matcher::new(match_config);
	ui::debug(&format!(
		"Threshold {:.2}, minimum term length {}",
		match_config.threshold(),
		match_config.min_term_len()
	));

	match cli.command {
		Command::Ask { query } => {
			let kb = storage::load_or_offline(config::knowledge_path().as_deref());
			commands::ask::run(&kb, matcher, cli.seed, &query)
		}
		Command::Chat { instant } => {
			let kb = storage::load_or_offline(config::knowledge_path().as_deref());
			commands::chat::run(&kb, matcher, cli.seed, instant)
		}
		Command::Rank { query, limit, export } => {
			let kb = storage::load_or_offline(config::knowledge_path().as_deref());
			commands::rank::run(&kb, matcher, &query, limit, export.as_deref())
		}
		Command::Vectorize { text } => commands::vectorize::run(matcher, &text),
		Command::Check => {
			let path = config::knowledge_path().ok_or_else(|| {
				anyhow!(
					"Knowledge base not found. Pass --kb, set {} or create {}",
					config::KNOWLEDGE_ENV,
					config::KNOWLEDGE_FILE
				)
			})?;
			commands::check::run(&path, matcher)
		}
		Command::Init { path, force } => commands::init::run(&path, force),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					ui::error(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}

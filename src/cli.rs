use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_MIN_TERM_LEN, DEFAULT_RANK_LIMIT, DEFAULT_THRESHOLD};

fn parse_threshold(s: &str) -> Result<f64, String> {
	let val: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
	if !(0.0..=1.0).contains(&val) {
		Err(format!("threshold must be between 0.0 and 1.0, got {}", val))
	} else {
		Ok(val)
	}
}

fn parse_min_term_len(s: &str) -> Result<usize, String> {
	let val: usize = s.parse().map_err(|_| format!("'{}' is not a valid length", s))?;
	if val == 0 {
		Err("minimum term length must be at least 1".to_string())
	} else {
		Ok(val)
	}
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "chatmatch",
	author,
	version,
	about = "FAQ chatbot matching by term-frequency cosine similarity",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {ask}        {ask_args}      {ask_desc}
  {bin} {chat}       {chat_args}                      {chat_desc}
  {bin} {rank}       {rank_args}       {rank_desc}
  {bin} {vectorize}  {vectorize_args}  {vectorize_desc}
  {bin} {check}      {check_args}     {check_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "chatmatch".bright_blue(),
		ask = "ask".yellow(),
		ask_args = "\"What is RAG?\"",
		ask_desc = "Answer one question".dimmed(),
		chat = "chat".yellow(),
		chat_args = "",
		chat_desc = "Interactive chat session".dimmed(),
		rank = "rank".yellow(),
		rank_args = "\"vector db\" -n 3",
		rank_desc = "Show best scoring FAQs".dimmed(),
		vectorize = "vectorize".yellow(),
		vectorize_args = "\"Hello, world\"",
		vectorize_desc = "Show term weights".dimmed(),
		check = "check".yellow(),
		check_args = "--kb faq.json",
		check_desc = "Validate a knowledge base".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Knowledge base JSON file
	#[arg(short = 'k', long = "kb", global = true, value_name = "PATH")]
	pub knowledge: Option<PathBuf>,

	/// Minimum similarity a FAQ must exceed to be chosen (0.0-1.0)
	#[arg(short = 't', long = "threshold", global = true, default_value_t = DEFAULT_THRESHOLD, value_parser = parse_threshold)]
	pub threshold: f64,

	/// Shortest word kept when vectorizing
	#[arg(long = "min-term-len", global = true, default_value_t = DEFAULT_MIN_TERM_LEN, value_parser = parse_min_term_len)]
	pub min_term_len: usize,

	/// Seed for fallback selection (random when omitted)
	#[arg(long = "seed", global = true)]
	pub seed: Option<u64>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Answer a single question
	Ask {
		/// Question text
		#[arg(value_name = "QUERY")]
		query: String,
	},

	/// Interactive chat session
	Chat {
		/// Reply immediately instead of simulating typing
		#[arg(long = "instant")]
		instant: bool,
	},

	/// Score every FAQ against a query
	Rank {
		/// Query text
		#[arg(value_name = "QUERY")]
		query: String,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_RANK_LIMIT)]
		limit: usize,

		/// Write all scores as JSON
		#[arg(long = "json", value_name = "PATH")]
		export: Option<PathBuf>,
	},

	/// Print the term vector of a text
	Vectorize {
		/// Text to vectorize
		#[arg(value_name = "TEXT")]
		text: String,
	},

	/// Validate the knowledge base and report unmatchable questions
	Check,

	/// Write a starter knowledge base
	Init {
		/// Output file
		#[arg(value_name = "PATH", default_value = crate::config::KNOWLEDGE_FILE)]
		path: PathBuf,

		/// Overwrite an existing file
		#[arg(short = 'f', long = "force")]
		force: bool,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}

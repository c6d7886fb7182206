//! Unified logging system

use chrono::Local;
use colored::*;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
       __          __                  __       __
  ____/ /_  ____ _/ /_____ ___  ____ _/ /______/ /_
 / ___/ __ \/ __ `/ __/ __ `__ \/ __ `/ __/ ___/ __ \
/ /__/ / / / /_/ / /_/ / / / / / /_/ / /_/ /__/ / / /
\___/_/ /_/\__,_/\__/_/ /_/ /_/\__,_/\__/\___/_/ /_/ "#;

const SLOGANS: &[&str] = &[
	"Cosine similarity, zero neurons",
	"Ask me anything (in the FAQ)",
	"Term frequency is all you need",
	"Powered by a very small dot product",
	"Words longer than two letters only",
	"Has read the FAQ so you don't have to",
	"0.25 or bust",
	"Not an LLM. Still helpful.",
];

pub fn random_slogan() -> &'static str {
	let idx = rand::rng().random_range(0..SLOGANS.len());
	SLOGANS[idx]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
}

pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

pub fn info(msg: &str) {
	println!("{} {}", "ℹ".bright_blue().bold(), msg.bright_white());
}

pub fn success(msg: &str) {
	println!("{} {}", "✓".bright_green().bold(), msg.bright_white());
}

pub fn warn(msg: &str) {
	println!("{} {}", "⚠".bright_yellow().bold(), msg.bright_white());
}

pub fn error(msg: &str) {
	println!("{} {}", "✗".bright_red().bold(), msg.bright_white());
}

pub fn debug(msg: &str) {
	if Log::is_verbose() {
		println!("{} {}", "⚙".bright_black().bold(), msg.dimmed());
	}
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

/// Local wall-clock time as HH:MM
pub fn clock() -> String {
	Local::now().format("%H:%M").to_string()
}

/// Chat line with speaker label and dimmed time
pub fn chat_line(speaker: &str, text: &str) {
	println!("{} {} {}", format!("[{}]", clock()).dimmed(), speaker, text);
}

/// Percentage score, dimmed
pub fn score(score: f64) -> ColoredString {
	format!("{:.0}%", score * 100.0).dimmed()
}

//! Chat mode - interactive question session

use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::config::{TYPING_DELAY_MIN_MS, TYPING_DELAY_SPREAD_MS};
use crate::core::{KnowledgeBase, Matcher, ReplyKind, Responder};
use crate::ui;

pub fn run(kb: &KnowledgeBase, matcher: Matcher, seed: Option<u64>, instant: bool) -> Result<()> {
	ui::print_logo();
	println!();

	if kb.is_empty() {
		ui::warn("Knowledge base has no FAQs, every reply will be a fallback");
	} else {
		ui::debug(&format!("Indexed {} FAQs", kb.len()));
	}
	ui::info("Type your questions, or 'exit' to quit");
	println!();

	let mut responder = Responder::new(kb, matcher, super::seeded_rng(seed));
	ui::chat_line(&bot_label(), &responder.knowledge().messages.greeting);

	loop {
		print!("{} ", "you>".bright_blue().bold());
		io::stdout().flush()?;

		let mut input = String::new();
		if io::stdin().read_line(&mut input)? == 0 {
			break;
		}

		let message = input.trim();

		if message.is_empty() {
			continue;
		}

		if message == "exit" || message == "quit" || message == "q" {
			ui::info("Goodbye!");
			break;
		}

		if message == "help" {
			show_help();
			continue;
		}

		let Some(reply) = responder.process_message(message) else {
			continue;
		};

		if !instant {
			typing_pause();
		}

		if reply.kind == ReplyKind::Fallback {
			ui::debug("No confident match, using fallback");
		}
		ui::chat_line(&bot_label(), &reply.text);
		println!();
	}

	Ok(())
}

/// Simulated typing: 800ms plus up to another 800ms
fn typing_pause() {
	print!("{}", "typing...".dimmed());
	let _ = io::stdout().flush();

	let delay = TYPING_DELAY_MIN_MS + rand::rng().random_range(0..=TYPING_DELAY_SPREAD_MS);
	thread::sleep(Duration::from_millis(delay));

	print!("\r{}\r", " ".repeat(9));
	let _ = io::stdout().flush();
}

fn bot_label() -> String {
	"bot>".bright_green().bold().to_string()
}

fn show_help() {
	println!("{}", "Chat Commands:".bright_blue().bold());
	println!("  {}  Ask a question", "<text>".dimmed());
	println!("  {}    Show this help message", "help".dimmed());
	println!("  {}    Exit chat mode", "exit".dimmed());
}

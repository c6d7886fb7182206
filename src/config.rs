//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

static CUSTOM_KNOWLEDGE: OnceLock<PathBuf> = OnceLock::new();

// === Knowledge Base ===
pub const KNOWLEDGE_FILE: &str = "chatbot-knowledge.json";
pub const KNOWLEDGE_ENV: &str = "CHATMATCH_KB";

// === Matching ===
pub const DEFAULT_THRESHOLD: f64 = 0.25;
pub const DEFAULT_MIN_TERM_LEN: usize = 3;

// === Chat ===
pub const TYPING_DELAY_MIN_MS: u64 = 800;
pub const TYPING_DELAY_SPREAD_MS: u64 = 800;

// === Rank Defaults ===
pub const DEFAULT_RANK_LIMIT: usize = 5;

/// Matching parameters.
///
/// A candidate must score strictly above `threshold`. Tokens shorter than
/// `min_term_len` are dropped before vectorizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
	threshold: f64,
	min_term_len: usize,
}

impl MatchConfig {
	/// Creates a config, returning error if a parameter is out of range
	pub fn new(threshold: f64, min_term_len: usize) -> Result<Self, String> {
		if !(0.0..=1.0).contains(&threshold) {
			return Err(format!("threshold must be [0.0, 1.0], got {}", threshold));
		}
		if min_term_len == 0 {
			return Err("minimum term length must be at least 1".to_string());
		}
		Ok(Self { threshold, min_term_len })
	}

	pub fn threshold(&self) -> f64 {
		self.threshold
	}

	pub fn min_term_len(&self) -> usize {
		self.min_term_len
	}

	/// Strict comparison: a score equal to the threshold is rejected
	pub fn clears_threshold(&self, score: f64) -> bool {
		score > self.threshold
	}
}

impl Default for MatchConfig {
	fn default() -> Self {
		Self { threshold: DEFAULT_THRESHOLD, min_term_len: DEFAULT_MIN_TERM_LEN }
	}
}

pub fn set_knowledge_path(path: PathBuf) {
	let _ = CUSTOM_KNOWLEDGE.set(path);
}

/// Locate the knowledge base file (--kb, CHATMATCH_KB, working dir, or next to executable)
pub fn knowledge_path() -> Option<PathBuf> {
	if let Some(custom) = CUSTOM_KNOWLEDGE.get() {
		crate::ui::debug(&format!("Using custom knowledge base: {}", custom.display()));
		return Some(custom.clone());
	}

	if let Ok(env_path) = std::env::var(KNOWLEDGE_ENV) {
		let path = PathBuf::from(&env_path);
		if path.is_file() {
			crate::ui::debug(&format!("Using {}: {}", KNOWLEDGE_ENV, env_path));
			return Some(path);
		}
	}

	let local = PathBuf::from(KNOWLEDGE_FILE);
	if local.is_file() {
		crate::ui::debug(&format!("Found knowledge base at: {}", local.display()));
		return Some(local);
	}

	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let path = dir.join(KNOWLEDGE_FILE);
			if path.is_file() {
				crate::ui::debug(&format!("Found knowledge base at: {}", path.display()));
				return Some(path);
			}
		}
	}

	None
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_constants() {
		let config = MatchConfig::default();
		assert_eq!(config.threshold(), 0.25);
		assert_eq!(config.min_term_len(), 3);
	}

	#[test]
	fn threshold_is_strict() {
		let config = MatchConfig::default();
		assert!(!config.clears_threshold(0.25));
		assert!(config.clears_threshold(0.2500001));
		assert!(!config.clears_threshold(0.0));
	}

	#[test]
	fn rejects_out_of_range() {
		assert!(MatchConfig::new(1.5, 3).is_err());
		assert!(MatchConfig::new(-0.1, 3).is_err());
		assert!(MatchConfig::new(0.5, 0).is_err());
		assert!(MatchConfig::new(0.0, 1).is_ok());
	}
}

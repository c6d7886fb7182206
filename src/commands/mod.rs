//! # Command Implementations
//!
//! Each submodule handles one CLI command (ask, chat, rank, etc.).

pub mod ask;
pub mod chat;
pub mod check;
pub mod init;
pub mod rank;
pub mod vectorize;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fallback randomness, reproducible when a seed is given
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	}
}

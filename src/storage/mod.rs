//! Knowledge base storage

pub mod knowledge;

pub use knowledge::{load, load_or_offline, parse, save};

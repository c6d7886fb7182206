//! # chatmatch Library
//!
//! FAQ chatbot engine: term-frequency vectors, cosine similarity scoring and
//! best-answer selection over a small knowledge base, plus the terminal
//! front end built on it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod storage;
pub mod ui;

pub use crate::config::MatchConfig;
pub use crate::core::{
	cosine_similarity, find_best_match, vectorize, FaqEntry, FaqIndex, KnowledgeBase, MatchResult, Matcher,
	Reply, ReplyKind, Responder, TermVector,
};

//! Core domain types

pub mod knowledge;
pub mod matcher;
pub mod responder;
pub mod vector;

pub use knowledge::{FaqEntry, KnowledgeBase, Messages};
pub use matcher::{find_best_match, FaqIndex, MatchResult, Matcher, Ranked};
pub use responder::{pick_fallback, Reply, ReplyKind, Responder};
pub use vector::{cosine_similarity, tokenize, vectorize, TermVector};

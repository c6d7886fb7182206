//! # User Interface
//!
//! Colored terminal output for the chat front end.

pub mod log;

pub use log::{chat_line, debug, error, header, info, print_logo, score, success, warn, Log};

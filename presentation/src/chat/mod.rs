//! Interactive chat module
//!
//! Provides a line-editor based prompt for requesting advice repeatedly in
//! one session.

mod repl;

pub use repl::{AdvisorRepl, Flow, ReplCommand};

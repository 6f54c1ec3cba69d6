//! Core domain concepts shared across all subdomains.
//!
//! - [`goal::Goal`]: a validated project goal to ask advice for
//! - [`model::Model`]: known chat-completion model names
//! - [`error::GoalError`]: goal validation errors

pub mod error;
pub mod goal;
pub mod model;

//! Prompt domain
//!
//! The fixed system instruction sent with every request, and the goal
//! templates offered to users who do not want to write a goal from scratch.

mod goal_template;
mod template;

pub use goal_template::{GoalTemplate, UnknownTemplate};
pub use template::AdvisorPrompt;

//! Goal value object

use super::error::GoalError;
use serde::{Deserialize, Serialize};

/// Minimum number of characters (after trimming) a goal must contain.
pub const MIN_GOAL_CHARS: usize = 10;

/// A project goal to be turned into a CrewAI setup (Value Object)
///
/// The content is kept exactly as the user typed it; only the validity check
/// looks at the trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Goal {
    content: String,
}

impl Goal {
    /// Create a new goal, rejecting descriptions that are too short to act on.
    pub fn new(content: impl Into<String>) -> Result<Self, GoalError> {
        let content = content.into();
        let actual = content.trim().chars().count();
        if actual < MIN_GOAL_CHARS {
            return Err(GoalError::TooShort {
                min: MIN_GOAL_CHARS,
                actual,
            });
        }
        Ok(Self { content })
    }

    /// Get the goal content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Goal {
    type Error = GoalError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Goal::new(s)
    }
}

impl TryFrom<&str> for Goal {
    type Error = GoalError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Goal::new(s)
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.content
    }
}

//! Domain error types

use thiserror::Error;

/// Goal validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoalError {
    #[error(
        "Please provide a more detailed description of your goal (at least {min} characters)."
    )]
    TooShort { min: usize, actual: usize },
}

impl GoalError {
    /// Number of characters the rejected goal had after trimming
    pub fn actual_len(&self) -> usize {
        match self {
            GoalError::TooShort { actual, .. } => *actual,
        }
    }
}

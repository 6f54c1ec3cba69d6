//! Sampling parameters for advice requests.

use serde::{Deserialize, Serialize};

/// Parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AdviceParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

//! Advice record entities
//!
//! Field order in these structs is the order used when the record is
//! serialized, so it doubles as the canonical download layout.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level keys every record must carry, in canonical order.
pub const REQUIRED_FIELDS: [&str; 4] = ["agents", "tasks", "tools", "workflow"];

/// A CrewAI setup suggested by the model.
///
/// Task agents and task tool names are free-form strings; they are never
/// checked against `agents` or `tools`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRecord {
    pub agents: Vec<AgentSpec>,
    pub tasks: Vec<TaskSpec>,
    pub tools: Vec<ToolSpec>,
    /// Ordered execution steps
    pub workflow: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub role: String,
    pub background: String,
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub name: String,
    pub description: String,
    /// Name of the agent the task is assigned to
    pub agent: String,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub purpose: String,
    /// Missing and `null` both mean no requirements.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub api_requirements: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl AdviceRecord {
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
            && self.tasks.is_empty()
            && self.tools.is_empty()
            && self.workflow.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdviceRecord {
        AdviceRecord {
            agents: vec![AgentSpec {
                name: "Researcher".to_string(),
                role: "Finds sources".to_string(),
                background: "Analyst".to_string(),
                goals: vec!["Collect data".to_string()],
            }],
            tasks: vec![
                TaskSpec {
                    name: "Gather".to_string(),
                    description: "Gather pages".to_string(),
                    agent: "Researcher".to_string(),
                    tools: vec!["web_search".to_string()],
                },
                TaskSpec {
                    name: "Publish".to_string(),
                    description: "Post the summary".to_string(),
                    agent: "Publisher".to_string(),
                    tools: vec![],
                },
            ],
            tools: vec![ToolSpec {
                name: "web_search".to_string(),
                purpose: "Search the web".to_string(),
                api_requirements: vec![],
            }],
            workflow: vec!["Gather".to_string(), "Publish".to_string()],
        }
    }

    #[test]
    fn test_serialized_key_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let positions: Vec<usize> = REQUIRED_FIELDS
            .iter()
            .map(|key| json.find(&format!("\"{}\":", key)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_api_requirements_default_to_empty() {
        let tool: ToolSpec =
            serde_json::from_str(r#"{"name":"scraper","purpose":"Fetch pages"}"#).unwrap();
        assert!(tool.api_requirements.is_empty());
    }

    #[test]
    fn test_null_api_requirements_are_empty() {
        let tool: ToolSpec = serde_json::from_str(
            r#"{"name":"scraper","purpose":"Fetch pages","api_requirements":null}"#,
        )
        .unwrap();
        assert!(tool.api_requirements.is_empty());
    }

    #[test]
    fn test_is_empty() {
        let empty = AdviceRecord {
            agents: vec![],
            tasks: vec![],
            tools: vec![],
            workflow: vec![],
        };
        assert!(empty.is_empty());
        assert!(!sample().is_empty());
    }
}

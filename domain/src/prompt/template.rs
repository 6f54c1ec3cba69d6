//! Prompt text for advice requests

use crate::core::goal::Goal;
use crate::session::entities::Message;

/// Builds the two messages of an advice request.
pub struct AdvisorPrompt;

impl AdvisorPrompt {
    /// System instruction declaring the four-field JSON contract
    pub fn system() -> &'static str {
        r#"You are an experienced CrewAI consultant who designs agent-based systems with the CrewAI framework.
For the goal you are given:
1. Analyze what the goal requires
2. Define the agents needed, each with a role and a background
3. Specify the tasks and which agent performs each one
4. List the tools and APIs the agents will need
5. Describe the workflow in execution order

Respond with the JSON object only. Do not add commentary or Markdown formatting.

{
    "agents": [
        {
            "name": "agent_name",
            "role": "role_description",
            "background": "agent_background",
            "goals": ["goal1", "goal2"]
        }
    ],
    "tasks": [
        {
            "name": "task_name",
            "description": "task_description",
            "agent": "assigned_agent_name",
            "tools": ["tool1", "tool2"]
        }
    ],
    "tools": [
        {
            "name": "tool_name",
            "purpose": "tool_purpose",
            "api_requirements": ["req1", "req2"]
        }
    ],
    "workflow": [
        "step1",
        "step2"
    ]
}"#
    }

    /// The goal is sent verbatim as the only user message.
    pub fn user(goal: &Goal) -> String {
        goal.content().to_string()
    }

    /// System and user messages in request order
    pub fn messages(goal: &Goal) -> Vec<Message> {
        vec![
            Message::system(Self::system()),
            Message::user(Self::user(goal)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::entities::REQUIRED_FIELDS;
    use crate::session::entities::Role;

    #[test]
    fn test_system_prompt_names_every_field() {
        for field in REQUIRED_FIELDS {
            assert!(
                AdvisorPrompt::system().contains(&format!("\"{}\"", field)),
                "missing {}",
                field
            );
        }
        assert!(AdvisorPrompt::system().contains("api_requirements"));
    }

    #[test]
    fn test_goal_is_sole_user_message() {
        let goal = Goal::new("Summarise research papers weekly").unwrap();
        let messages = AdvisorPrompt::messages(&goal);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "Summarise research papers weekly");
    }
}

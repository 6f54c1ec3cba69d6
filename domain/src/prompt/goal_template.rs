//! Ready-made goals

use thiserror::Error;

/// A starting point for a goal description.
///
/// Every template except [`GoalTemplate::Custom`] carries a complete goal text
/// that can be submitted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalTemplate {
    WebScraping,
    ContentCreation,
    MarketAnalysis,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown template `{0}` (try /templates)")]
pub struct UnknownTemplate(pub String);

impl GoalTemplate {
    pub fn all() -> [GoalTemplate; 4] {
        [
            GoalTemplate::WebScraping,
            GoalTemplate::ContentCreation,
            GoalTemplate::MarketAnalysis,
            GoalTemplate::Custom,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalTemplate::WebScraping => "Web Scraping",
            GoalTemplate::ContentCreation => "Content Creation",
            GoalTemplate::MarketAnalysis => "Market Analysis",
            GoalTemplate::Custom => "Custom",
        }
    }

    /// Identifier accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            GoalTemplate::WebScraping => "web-scraping",
            GoalTemplate::ContentCreation => "content-creation",
            GoalTemplate::MarketAnalysis => "market-analysis",
            GoalTemplate::Custom => "custom",
        }
    }

    /// Prefilled goal text; empty for [`GoalTemplate::Custom`]
    pub fn goal_text(&self) -> &'static str {
        match self {
            GoalTemplate::WebScraping => {
                "Create a CrewAI system to scrape product information from e-commerce websites, \
                 including prices, reviews, and specifications. Store the data in a structured format."
            }
            GoalTemplate::ContentCreation => {
                "Design a CrewAI system to generate blog posts about technology trends. \
                 Include research, writing, editing, and SEO optimization."
            }
            GoalTemplate::MarketAnalysis => {
                "Build a CrewAI system to analyze cryptocurrency market trends, gather news, \
                 price data, and social media sentiment to provide investment insights."
            }
            GoalTemplate::Custom => "",
        }
    }
}

impl std::fmt::Display for GoalTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for GoalTemplate {
    type Err = UnknownTemplate;

    /// Accepts the slug or the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        GoalTemplate::all()
            .into_iter()
            .find(|t| t.slug() == wanted)
            .ok_or_else(|| UnknownTemplate(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::goal::Goal;

    #[test]
    fn test_parse_slug_and_label() {
        assert_eq!("web-scraping".parse::<GoalTemplate>(), Ok(GoalTemplate::WebScraping));
        assert_eq!("Content Creation".parse::<GoalTemplate>(), Ok(GoalTemplate::ContentCreation));
        assert_eq!("market_analysis".parse::<GoalTemplate>(), Ok(GoalTemplate::MarketAnalysis));
        assert_eq!(
            "poetry".parse::<GoalTemplate>(),
            Err(UnknownTemplate("poetry".to_string()))
        );
    }

    #[test]
    fn test_prefilled_templates_are_valid_goals() {
        for template in GoalTemplate::all() {
            if template == GoalTemplate::Custom {
                assert!(Goal::new(template.goal_text()).is_err());
            } else {
                assert!(Goal::new(template.goal_text()).is_ok(), "{}", template);
            }
        }
    }

    #[test]
    fn test_line_continuation_keeps_single_spaces() {
        assert!(!GoalTemplate::WebScraping.goal_text().contains("  "));
        assert!(GoalTemplate::WebScraping
            .goal_text()
            .contains("websites, including"));
    }
}

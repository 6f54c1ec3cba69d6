//! Payload extraction from model output.
//!
//! Models are asked to answer with bare JSON but often wrap it in a Markdown
//! fence or surround it with prose. Extraction runs an ordered list of
//! [`ExtractionStrategy`] implementations and stops at the first one that
//! yields parseable JSON:
//!
//! 1. [`DirectJson`]: the whole text is JSON
//! 2. [`FencedBlock`]: a ` ```json ` (or ` ```python `, or untagged) fence holding an object
//! 3. [`BraceSpan`]: everything from the first `{` to the last `}`
//!
//! The JSON that wins is then checked for the four required keys and
//! deserialized into an [`AdviceRecord`].

use super::entities::{AdviceRecord, REQUIRED_FIELDS};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;

/// Why a response could not be turned into an [`AdviceRecord`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("could not extract a valid structured payload")]
    NoPayload,

    #[error("structured payload is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("structured payload does not match the expected shape: {0}")]
    Malformed(String),
}

/// One way of locating a JSON payload inside raw model text.
pub trait ExtractionStrategy: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Return the parsed JSON if this strategy finds any.
    fn attempt(&self, text: &str) -> Option<Value>;
}

/// Parse the entire response as JSON.
pub struct DirectJson;

impl ExtractionStrategy for DirectJson {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn attempt(&self, text: &str) -> Option<Value> {
        serde_json::from_str(text).ok()
    }
}

static FENCED_OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json|python)?\s*(\{.*?\})\s*```")
        .expect("fenced block pattern is valid")
});

/// Parse the first fenced code block that holds a brace-delimited object.
pub struct FencedBlock;

impl ExtractionStrategy for FencedBlock {
    fn name(&self) -> &'static str {
        "fenced"
    }

    fn attempt(&self, text: &str) -> Option<Value> {
        let captures = FENCED_OBJECT.captures(text)?;
        serde_json::from_str(captures.get(1)?.as_str()).ok()
    }
}

/// Parse the span from the first `{` to the last `}`.
///
/// Not depth-aware: two separate objects, or braces in surrounding prose,
/// widen the span and usually make it unparseable.
pub struct BraceSpan;

impl ExtractionStrategy for BraceSpan {
    fn name(&self) -> &'static str {
        "brace_span"
    }

    fn attempt(&self, text: &str) -> Option<Value> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        if end < start {
            return None;
        }
        serde_json::from_str(&text[start..=end]).ok()
    }
}

/// A record together with the strategy that found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub record: AdviceRecord,
    pub strategy: &'static str,
}

/// Runs extraction strategies in order over raw model output.
pub struct PayloadExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl PayloadExtractor {
    /// Extractor with no strategies; add them with [`with_strategy`](Self::with_strategy).
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Append a strategy; it runs after every strategy already registered.
    pub fn with_strategy(mut self, strategy: impl ExtractionStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Names of the registered strategies, in the order they run
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Recover an [`AdviceRecord`] from raw model text.
    pub fn extract(&self, text: &str) -> Result<Extracted, ExtractionError> {
        let (value, strategy) = self
            .strategies
            .iter()
            .find_map(|s| s.attempt(text).map(|value| (value, s.name())))
            .ok_or(ExtractionError::NoPayload)?;

        let record = Self::to_record(value)?;
        Ok(Extracted { record, strategy })
    }

    fn to_record(value: Value) -> Result<AdviceRecord, ExtractionError> {
        if let Some(missing) = REQUIRED_FIELDS.iter().find(|key| value.get(**key).is_none()) {
            return Err(ExtractionError::MissingField(*missing));
        }
        serde_json::from_value(value).map_err(|e| ExtractionError::Malformed(e.to_string()))
    }
}

impl Default for PayloadExtractor {
    fn default() -> Self {
        Self::empty()
            .with_strategy(DirectJson)
            .with_strategy(FencedBlock)
            .with_strategy(BraceSpan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"agents":[{"name":"Researcher","role":"R","background":"B","goals":["g1"]}],"tasks":[{"name":"T1","description":"D","agent":"Researcher","tools":["web_search"]}],"tools":[{"name":"web_search","purpose":"P","api_requirements":[]}],"workflow":["step1","step2"]}"#;

    fn extract(text: &str) -> Result<Extracted, ExtractionError> {
        PayloadExtractor::default().extract(text)
    }

    #[test]
    fn test_default_strategy_order() {
        assert_eq!(
            PayloadExtractor::default().strategy_names(),
            vec!["direct", "fenced", "brace_span"]
        );
    }

    #[test]
    fn test_sample_response_extracts_directly() {
        let extracted = extract(SAMPLE).unwrap();
        assert_eq!(extracted.strategy, "direct");
        let record = extracted.record;
        assert_eq!(record.agents[0].name, "Researcher");
        assert_eq!(record.tasks[0].tools, vec!["web_search"]);
        assert!(record.tools[0].api_requirements.is_empty());
        assert_eq!(record.workflow, vec!["step1", "step2"]);
    }

    #[test]
    fn test_direct_parse_is_identity() {
        let record = extract(SAMPLE).unwrap().record;
        let reserialized = serde_json::to_value(&record).unwrap();
        let original: Value = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(reserialized, original);
    }

    #[test]
    fn test_fence_stripping_is_transparent() {
        let plain = extract(SAMPLE).unwrap().record;
        for fence in ["```json", "```python", "```"] {
            let wrapped = format!("Here is the plan:\n{}\n{}\n```\nGood luck!", fence, SAMPLE);
            let extracted = extract(&wrapped).unwrap();
            assert_eq!(extracted.strategy, "fenced");
            assert_eq!(extracted.record, plain);
        }
    }

    #[test]
    fn test_fenced_block_beats_braces_in_prose() {
        let text = format!(
            "Use {{placeholders}} sparingly.\n```json\n{}\n```\nThat's all {{folks}}",
            SAMPLE
        );
        let extracted = extract(&text).unwrap();
        assert_eq!(extracted.strategy, "fenced");
        assert_eq!(extracted.record.workflow.len(), 2);
    }

    #[test]
    fn test_brace_span_inside_prose() {
        let text = format!("Sure! Here's what I recommend: {} Let me know.", SAMPLE);
        let extracted = extract(&text).unwrap();
        assert_eq!(extracted.strategy, "brace_span");
        assert_eq!(extracted.record.agents.len(), 1);
    }

    #[test]
    fn test_unparseable_fence_falls_through_to_brace_span() {
        // The fence inside the workflow string captures `{x}`, which is not
        // JSON; the brace span still covers the whole object.
        let text = r#"Result: {"agents":[],"tasks":[],"tools":[],"workflow":["wrap code like ```{x}```"]}"#;
        let extracted = extract(text).unwrap();
        assert_eq!(extracted.strategy, "brace_span");
        assert_eq!(extracted.record.workflow, vec!["wrap code like ```{x}```"]);
    }

    #[test]
    fn test_trailing_comma_after_fence_uses_brace_span() {
        let text = format!("```json\n{},\n```", SAMPLE);
        let extracted = extract(&text).unwrap();
        assert_eq!(extracted.strategy, "brace_span");
    }

    #[test]
    fn test_no_brace_fails() {
        let text = "I'm sorry, I can't help with that.";
        assert_eq!(extract(text), Err(ExtractionError::NoPayload));
    }

    #[test]
    fn test_two_objects_defeat_loose_brace_span() {
        let text = r#"First {"agents": []} and then {"tasks": []}"#;
        assert_eq!(extract(text), Err(ExtractionError::NoPayload));
    }

    #[test]
    fn test_missing_field_is_reported() {
        let text = r#"{"agents":[],"tasks":[],"workflow":[]}"#;
        assert_eq!(extract(text), Err(ExtractionError::MissingField("tools")));
    }

    #[test]
    fn test_non_object_json_reports_first_field() {
        assert_eq!(extract("42"), Err(ExtractionError::MissingField("agents")));
        assert_eq!(
            extract(r#"["agents"]"#),
            Err(ExtractionError::MissingField("agents"))
        );
    }

    #[test]
    fn test_null_api_requirements_still_extract() {
        let text = r#"{"agents":[],"tasks":[],"tools":[{"name":"t","purpose":"p","api_requirements":null}],"workflow":["s"]}"#;
        let record = extract(text).unwrap().record;
        assert_eq!(record.tools[0].name, "t");
        assert!(record.tools[0].api_requirements.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let text = r#"{"agents":"none","tasks":[],"tools":[],"workflow":[]}"#;
        assert!(matches!(extract(text), Err(ExtractionError::Malformed(_))));
    }

    #[test]
    fn test_empty_sections_are_valid() {
        let text = r#"{"agents":[],"tasks":[],"tools":[],"workflow":[]}"#;
        let record = extract(text).unwrap().record;
        assert!(record.is_empty());
    }

    struct TrailingLine;

    impl ExtractionStrategy for TrailingLine {
        fn name(&self) -> &'static str {
            "trailing_line"
        }

        fn attempt(&self, text: &str) -> Option<Value> {
            serde_json::from_str(text.lines().last()?).ok()
        }
    }

    #[test]
    fn test_custom_strategy_runs_last() {
        let extractor = PayloadExtractor::empty()
            .with_strategy(DirectJson)
            .with_strategy(TrailingLine);
        let text = format!("Plan follows\n{}", SAMPLE);
        let extracted = extractor.extract(&text).unwrap();
        assert_eq!(extracted.strategy, "trailing_line");
        assert_eq!(
            extractor.strategy_names(),
            vec!["direct", "trailing_line"]
        );
    }

    #[test]
    fn test_empty_extractor_finds_nothing() {
        assert_eq!(
            PayloadExtractor::empty().extract(SAMPLE),
            Err(ExtractionError::NoPayload)
        );
    }
}

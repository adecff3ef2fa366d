use derive_setters::Setters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Notice attached to every assessment handed to the presentation layer.
pub const STANDARD_DISCLAIMER: &str =
    "This is an automated preliminary assessment. The strategies and success chances are estimates provided by an AI and are not binding. For a formal consultation and detailed analysis, please consider reaching out to FOGG Ventures directly. No information shared with this AI assistant is saved or stored by FOGG Ventures.";

/// Upper bound on the number of suggestions or follow-up questions in a
/// single result.
pub const MAX_RESULT_ITEMS: usize = 3;

/// A potential assistance strategy together with its estimated likelihood of
/// success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Setters)]
#[serde(rename_all = "camelCase")]
#[setters(into)]
pub struct StrategySuggestion {
    /// A potential assistance strategy FOGG Ventures could offer.
    pub strategy: String,
    /// Estimated percentage chance of success (0-100). Zero doubles as the
    /// placeholder when the estimate could not be trusted.
    #[schemars(range(min = 0, max = 100))]
    pub success_chance: u8,
    /// A brief explanation for the strategy and its success chance.
    pub reasoning: String,
}

impl StrategySuggestion {
    pub fn new(
        strategy: impl Into<String>,
        success_chance: u8,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            strategy: strategy.into(),
            success_chance: success_chance.min(100),
            reasoning: reasoning.into(),
        }
    }
}

/// The follow-up questions asked when the input is too vague to assess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClarificationRequest {
    /// One to three questions that would let the assessment be made.
    #[schemars(length(min = 1, max = 3))]
    pub follow_up_questions: Vec<String>,
    /// The user text that led to these questions.
    pub original_input: String,
}

impl ClarificationRequest {
    pub fn new(follow_up_questions: Vec<String>, original_input: impl Into<String>) -> Self {
        Self { follow_up_questions, original_input: original_input.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// One to three assistance strategies.
    #[schemars(length(min = 1, max = 3))]
    pub suggestions: Vec<StrategySuggestion>,
    pub disclaimer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Clarification {
    #[serde(flatten)]
    pub request: ClarificationRequest,
    pub disclaimer: String,
}

/// Outcome of a single assessment call. Serialized with a `type`
/// discriminator of either `assessment` or `clarification_needed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssessmentResult {
    Assessment(Assessment),
    ClarificationNeeded(Clarification),
}

impl AssessmentResult {
    pub fn assessment(suggestions: Vec<StrategySuggestion>, disclaimer: impl Into<String>) -> Self {
        Self::Assessment(Assessment { suggestions, disclaimer: disclaimer.into() })
    }

    pub fn clarification(request: ClarificationRequest, disclaimer: impl Into<String>) -> Self {
        Self::ClarificationNeeded(Clarification { request, disclaimer: disclaimer.into() })
    }

    pub fn disclaimer(&self) -> &str {
        match self {
            Self::Assessment(assessment) => &assessment.disclaimer,
            Self::ClarificationNeeded(clarification) => &clarification.disclaimer,
        }
    }

    pub fn is_clarification(&self) -> bool {
        matches!(self, Self::ClarificationNeeded(_))
    }

    pub fn as_clarification(&self) -> Option<&ClarificationRequest> {
        match self {
            Self::ClarificationNeeded(clarification) => Some(&clarification.request),
            Self::Assessment(_) => None,
        }
    }

    pub fn suggestions(&self) -> &[StrategySuggestion] {
        match self {
            Self::Assessment(assessment) => &assessment.suggestions,
            Self::ClarificationNeeded(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_assessment_wire_format() {
        let fixture = AssessmentResult::assessment(
            vec![StrategySuggestion::new("Site due diligence", 70, "Land titles vary.")],
            STANDARD_DISCLAIMER,
        );
        let actual = serde_json::to_value(&fixture).unwrap();
        let expected = json!({
            "type": "assessment",
            "suggestions": [{
                "strategy": "Site due diligence",
                "successChance": 70,
                "reasoning": "Land titles vary."
            }],
            "disclaimer": STANDARD_DISCLAIMER
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_clarification_wire_format() {
        let fixture = AssessmentResult::clarification(
            ClarificationRequest::new(vec!["Which sector?".to_string()], "I need help investing"),
            "notice",
        );
        let actual = serde_json::to_value(&fixture).unwrap();
        let expected = json!({
            "type": "clarification_needed",
            "followUpQuestions": ["Which sector?"],
            "originalInput": "I need help investing",
            "disclaimer": "notice"
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_clarification_deserializes_from_wire_format() {
        let fixture = json!({
            "type": "clarification_needed",
            "followUpQuestions": ["Which region?"],
            "originalInput": "Mining licence",
            "disclaimer": "notice"
        });
        let actual: AssessmentResult = serde_json::from_value(fixture).unwrap();
        let expected = AssessmentResult::clarification(
            ClarificationRequest::new(vec!["Which region?".to_string()], "Mining licence"),
            "notice",
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_strategy_suggestion_new_clamps_chance() {
        let actual = StrategySuggestion::new("s", 150, "r").success_chance;
        let expected = 100;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_accessors() {
        let fixture = AssessmentResult::clarification(
            ClarificationRequest::new(vec!["q".to_string()], "input"),
            "d",
        );
        assert!(fixture.is_clarification());
        assert_eq!(fixture.disclaimer(), "d");
        assert_eq!(fixture.suggestions(), &[] as &[StrategySuggestion]);
        assert_eq!(fixture.as_clarification().unwrap().original_input, "input");
    }
}

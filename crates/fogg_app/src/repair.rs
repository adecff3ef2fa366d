use fogg_domain::{
    AssessmentResult, ClarificationRequest, MAX_RESULT_ITEMS, STANDARD_DISCLAIMER,
    StrategySuggestion,
};
use serde_json::{Map, Value};
use tracing::warn;

pub(crate) const INPUT_ERROR_STRATEGY: &str = "Input Error";
pub(crate) const INPUT_ERROR_REASONING: &str =
    "Your description was too short or invalid. Please provide more details.";
pub(crate) const INPUT_ERROR_DISCLAIMER: &str =
    "Please ensure your input meets the required criteria for an effective assessment.";
pub(crate) const SERVICE_ERROR_NOTE: &str =
    " An error occurred while generating this assessment.";
pub(crate) const RETRY_QUESTION: &str =
    "We could not complete the assessment just now. Could you rephrase your description of what you need in Guyana, or try again in a moment?";
pub(crate) const GENERIC_QUESTION: &str =
    "Could you tell us more about your goals in Guyana, such as the sector, the scale of the project and your timeline?";
pub(crate) const PLACEHOLDER_STRATEGY: &str = "Further consultation recommended.";
pub(crate) const PLACEHOLDER_REASONING: &str =
    "The AI was unable to generate specific strategies based on the provided input. A more detailed discussion might be necessary to identify how FOGG Ventures can best assist you.";
pub(crate) const MISSING_STRATEGY: &str = "Strategy details unavailable.";
pub(crate) const MISSING_REASONING: &str = "Reasoning unavailable.";

/// Result for input too short to be worth sending to the model.
pub(crate) fn input_error() -> AssessmentResult {
    AssessmentResult::assessment(
        vec![StrategySuggestion::new(INPUT_ERROR_STRATEGY, 0, INPUT_ERROR_REASONING)],
        INPUT_ERROR_DISCLAIMER,
    )
}

/// Asks the user to rephrase or retry. `service_failed` appends the error
/// note to the disclaimer.
pub(crate) fn retry(submitted: &str, service_failed: bool) -> AssessmentResult {
    let disclaimer = if service_failed {
        format!("{STANDARD_DISCLAIMER}{SERVICE_ERROR_NOTE}")
    } else {
        STANDARD_DISCLAIMER.to_string()
    };
    AssessmentResult::clarification(
        ClarificationRequest::new(vec![RETRY_QUESTION.to_string()], submitted),
        disclaimer,
    )
}

fn placeholder_suggestion() -> StrategySuggestion {
    StrategySuggestion::new(PLACEHOLDER_STRATEGY, 0, PLACEHOLDER_REASONING)
}

/// Turns a clarification into the placeholder assessment, keeping its
/// disclaimer. Assessments pass through untouched.
pub(crate) fn force_assessment(result: AssessmentResult) -> AssessmentResult {
    match result {
        AssessmentResult::ClarificationNeeded(clarification) => {
            AssessmentResult::assessment(vec![placeholder_suggestion()], clarification.disclaimer)
        }
        assessment => assessment,
    }
}

/// Builds a valid result from whatever the model returned. Each field is
/// checked on its own and replaced only when it is unusable.
pub(crate) fn repair(payload: Option<Value>, submitted: &str) -> AssessmentResult {
    let Some(Value::Object(map)) = payload else {
        warn!("Assessment output is not a JSON object");
        return retry(submitted, false);
    };

    let disclaimer = non_blank(map.get("disclaimer")).unwrap_or(STANDARD_DISCLAIMER).to_string();

    match map.get("type").and_then(Value::as_str).map(str::trim) {
        Some("assessment") => AssessmentResult::assessment(suggestions(&map), disclaimer),
        Some("clarification_needed") => {
            AssessmentResult::clarification(clarification(&map, submitted), disclaimer)
        }
        other => {
            warn!(kind = ?other, "Assessment output has no recognised type");
            retry(submitted, false)
        }
    }
}

fn suggestions(map: &Map<String, Value>) -> Vec<StrategySuggestion> {
    let items = map
        .get("suggestions")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty());

    let Some(items) = items else {
        warn!("Assessment output has no suggestions, substituting placeholder");
        return vec![placeholder_suggestion()];
    };

    if items.len() > MAX_RESULT_ITEMS {
        warn!(count = items.len(), "Truncating surplus suggestions");
    }

    items.iter().take(MAX_RESULT_ITEMS).map(suggestion).collect()
}

fn suggestion(value: &Value) -> StrategySuggestion {
    let strategy = non_blank(value.get("strategy")).unwrap_or(MISSING_STRATEGY);
    let reasoning = non_blank(value.get("reasoning")).unwrap_or(MISSING_REASONING);
    StrategySuggestion::new(strategy, success_chance(value.get("successChance")), reasoning)
}

/// A JSON number within 0..=100, rounded. Anything else is the placeholder 0.
fn success_chance(value: Option<&Value>) -> u8 {
    match value.and_then(Value::as_f64) {
        Some(chance) if (0.0..=100.0).contains(&chance) => chance.round() as u8,
        other => {
            warn!(
                success_chance = ?value,
                parsed = ?other,
                "Replacing invalid success chance with 0"
            );
            0
        }
    }
}

fn clarification(map: &Map<String, Value>, submitted: &str) -> ClarificationRequest {
    let mut questions: Vec<String> = map
        .get("followUpQuestions")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| non_blank(Some(item)))
                .take(MAX_RESULT_ITEMS)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if questions.is_empty() {
        warn!("Clarification output has no questions, substituting a generic one");
        questions.push(GENERIC_QUESTION.to_string());
    }

    let original_input = non_blank(map.get("originalInput")).unwrap_or(submitted);
    ClarificationRequest::new(questions, original_input)
}

fn non_blank(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.trim().is_empty())
}

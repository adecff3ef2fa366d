use derive_more::{AsRef, Display};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum number of characters a description must have before it is worth
/// sending to the generation service.
pub const MIN_INPUT_CHARS: usize = 10;

/// Free text submitted for a preliminary assessment. Either the user's
/// original description or a transcript synthesized from an
/// [`crate::AssessmentSession`].
#[derive(Clone, Debug, PartialEq, Eq, Display, AsRef, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ConversationInput(String);

impl ConversationInput {
    pub fn new(input: impl Into<String>) -> Self {
        Self(input.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_long_enough(&self, min_chars: usize) -> bool {
        self.char_count() >= min_chars
    }
}

impl From<String> for ConversationInput {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ConversationInput {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_char_count_counts_characters_not_bytes() {
        let fixture = ConversationInput::new("café ñandú");
        let actual = fixture.char_count();
        let expected = 10;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_is_long_enough_boundary() {
        let fixture = ConversationInput::new("0123456789");
        assert!(fixture.is_long_enough(MIN_INPUT_CHARS));

        let fixture = ConversationInput::new("012345678");
        assert!(!fixture.is_long_enough(MIN_INPUT_CHARS));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let fixture = ConversationInput::from("I want to build a hotel in Georgetown");
        let actual = serde_json::to_string(&fixture).unwrap();
        let expected = r#""I want to build a hotel in Georgetown""#;
        assert_eq!(actual, expected);
    }
}

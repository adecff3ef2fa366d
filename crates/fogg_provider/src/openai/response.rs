use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub refusal: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Body of a non-streaming chat completion.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Response {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Response {
    /// Content of the first choice, if the model produced any.
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_into_content_takes_first_choice() {
        let fixture: Response = serde_json::from_str(
            r#"{"model": "m", "choices": [
                {"message": {"role": "assistant", "content": "{\"a\":1}"}, "finish_reason": "stop"},
                {"message": {"role": "assistant", "content": "second"}}
            ]}"#,
        )
        .unwrap();
        let actual = fixture.into_content();
        let expected = Some("{\"a\":1}".to_string());
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_into_content_refusal_has_no_content() {
        let fixture: Response = serde_json::from_str(
            r#"{"choices": [{"message": {"content": null, "refusal": "I can't help"}}]}"#,
        )
        .unwrap();
        assert_eq!(fixture.into_content(), None);
    }

    #[test]
    fn test_into_content_without_choices() {
        let fixture: Response = serde_json::from_str("{}").unwrap();
        assert_eq!(fixture.into_content(), None);
    }
}

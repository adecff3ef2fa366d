use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const TOPIC_SUGGESTION_COUNT: usize = 3;
pub const KEY_POINT_COUNT: usize = 5;
pub const MIN_TOPIC_CHARS: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogTopicRequest {
    /// Language the topics should be written in.
    pub language: String,
}

impl Default for BlogTopicRequest {
    fn default() -> Self {
        Self { language: "English".to_string() }
    }
}

impl BlogTopicRequest {
    pub fn new(language: impl Into<String>) -> Self {
        Self { language: language.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SuggestedTopic {
    /// A compelling blog post title.
    pub title: String,
    /// A one-sentence justification for why the topic matters to Guyana
    /// business readers.
    pub justification: String,
}

impl SuggestedTopic {
    pub fn new(title: impl Into<String>, justification: impl Into<String>) -> Self {
        Self { title: title.into(), justification: justification.into() }
    }

    fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.justification.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogTopicSuggestions {
    /// Exactly three suggested topics.
    #[schemars(length(min = 3, max = 3))]
    pub suggested_topics: Vec<SuggestedTopic>,
}

impl BlogTopicSuggestions {
    pub fn is_valid(&self) -> bool {
        self.suggested_topics.len() == TOPIC_SUGGESTION_COUNT
            && self.suggested_topics.iter().all(SuggestedTopic::is_complete)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogKeyPointsRequest {
    pub topic: String,
}

impl BlogKeyPointsRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self { topic: topic.into() }
    }

    pub fn validate(self) -> Result<Self> {
        if self.topic.trim().chars().count() < MIN_TOPIC_CHARS {
            return Err(Error::InvalidInput(
                "Topic must be at least 5 characters.".to_string(),
            ));
        }
        Ok(self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogKeyPoints {
    /// Exactly five key talking points.
    #[schemars(length(min = 5, max = 5))]
    pub key_points: Vec<String>,
}

impl BlogKeyPoints {
    pub fn is_valid(&self) -> bool {
        self.key_points.len() == KEY_POINT_COUNT
            && self.key_points.iter().all(|point| !point.trim().is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDraftRequest {
    pub topic: String,
    pub key_points: Vec<String>,
}

impl BlogPostDraftRequest {
    pub fn new(topic: impl Into<String>, key_points: Vec<String>) -> Self {
        Self { topic: topic.into(), key_points }
    }

    /// Drops blank key points and rejects a request with none left.
    pub fn validate(self) -> Result<Self> {
        let key_points: Vec<String> = self
            .key_points
            .into_iter()
            .map(|point| point.trim().to_string())
            .filter(|point| !point.is_empty())
            .collect();

        if key_points.is_empty() {
            return Err(Error::InvalidInput(
                "At least one key point is required to draft a post.".to_string(),
            ));
        }
        Ok(Self { topic: self.topic, key_points })
    }

    /// The key points as a markdown bullet list.
    pub fn bullet_list(&self) -> String {
        self.key_points
            .iter()
            .map(|point| format!("- {point}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BlogPostDraft {
    /// A suitable title for the blog post.
    pub title: String,
    /// The post body in markdown.
    pub content: String,
}

impl BlogPostDraft {
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_key_points_request_rejects_short_topic() {
        let actual = BlogKeyPointsRequest::new("  Oil ").validate().unwrap_err();
        let expected = Error::InvalidInput("Topic must be at least 5 characters.".to_string());
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_draft_request_drops_blank_points() {
        let fixture = BlogPostDraftRequest::new(
            "Mining",
            vec![" Licensing ".to_string(), "   ".to_string(), "Local content".to_string()],
        );
        let actual = fixture.validate().unwrap().key_points;
        let expected = vec!["Licensing".to_string(), "Local content".to_string()];
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_draft_request_without_points_fails() {
        let fixture = BlogPostDraftRequest::new("Mining", vec!["".to_string()]);
        assert!(fixture.validate().is_err());
    }

    #[test]
    fn test_bullet_list() {
        let fixture = BlogPostDraftRequest::new("t", vec!["a".to_string(), "b".to_string()]);
        let actual = fixture.bullet_list();
        let expected = "- a\n- b";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_topic_suggestions_require_three_complete_topics() {
        let topic = SuggestedTopic::new("Title", "Why");
        let fixture = BlogTopicSuggestions { suggested_topics: vec![topic.clone(), topic.clone()] };
        assert!(!fixture.is_valid());

        let fixture = BlogTopicSuggestions {
            suggested_topics: vec![topic.clone(), topic.clone(), SuggestedTopic::new("", "Why")],
        };
        assert!(!fixture.is_valid());

        let fixture =
            BlogTopicSuggestions { suggested_topics: vec![topic.clone(), topic.clone(), topic] };
        assert!(fixture.is_valid());
    }

    #[test]
    fn test_key_points_wire_name() {
        let fixture: BlogKeyPoints =
            serde_json::from_str(r#"{"keyPoints": ["a", "b", "c", "d", "e"]}"#).unwrap();
        assert!(fixture.is_valid());
    }
}

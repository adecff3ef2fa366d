use std::marker::PhantomData;

use serde::Serialize;

/// Name of a registered prompt template, tagged with the type of data it
/// renders.
#[derive(Debug)]
pub struct Template<V> {
    pub name: &'static str,
    _marker: PhantomData<fn() -> V>,
}

impl<V> Clone for Template<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Template<V> {}

impl<V: Serialize> Template<V> {
    pub const fn new(name: &'static str) -> Self {
        Self { name, _marker: PhantomData }
    }
}

/// Data for the preliminary assessment prompt.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentPrompt<'a> {
    pub user_input: &'a str,
    pub disclaimer: &'a str,
    /// Set once the clarification budget is spent.
    pub final_round: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicPrompt<'a> {
    pub language: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyPointsPrompt<'a> {
    pub topic: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftPrompt<'a> {
    pub topic: &'a str,
    pub key_points: &'a [String],
}

pub const ASSESSMENT_TEMPLATE: Template<AssessmentPrompt<'static>> =
    Template::new("preliminary-assessment.md");
pub const TOPIC_TEMPLATE: Template<TopicPrompt<'static>> =
    Template::new("blog-topic-suggestion.md");
pub const KEY_POINTS_TEMPLATE: Template<KeyPointsPrompt<'static>> =
    Template::new("blog-key-points.md");
pub const DRAFT_TEMPLATE: Template<DraftPrompt<'static>> = Template::new("blog-post-draft.md");

use std::sync::Arc;

use fogg_domain::{
    BlogKeyPoints, BlogKeyPointsRequest, BlogPostDraft, BlogPostDraftRequest, BlogTopicRequest,
    BlogTopicSuggestions, DRAFT_TEMPLATE, DraftPrompt, Flow, GenerationRequest, GenerationService,
    KEY_POINTS_TEMPLATE, KeyPointsPrompt, SuggestedTopic, TOPIC_TEMPLATE, TopicPrompt,
};
use tracing::{info, warn};

use crate::generate::{Generated, generate};
use crate::{Result, TemplateEngine};

const FALLBACK_TOPIC_JUSTIFICATION: &str = "General topic due to AI generation issue.";
const FALLBACK_TOPICS: [&str; 3] = [
    "AI Fallback: Exploring Guyana's Tech Scene",
    "AI Fallback: Investment Opportunities in Guyana",
    "AI Fallback: Navigating Business Regulations",
];
const ERROR_TOPIC_JUSTIFICATION: &str = "Please try again later.";
const ERROR_TOPICS: [&str; 3] = [
    "Error: Could not generate topics at this time.",
    "Error: Topic generation failed.",
    "Error: Unable to fetch suggestions.",
];

const FALLBACK_KEY_POINTS: [&str; 5] = [
    "AI Fallback: Introduction to the topic.",
    "AI Fallback: Main challenge or opportunity.",
    "AI Fallback: Potential solution or strategy.",
    "AI Fallback: Example or case study.",
    "AI Fallback: Conclusion and call to action.",
];
const ERROR_KEY_POINTS: [&str; 5] = [
    "Error: Could not generate key points for this topic.",
    "Please try a different topic or rephrase.",
    "Ensure the topic is specific enough.",
    "Contact support if the issue persists.",
    "Thank you for your understanding.",
];

const FALLBACK_DRAFT: &str =
    "Error: AI failed to generate content. Please refine key points or topic.";
const ERROR_DRAFT: &str =
    "An unexpected error occurred while generating the blog post draft. Please try again.";

/// Drafts are long-form prose; sampled warmer than the structured flows.
const DRAFT_TEMPERATURE: f32 = 0.7;

fn topics(titles: [&str; 3], justification: &str) -> BlogTopicSuggestions {
    BlogTopicSuggestions {
        suggested_topics: titles
            .into_iter()
            .map(|title| SuggestedTopic::new(title, justification))
            .collect(),
    }
}

fn key_points(points: [&str; 5]) -> BlogKeyPoints {
    BlogKeyPoints { key_points: points.into_iter().map(str::to_string).collect() }
}

/// Suggests three blog topics about doing business in Guyana.
pub struct BlogTopicFlow<S> {
    services: Arc<S>,
    templates: TemplateEngine,
}

impl<S: GenerationService> BlogTopicFlow<S> {
    pub fn new(services: Arc<S>) -> Self {
        Self { services, templates: TemplateEngine::default() }
    }

    pub async fn suggest_topics(&self, request: BlogTopicRequest) -> Result<BlogTopicSuggestions> {
        let language = match request.language.trim() {
            "" => BlogTopicRequest::default().language,
            language => language.to_string(),
        };
        let prompt = self.templates.render(TOPIC_TEMPLATE, &TopicPrompt { language: &language })?;
        info!(language = %language, "Suggesting blog topics");

        let request = GenerationRequest::for_output::<BlogTopicSuggestions>(
            Flow::BlogTopicSuggestion,
            prompt,
        );
        Ok(match generate::<S, BlogTopicSuggestions>(&self.services, request).await {
            Generated::Parsed(output) if output.is_valid() => output,
            Generated::Parsed(output) => {
                warn!(count = output.suggested_topics.len(), "Expected three complete topics");
                topics(FALLBACK_TOPICS, FALLBACK_TOPIC_JUSTIFICATION)
            }
            Generated::Unusable => topics(FALLBACK_TOPICS, FALLBACK_TOPIC_JUSTIFICATION),
            Generated::Failed => topics(ERROR_TOPICS, ERROR_TOPIC_JUSTIFICATION),
        })
    }
}

/// Outlines a blog topic as five key talking points.
pub struct BlogKeyPointsFlow<S> {
    services: Arc<S>,
    templates: TemplateEngine,
}

impl<S: GenerationService> BlogKeyPointsFlow<S> {
    pub fn new(services: Arc<S>) -> Self {
        Self { services, templates: TemplateEngine::default() }
    }

    /// Fails only when the topic is too short.
    pub async fn key_points(&self, request: BlogKeyPointsRequest) -> Result<BlogKeyPoints> {
        let request = request.validate()?;
        let topic = request.topic.trim();
        let prompt = self.templates.render(KEY_POINTS_TEMPLATE, &KeyPointsPrompt { topic })?;
        info!(topic = %topic, "Generating blog key points");

        let generation =
            GenerationRequest::for_output::<BlogKeyPoints>(Flow::BlogKeyPoints, prompt);
        Ok(match generate::<S, BlogKeyPoints>(&self.services, generation).await {
            Generated::Parsed(output) if output.is_valid() => output,
            Generated::Parsed(output) => {
                warn!(count = output.key_points.len(), "Expected five non-blank key points");
                key_points(FALLBACK_KEY_POINTS)
            }
            Generated::Unusable => key_points(FALLBACK_KEY_POINTS),
            Generated::Failed => key_points(ERROR_KEY_POINTS),
        })
    }
}

/// Writes a blog post draft from a topic and its key points.
pub struct BlogDraftFlow<S> {
    services: Arc<S>,
    templates: TemplateEngine,
}

impl<S: GenerationService> BlogDraftFlow<S> {
    pub fn new(services: Arc<S>) -> Self {
        Self { services, templates: TemplateEngine::default() }
    }

    /// Fails only when no non-blank key point is given.
    pub async fn draft(&self, request: BlogPostDraftRequest) -> Result<BlogPostDraft> {
        let request = request.validate()?;
        let prompt = self.templates.render(
            DRAFT_TEMPLATE,
            &DraftPrompt { topic: &request.topic, key_points: &request.key_points },
        )?;
        info!(topic = %request.topic, key_points = request.key_points.len(), "Drafting blog post");

        let generation =
            GenerationRequest::for_output::<BlogPostDraft>(Flow::BlogPostDraft, prompt)
                .temperature(DRAFT_TEMPERATURE);
        let notice = match generate::<S, BlogPostDraft>(&self.services, generation).await {
            Generated::Parsed(output) if output.is_valid() => return Ok(output),
            Generated::Parsed(_) => {
                warn!("Draft is missing a title or content");
                FALLBACK_DRAFT
            }
            Generated::Unusable => FALLBACK_DRAFT,
            Generated::Failed => ERROR_DRAFT,
        };

        Ok(BlogPostDraft {
            title: format!("Draft: {}", request.topic),
            content: format!("{notice}\n\nKey Points Received:\n{}", request.bullet_list()),
        })
    }
}

use std::sync::Arc;

use fogg_domain::{
    ASSESSMENT_TEMPLATE, AssessmentPrompt, AssessmentResult, AssessmentSession, ConversationInput,
    Flow, GenerationRequest, GenerationService, MIN_INPUT_CHARS, STANDARD_DISCLAIMER,
};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::TemplateEngine;
use crate::generate::{Generated, generate};
use crate::repair;

/// Turns one block of user text into exactly one [`AssessmentResult`].
///
/// The engine is stateless and never fails: invalid input, an unreachable
/// service and malformed output all degrade to a fallback result. Multi-turn
/// state lives in the caller's [`AssessmentSession`].
pub struct AssessmentEngine<S> {
    services: Arc<S>,
    templates: TemplateEngine,
    min_input_chars: usize,
}

impl<S> Clone for AssessmentEngine<S> {
    fn clone(&self) -> Self {
        Self {
            services: self.services.clone(),
            templates: self.templates,
            min_input_chars: self.min_input_chars,
        }
    }
}

impl<S: GenerationService> AssessmentEngine<S> {
    pub fn new(services: Arc<S>) -> Self {
        Self { services, templates: TemplateEngine::default(), min_input_chars: MIN_INPUT_CHARS }
    }

    /// Shortest input, in characters, that is sent to the service.
    pub fn min_input_chars(mut self, min_input_chars: usize) -> Self {
        self.min_input_chars = min_input_chars;
        self
    }

    /// Lets the model either assess or ask follow-up questions.
    pub async fn assess(&self, input: impl Into<ConversationInput>) -> AssessmentResult {
        self.run(input.into(), false).await
    }

    /// Like [`Self::assess`], but always ends in an assessment: a clarification
    /// from the model, a failed call or unusable output all become the
    /// placeholder assessment, keeping the disclaimer (and its error note).
    pub async fn assess_final(&self, input: impl Into<ConversationInput>) -> AssessmentResult {
        self.run(input.into(), true).await
    }

    /// Assesses the session's transcript, forcing a final assessment once its
    /// clarification budget is spent.
    pub async fn assess_session(&self, session: &AssessmentSession) -> AssessmentResult {
        let input = session.next_input();
        if session.requires_final_assessment() {
            info!(
                rounds = session.rounds().len(),
                "Clarification budget spent, forcing assessment"
            );
            self.assess_final(input).await
        } else {
            self.assess(input).await
        }
    }

    async fn run(&self, input: ConversationInput, final_round: bool) -> AssessmentResult {
        let result = self.attempt(&input, final_round).await;
        if final_round && result.is_clarification() {
            warn!("Clarification after the final round, substituting placeholder assessment");
            return repair::force_assessment(result);
        }
        result
    }

    async fn attempt(&self, input: &ConversationInput, final_round: bool) -> AssessmentResult {
        if !input.is_long_enough(self.min_input_chars) {
            warn!(
                chars = input.char_count(),
                min_chars = self.min_input_chars,
                "Input too short for assessment"
            );
            return repair::input_error();
        }

        let prompt = AssessmentPrompt {
            user_input: input.as_str(),
            disclaimer: STANDARD_DISCLAIMER,
            final_round,
        };
        let prompt = match self.templates.render(ASSESSMENT_TEMPLATE, &prompt) {
            Ok(prompt) => prompt,
            Err(e) => {
                error!(error = ?e, "Failed to build assessment prompt");
                return repair::retry(input.as_str(), true);
            }
        };

        info!(chars = input.char_count(), final_round, "Requesting preliminary assessment");
        let request =
            GenerationRequest::for_output::<AssessmentResult>(Flow::PreliminaryAssessment, prompt);

        let payload = match generate::<S, Value>(&self.services, request).await {
            Generated::Parsed(value) => Some(value),
            Generated::Unusable => None,
            Generated::Failed => return repair::retry(input.as_str(), true),
        };

        repair::repair(payload, input.as_str())
    }
}

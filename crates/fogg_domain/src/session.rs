use serde::{Deserialize, Serialize};

use crate::{AssessmentResult, ClarificationRequest, ConversationInput, Error, Result};

/// Default number of clarification rounds allowed before a final assessment
/// is forced.
pub const DEFAULT_MAX_CLARIFICATION_ROUNDS: usize = 2;

const NO_ANSWER: &str = "(no answer provided)";

/// One completed clarification exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarificationRound {
    pub questions: Vec<String>,
    pub answers: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingAssessment,
    AwaitingClarificationAnswers,
}

/// Caller-held conversation state for a multi-turn assessment.
///
/// The assessment engine never stores anything between calls. Whoever drives
/// the conversation keeps one of these, feeds every result to
/// [`AssessmentSession::observe`], records answers with
/// [`AssessmentSession::answer`] and resubmits [`AssessmentSession::next_input`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSession {
    original_query: String,
    rounds: Vec<ClarificationRound>,
    pending: Option<ClarificationRequest>,
    max_rounds: usize,
}

impl AssessmentSession {
    pub fn new(original_query: impl Into<String>) -> Self {
        Self::with_max_rounds(original_query, DEFAULT_MAX_CLARIFICATION_ROUNDS)
    }

    pub fn with_max_rounds(original_query: impl Into<String>, max_rounds: usize) -> Self {
        Self {
            original_query: original_query.into(),
            rounds: Vec::new(),
            pending: None,
            max_rounds,
        }
    }

    pub fn rounds(&self) -> &[ClarificationRound] {
        &self.rounds
    }

    pub fn pending(&self) -> Option<&ClarificationRequest> {
        self.pending.as_ref()
    }

    pub fn state(&self) -> SessionState {
        if self.pending.is_some() {
            SessionState::AwaitingClarificationAnswers
        } else {
            SessionState::AwaitingAssessment
        }
    }

    /// Whether the next submission must produce strategies rather than more
    /// questions.
    pub fn requires_final_assessment(&self) -> bool {
        self.rounds.len() >= self.max_rounds
    }

    /// Records the outcome of the latest `assess` call.
    pub fn observe(&mut self, result: &AssessmentResult) -> SessionState {
        self.pending = result.as_clarification().cloned();
        self.state()
    }

    /// Closes the pending clarification round with the user's answers.
    /// Questions without a matching answer are recorded as unanswered; surplus
    /// answers are ignored.
    pub fn answer(&mut self, answers: Vec<String>) -> Result<&ClarificationRound> {
        let pending = self.pending.take().ok_or(Error::NoPendingClarification)?;
        let questions = pending.follow_up_questions;
        let answers = (0..questions.len())
            .map(|i| {
                answers
                    .get(i)
                    .map(|answer| answer.trim())
                    .filter(|answer| !answer.is_empty())
                    .unwrap_or(NO_ANSWER)
                    .to_string()
            })
            .collect();

        self.rounds.push(ClarificationRound { questions, answers });
        Ok(&self.rounds[self.rounds.len() - 1])
    }

    /// Text to submit next: the original query alone before any
    /// clarification, otherwise the query followed by every Q&A pair.
    pub fn next_input(&self) -> ConversationInput {
        if self.rounds.is_empty() {
            return ConversationInput::new(self.original_query.clone());
        }

        let mut transcript = format!(
            "Original request: {}\n\nFollow-up questions and answers:",
            self.original_query
        );
        for round in &self.rounds {
            for (question, answer) in round.questions.iter().zip(&round.answers) {
                transcript.push_str(&format!("\nQ: {question}\nA: {answer}"));
            }
        }
        ConversationInput::new(transcript)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{STANDARD_DISCLAIMER, StrategySuggestion};

    fn clarification(questions: &[&str]) -> AssessmentResult {
        AssessmentResult::clarification(
            ClarificationRequest::new(
                questions.iter().map(|q| q.to_string()).collect(),
                "I want to invest",
            ),
            STANDARD_DISCLAIMER,
        )
    }

    #[test]
    fn test_next_input_without_rounds_is_original_query() {
        let fixture = AssessmentSession::new("I want to invest in Guyana");
        let actual = fixture.next_input();
        let expected = ConversationInput::new("I want to invest in Guyana");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_observe_clarification_moves_to_awaiting_answers() {
        let mut fixture = AssessmentSession::new("I want to invest in Guyana");
        let actual = fixture.observe(&clarification(&["Which sector?"]));
        let expected = SessionState::AwaitingClarificationAnswers;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_observe_assessment_clears_pending() {
        let mut fixture = AssessmentSession::new("I want to invest in Guyana");
        fixture.observe(&clarification(&["Which sector?"]));
        let actual = fixture.observe(&AssessmentResult::assessment(
            vec![StrategySuggestion::new("s", 50, "r")],
            STANDARD_DISCLAIMER,
        ));
        let expected = SessionState::AwaitingAssessment;
        assert_eq!(actual, expected);
        assert_eq!(fixture.pending(), None);
    }

    #[test]
    fn test_answer_without_pending_fails() {
        let mut fixture = AssessmentSession::new("I want to invest in Guyana");
        let actual = fixture.answer(vec!["oil".to_string()]).unwrap_err();
        let expected = Error::NoPendingClarification;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_answer_pads_missing_answers() {
        let mut fixture = AssessmentSession::new("I want to invest in Guyana");
        fixture.observe(&clarification(&["Which sector?", "What budget?"]));
        let actual = fixture.answer(vec!["Agriculture".to_string()]).unwrap().clone();
        let expected = ClarificationRound {
            questions: vec!["Which sector?".to_string(), "What budget?".to_string()],
            answers: vec!["Agriculture".to_string(), "(no answer provided)".to_string()],
        };
        assert_eq!(actual, expected);
        assert_eq!(fixture.state(), SessionState::AwaitingAssessment);
    }

    #[test]
    fn test_next_input_synthesizes_transcript() {
        let mut fixture = AssessmentSession::new("I want to invest in Guyana");
        fixture.observe(&clarification(&["Which sector?"]));
        fixture.answer(vec!["Agriculture".to_string()]).unwrap();
        fixture.observe(&clarification(&["What budget?"]));
        fixture.answer(vec!["  $2M ".to_string()]).unwrap();

        let actual = fixture.next_input();
        let expected = ConversationInput::new(
            "Original request: I want to invest in Guyana\n\n\
             Follow-up questions and answers:\n\
             Q: Which sector?\nA: Agriculture\n\
             Q: What budget?\nA: $2M",
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_requires_final_assessment_after_max_rounds() {
        let mut fixture = AssessmentSession::with_max_rounds("I want to invest in Guyana", 1);
        assert!(!fixture.requires_final_assessment());

        fixture.observe(&clarification(&["Which sector?"]));
        fixture.answer(vec!["Mining".to_string()]).unwrap();

        assert!(fixture.requires_final_assessment());
    }
}

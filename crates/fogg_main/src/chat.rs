use anyhow::{Context as _, Result};
use fogg_app::AssessmentEngine;
use fogg_domain::{Assessment, AssessmentResult, AssessmentSession, GenerationService};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const PROMPT: &str = "> ";

/// Runs one interactive assessment: reads the description, answers each
/// round of follow-up questions and prints the final strategies. Ends early,
/// without error, when input runs out before the assessment is reached.
pub async fn chat<S, R, W>(
    engine: &AssessmentEngine<S>,
    max_rounds: usize,
    reader: R,
    mut writer: W,
) -> Result<()>
where
    S: GenerationService,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    write(&mut writer, "Describe what you need help with in Guyana.\n").await?;
    write(&mut writer, PROMPT).await?;
    let Some(query) = lines.next_line().await.context("Failed to read input")? else {
        return Ok(());
    };

    let mut session = AssessmentSession::with_max_rounds(query.trim(), max_rounds);
    loop {
        let result = engine.assess_session(&session).await;
        session.observe(&result);

        let questions = match result {
            AssessmentResult::Assessment(assessment) => {
                write(&mut writer, &render_assessment(&assessment)).await?;
                return Ok(());
            }
            AssessmentResult::ClarificationNeeded(clarification) => {
                clarification.request.follow_up_questions
            }
        };

        write(&mut writer, "\nA few details would help:\n").await?;
        let mut answers = Vec::with_capacity(questions.len());
        for question in &questions {
            write(&mut writer, &format!("{question}\n{PROMPT}")).await?;
            match lines.next_line().await.context("Failed to read input")? {
                Some(answer) => answers.push(answer),
                None => {
                    write(&mut writer, "\nInput closed, ending the session.\n").await?;
                    return Ok(());
                }
            }
        }
        session.answer(answers)?;
    }
}

async fn write<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

fn render_assessment(assessment: &Assessment) -> String {
    let mut out = String::from("\nPreliminary assessment:\n");
    for (i, suggestion) in assessment.suggestions.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} ({}% chance of success)\n   {}\n",
            i + 1,
            suggestion.strategy,
            suggestion.success_chance,
            suggestion.reasoning
        ));
    }
    out.push_str(&format!("\n{}\n", assessment.disclaimer));
    out
}

use std::sync::Arc;

use anyhow::{Context as _, Result};
use fogg_app::{AssessmentEngine, BlogDraftFlow, BlogKeyPointsFlow, BlogTopicFlow, EnquiryService};
use fogg_config::FoggConfig;
use fogg_domain::{BlogKeyPointsRequest, BlogPostDraftRequest, BlogTopicRequest, EnquiryForm};
use fogg_provider::OpenAiProvider;
use serde::Serialize;
use tracing::{info, warn};

use crate::{BlogCommand, Cli, Command, chat};

/// Executes one CLI command. Results are printed to stdout as JSON, except
/// for the interactive chat.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Assess { text } => {
            let (config, provider) = connect()?;
            let engine = AssessmentEngine::new(provider)
                .min_input_chars(config.assessment.min_input_chars);
            print_json(&engine.assess(text.join(" ")).await)
        }
        Command::Chat => {
            let (config, provider) = connect()?;
            let engine = AssessmentEngine::new(provider)
                .min_input_chars(config.assessment.min_input_chars);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            chat(
                &engine,
                config.assessment.max_clarification_rounds,
                stdin,
                tokio::io::stdout(),
            )
            .await
        }
        Command::Blog(BlogCommand::Topics { language }) => {
            let (_, provider) = connect()?;
            let topics =
                BlogTopicFlow::new(provider).suggest_topics(BlogTopicRequest::new(language)).await?;
            print_json(&topics)
        }
        Command::Blog(BlogCommand::KeyPoints { topic }) => {
            let (_, provider) = connect()?;
            let points = BlogKeyPointsFlow::new(provider)
                .key_points(BlogKeyPointsRequest::new(topic))
                .await?;
            print_json(&points)
        }
        Command::Blog(BlogCommand::Draft { topic, points }) => {
            let (_, provider) = connect()?;
            let draft = BlogDraftFlow::new(provider)
                .draft(BlogPostDraftRequest::new(topic, points))
                .await?;
            print_json(&draft)
        }
        Command::Enquire { name, email, subject, message } => {
            let outcome =
                EnquiryService::new().submit(EnquiryForm { name, email, subject, message });
            print_json(&outcome)
        }
    }
}

/// Loads configuration and builds the generation provider from it.
fn connect() -> Result<(FoggConfig, Arc<OpenAiProvider>)> {
    let config = FoggConfig::from_env().context("Failed to load configuration")?;
    if config.provider.api_key.is_none() {
        warn!("No API key configured; set FOGG_PROVIDER__API_KEY");
    }
    info!(model = %config.provider.model, base_url = %config.provider.base_url, "Using provider");
    let provider = OpenAiProvider::new(config.provider.clone(), &config.http)?;
    Ok((config, Arc::new(provider)))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

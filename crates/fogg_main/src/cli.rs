use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Preliminary business assessments and content tools for FOGG Ventures")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Request a one-shot preliminary assessment and print it as JSON.
    Assess {
        /// What you need help with in Guyana.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Start an interactive assessment that may ask follow-up questions.
    Chat,

    /// Blog authoring tools.
    #[command(subcommand)]
    Blog(BlogCommand),

    /// Submit a contact enquiry.
    Enquire {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        message: String,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum BlogCommand {
    /// Suggest three blog topics.
    Topics {
        /// Language the topics should be written in.
        #[arg(long, default_value = "English")]
        language: String,
    },

    /// Outline a topic as five key points.
    KeyPoints {
        /// Blog topic, at least 5 characters.
        topic: String,
    },

    /// Draft a post from a topic and its key points.
    Draft {
        #[arg(long)]
        topic: String,

        /// A key point to cover; repeat for each point.
        #[arg(long = "point", required = true)]
        points: Vec<String>,
    },
}

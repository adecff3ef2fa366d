mod client;
mod error;
mod openai;
mod utils;

pub use client::build_http_client;
pub use error::Error;
pub use openai::OpenAiProvider;

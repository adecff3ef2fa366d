#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Upstream returned HTTP {status}: {body}")]
    InvalidStatusCode { status: u16, body: String },

    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),

    #[error("Request could not be completed")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to decode chat completion")]
    Decode(#[source] serde_json::Error),
}

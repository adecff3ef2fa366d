#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("No clarification is pending; submit an assessment request first")]
    NoPendingClarification,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

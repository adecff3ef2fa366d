#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

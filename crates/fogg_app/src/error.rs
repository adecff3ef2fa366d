#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] fogg_domain::Error),

    #[error("Failed to render prompt template '{name}'")]
    Template {
        name: &'static str,
        #[source]
        source: handlebars::RenderError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

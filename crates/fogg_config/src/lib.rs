mod app_config;
mod error;
mod http_config;

pub use app_config::*;
pub use error::*;
pub use http_config::*;

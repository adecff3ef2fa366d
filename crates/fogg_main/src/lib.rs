mod chat;
mod cli;
mod run;

pub use chat::chat;
pub use cli::{BlogCommand, Cli, Command};
pub use run::run;

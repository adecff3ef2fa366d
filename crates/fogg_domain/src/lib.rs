mod assessment;
mod blog;
mod conversation;
mod enquiry;
mod error;
mod generation;
mod session;
mod template;

pub use assessment::*;
pub use blog::*;
pub use conversation::*;
pub use enquiry::*;
pub use error::*;
pub use generation::*;
pub use session::*;
pub use template::*;

mod assessment;
mod blog;
mod enquiry;
mod error;
mod generate;
mod repair;
mod template_engine;

#[cfg(test)]
mod test_utils;

pub use assessment::*;
pub use blog::*;
pub use enquiry::*;
pub use error::*;
pub use template_engine::*;

mod error;
mod parser;
mod resilient;

pub use error::{JsonRepairError, Result};
pub use parser::{extract_payload, json_repair};
pub use resilient::from_str;

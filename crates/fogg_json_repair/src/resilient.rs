use serde::de::DeserializeOwned;

use crate::{JsonRepairError, json_repair};

/// Deserializes model output, falling back to [`json_repair`] when the text is
/// not valid JSON as-is.
pub fn from_str<T>(s: &str) -> Result<T, JsonRepairError>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(s)
        .map_err(JsonRepairError::from)
        .or_else(|_| {
            tracing::warn!("Model output is not valid JSON, attempting repair");
            json_repair::<T>(s)
                .inspect(|_| tracing::debug!("JSON repair successful"))
                .inspect_err(|e| tracing::warn!(error = %e, "JSON repair failed"))
        })
}

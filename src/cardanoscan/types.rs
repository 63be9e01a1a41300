use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Pool stats (GET /pool/stats)
// ---------------------------------------------------------------------------

/// Numeric fields are kept as text here and parsed by the normalizer, since
/// the explorer sends large amounts as JSON strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPoolStats {
    #[serde(default, deserialize_with = "string_or_number")]
    pub saturation_level: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub live_stake: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub active_pledge: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub current_epoch_blocks: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub lifetime_blocks: String,
}

// ---------------------------------------------------------------------------
// Pool details (GET /pool)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPoolDetails {
    #[serde(default)]
    pub status: bool,
    #[serde(default, deserialize_with = "string_or_number")]
    pub declared_pledge: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub margin: String,
    #[serde(default)]
    pub ticker: Option<String>,
}

/// Accept `"123"` and `123` alike, yielding the numeric text.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PledgeMet, PoolStatus};

/// Normalized pool statistics, in the shape the site's data dashboard reads.
///
/// Amounts are already converted to ADA display strings, so decoding this
/// record and encoding it again yields the same values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSnapshot {
    /// Saturation exactly as reported by the explorer.
    pub saturation_level: String,
    pub saturation_float: f64,
    pub status: PoolStatus,
    pub live_stake: String,
    pub active_pledge: String,
    pub declared_pledge: String,
    pub pledge_met: PledgeMet,
    pub margin: i64,
    pub current_epoch_blocks: u64,
    pub lifetime_blocks: u64,
    pub pool_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    pub updated_at: DateTime<Utc>,
}

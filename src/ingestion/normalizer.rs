use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::cardanoscan::{ApiPoolDetails, ApiPoolStats};
use crate::models::{Lovelace, PledgeMet, PoolSnapshot, PoolStatus};

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("malformed {shape} response")]
    Json {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("field {field} is missing")]
    Missing { field: &'static str },

    #[error("field {field} is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

pub fn decode_stats(body: &[u8]) -> Result<ApiPoolStats, NormalizeError> {
    serde_json::from_slice(body).map_err(|source| NormalizeError::Json {
        shape: "pool stats",
        source,
    })
}

pub fn decode_details(body: &[u8]) -> Result<ApiPoolDetails, NormalizeError> {
    serde_json::from_slice(body).map_err(|source| NormalizeError::Json {
        shape: "pool details",
        source,
    })
}

/// Turn the two explorer responses into the record published on the site.
///
/// Stake and pledge amounts arrive in lovelace and are published in ADA with
/// two decimals. The pledge check is done on the raw lovelace values.
pub fn normalize(
    stats: &ApiPoolStats,
    details: &ApiPoolDetails,
    pool_id: &str,
    updated_at: DateTime<Utc>,
) -> Result<PoolSnapshot, NormalizeError> {
    let live_stake: Lovelace = parse_field("liveStake", &stats.live_stake)?;
    let active_pledge: Lovelace = parse_field("activePledge", &stats.active_pledge)?;
    let declared_pledge: Lovelace = parse_field("declaredPledge", &details.declared_pledge)?;

    let saturation_float: f64 = parse_field("saturationLevel", &stats.saturation_level)?;
    if !saturation_float.is_finite() {
        return Err(NormalizeError::InvalidNumber {
            field: "saturationLevel",
            value: stats.saturation_level.clone(),
        });
    }

    let margin: i64 = parse_field("margin", &details.margin)?;
    let current_epoch_blocks: u64 =
        parse_field("currentEpochBlocks", &stats.current_epoch_blocks)?;
    let lifetime_blocks: u64 = parse_field("lifetimeBlocks", &stats.lifetime_blocks)?;

    let ticker = details
        .ticker
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Ok(PoolSnapshot {
        saturation_level: stats.saturation_level.trim().to_string(),
        saturation_float,
        status: PoolStatus::from_api_flag(details.status),
        live_stake: live_stake.to_ada_display(),
        active_pledge: active_pledge.to_ada_display(),
        declared_pledge: declared_pledge.to_ada_display(),
        pledge_met: PledgeMet::compare(active_pledge, declared_pledge),
        margin,
        current_epoch_blocks,
        lifetime_blocks,
        pool_id: pool_id.to_string(),
        ticker,
        updated_at,
    })
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::Missing { field });
    }
    trimmed.parse::<T>().map_err(|_| NormalizeError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

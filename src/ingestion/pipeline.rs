use chrono::Utc;

use crate::cardanoscan::CardanoscanClient;
use crate::config::AppConfig;
use crate::errors::PoolDataError;
use crate::ingestion::normalizer::{decode_details, decode_stats, normalize};
use crate::models::PoolSnapshot;
use crate::site::{self, Template};

/// Run one refresh of the site data:
/// 1. Load the template and check for the placeholder
/// 2. Fetch pool stats, then pool details
/// 3. Decode and normalize into a `PoolSnapshot`
/// 4. Write the patched HTML and the JSON sidecar
///
/// Nothing is written unless every earlier step succeeded.
pub async fn run_injection(config: &AppConfig) -> Result<PoolSnapshot, PoolDataError> {
    let template = Template::load(config.html_path())?;

    let client = CardanoscanClient::new(reqwest::Client::new(), config);
    let stats_body = client.fetch_pool_stats().await?;
    let details_body = client.fetch_pool_details().await?;

    let stats = decode_stats(&stats_body)?;
    let details = decode_details(&details_body)?;

    tracing::info!(
        saturation = %stats.saturation_level,
        live_stake = %stats.live_stake,
        active_pledge = %stats.active_pledge,
        epoch_blocks = %stats.current_epoch_blocks,
        lifetime_blocks = %stats.lifetime_blocks,
        "Pool stats fetched"
    );
    tracing::info!(
        active = details.status,
        declared_pledge = %details.declared_pledge,
        margin = %details.margin,
        "Pool details fetched"
    );

    let snapshot = normalize(&stats, &details, &config.pool_id, Utc::now())?;

    tracing::debug!(
        status = %snapshot.status,
        pledge_met = snapshot.pledge_met.is_met(),
        "Pool snapshot normalized"
    );

    site::inject(&template, &snapshot, &config.json_path())?;

    Ok(snapshot)
}

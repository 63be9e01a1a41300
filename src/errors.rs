use thiserror::Error;

use crate::cardanoscan::CardanoscanError;
use crate::ingestion::normalizer::NormalizeError;
use crate::site::SiteError;

/// Failure of one pipeline stage. The message names the stage; the cause is
/// available through `source()`.
#[derive(Debug, Error)]
pub enum PoolDataError {
    #[error("fetch pool data")]
    Fetch(#[from] CardanoscanError),

    #[error("decode pool data")]
    Decode(#[from] NormalizeError),

    #[error("inject site data")]
    Site(#[from] SiteError),
}

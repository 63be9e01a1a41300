pub mod lovelace;
pub mod snapshot;

pub use lovelace::Lovelace;
pub use snapshot::PoolSnapshot;

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PoolStatus
// ---------------------------------------------------------------------------

/// Coarse pool status as shown by the site's status gauge (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PoolStatus {
    Active,
    Inactive,
}

impl PoolStatus {
    pub fn from_api_flag(active: bool) -> Self {
        if active {
            PoolStatus::Active
        } else {
            PoolStatus::Inactive
        }
    }

    pub fn as_gauge(&self) -> u8 {
        match self {
            PoolStatus::Active => 100,
            PoolStatus::Inactive => 0,
        }
    }
}

impl From<PoolStatus> for u8 {
    fn from(status: PoolStatus) -> Self {
        status.as_gauge()
    }
}

impl TryFrom<u8> for PoolStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            100 => Ok(PoolStatus::Active),
            0 => Ok(PoolStatus::Inactive),
            other => Err(format!("invalid pool status {other}, expected 0 or 100")),
        }
    }
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolStatus::Active => write!(f, "active"),
            PoolStatus::Inactive => write!(f, "inactive"),
        }
    }
}

// ---------------------------------------------------------------------------
// PledgeMet
// ---------------------------------------------------------------------------

/// Whether the operator's active pledge covers the declared pledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PledgeMet {
    #[serde(rename = "✅")]
    Met,
    #[serde(rename = "❌")]
    NotMet,
}

impl PledgeMet {
    /// Compare raw lovelace amounts; an active pledge equal to the declared one counts as met.
    pub fn compare(active: Lovelace, declared: Lovelace) -> Self {
        if active >= declared {
            PledgeMet::Met
        } else {
            PledgeMet::NotMet
        }
    }

    pub fn is_met(&self) -> bool {
        matches!(self, PledgeMet::Met)
    }
}

impl fmt::Display for PledgeMet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PledgeMet::Met => write!(f, "✅"),
            PledgeMet::NotMet => write!(f, "❌"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_gauge_value() {
        assert_eq!(serde_json::to_string(&PoolStatus::Active).unwrap(), "100");
        assert_eq!(serde_json::to_string(&PoolStatus::Inactive).unwrap(), "0");
    }

    #[test]
    fn test_status_rejects_other_gauge_values() {
        assert!(serde_json::from_str::<PoolStatus>("50").is_err());
        assert_eq!(
            serde_json::from_str::<PoolStatus>("100").unwrap(),
            PoolStatus::Active
        );
    }

    #[test]
    fn test_pledge_met_boundaries() {
        assert_eq!(
            PledgeMet::compare(Lovelace(200_000), Lovelace(150_000)),
            PledgeMet::Met
        );
        assert_eq!(
            PledgeMet::compare(Lovelace(150_000), Lovelace(150_000)),
            PledgeMet::Met
        );
        assert_eq!(
            PledgeMet::compare(Lovelace(100_000), Lovelace(150_000)),
            PledgeMet::NotMet
        );
    }

    #[test]
    fn test_pledge_met_serializes_as_marker() {
        assert_eq!(serde_json::to_string(&PledgeMet::Met).unwrap(), "\"✅\"");
        assert_eq!(serde_json::to_string(&PledgeMet::NotMet).unwrap(), "\"❌\"");
    }
}

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An on-chain ADA amount in lovelace. Converting to ADA is only done for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lovelace(pub u64);

impl Lovelace {
    pub const LOVELACE_PER_ADA: u64 = 1_000_000;

    pub fn to_ada(self) -> Decimal {
        let Lovelace(amount) = self;
        Decimal::from(amount) / Decimal::from(Self::LOVELACE_PER_ADA)
    }

    /// ADA rendered with exactly two decimals, e.g. `1234.57`.
    pub fn to_ada_display(self) -> String {
        let ada = self
            .to_ada()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{ada:.2}")
    }
}

impl FromStr for Lovelace {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Lovelace)
    }
}

impl fmt::Display for Lovelace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Lovelace(amount) = self;
        write!(f, "{amount}")
    }
}

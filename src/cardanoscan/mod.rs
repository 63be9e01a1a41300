pub mod client;
pub mod types;

pub use client::{CardanoscanClient, CardanoscanError};
pub use types::{ApiPoolDetails, ApiPoolStats};

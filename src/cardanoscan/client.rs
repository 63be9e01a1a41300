use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::AppConfig;

/// Header Cardanoscan reads the API key from.
const API_KEY_HEADER: &str = "apiKey";

const STATS_PATH: &str = "/stats";
const DETAILS_PATH: &str = "";

#[derive(Debug, Error)]
pub enum CardanoscanError {
    #[error("HTTP request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}, expected 200")]
    Status { url: String, status: StatusCode },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct CardanoscanClient {
    http: Client,
    base_url: String,
    pool_id: String,
    api_key: String,
}

impl CardanoscanClient {
    pub fn new(http: Client, config: &AppConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            pool_id: config.pool_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Raw body of `GET {base}/stats?poolId={id}`.
    pub async fn fetch_pool_stats(&self) -> Result<Vec<u8>, CardanoscanError> {
        self.fetch_raw(STATS_PATH).await
    }

    /// Raw body of `GET {base}?poolId={id}`.
    pub async fn fetch_pool_details(&self) -> Result<Vec<u8>, CardanoscanError> {
        self.fetch_raw(DETAILS_PATH).await
    }

    /// GET `{base}{suffix}?poolId={id}` with the API key header. Anything but a
    /// 200 is an error.
    pub async fn fetch_raw(&self, suffix: &str) -> Result<Vec<u8>, CardanoscanError> {
        let url = format!("{}{}", self.base_url, suffix);

        let resp = self
            .http
            .get(&url)
            .query(&[("poolId", self.pool_id.as_str())])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|source| CardanoscanError::Request {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(CardanoscanError::Status { url, status });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|source| CardanoscanError::Body {
                url: url.clone(),
                source,
            })?;

        tracing::debug!(url = %url, bytes = body.len(), "Cardanoscan response received");

        Ok(body.to_vec())
    }
}

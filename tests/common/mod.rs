use std::fs;
use std::path::Path;

use mockito::{Matcher, Mock, ServerGuard};
use tempfile::TempDir;

use poolsite::config::AppConfig;
use poolsite::site::PLACEHOLDER;

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";
#[allow(dead_code)]
pub const TEST_POOL_ID: &str = "pool_test_001";

#[allow(dead_code)]
pub const HTML_PREFIX: &str = concat!(
    r#"<!doctype html><html><body><div id="root"></div>"#,
    r#"<script id="pool-data" type="application/json">"#,
);
#[allow(dead_code)]
pub const HTML_SUFFIX: &str = "</script></body></html>";

#[allow(dead_code)]
pub const STATS_BODY: &str = r#"{
    "poolId": "pool_test_001",
    "saturationLevel": "42.17",
    "liveStake": "12345678900000",
    "activePledge": "200000",
    "currentEpochBlocks": 3,
    "lifetimeBlocks": 1204,
    "delegators": 311
}"#;

#[allow(dead_code)]
pub const DETAILS_BODY: &str = r#"{
    "poolId": "pool_test_001",
    "status": true,
    "declaredPledge": "150000",
    "margin": "1",
    "ticker": "CASH",
    "name": "Cash Pool"
}"#;

/// A dist directory holding an `index.html` built around the placeholder.
#[allow(dead_code)]
pub fn dist_with_template() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("index.html"),
        format!("{HTML_PREFIX}{PLACEHOLDER}{HTML_SUFFIX}"),
    )
    .expect("Failed to write template");
    dir
}

#[allow(dead_code)]
pub fn dist_with_html(html: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("index.html"), html).expect("Failed to write template");
    dir
}

#[allow(dead_code)]
pub fn test_config(base_url: &str, dist_dir: &Path) -> AppConfig {
    let base_url = base_url.to_string();
    let dist_dir = dist_dir.to_string_lossy().into_owned();
    AppConfig::from_lookup(move |key| match key {
        "API_KEY" => Some(TEST_API_KEY.into()),
        "CARDANOSCAN_BASE_URL" => Some(base_url.clone()),
        "POOL_ID" => Some(TEST_POOL_ID.into()),
        "SITE_DIST_DIR" => Some(dist_dir.clone()),
        _ => None,
    })
    .expect("Test config should be valid")
}

/// Mock `GET {path}?poolId=...` answering with `status` and `body`.
#[allow(dead_code)]
pub async fn mock_endpoint(
    server: &mut ServerGuard,
    path: &str,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock("GET", path)
        .match_query(Matcher::UrlEncoded("poolId".into(), TEST_POOL_ID.into()))
        .match_header("apiKey", TEST_API_KEY)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Cut the payload out of an injected `index.html`.
#[allow(dead_code)]
pub fn embedded_payload(html: &str) -> &str {
    html.strip_prefix(HTML_PREFIX)
        .and_then(|rest| rest.strip_suffix(HTML_SUFFIX))
        .expect("Injected HTML should keep the template around the payload")
}

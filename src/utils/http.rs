use std::time::Duration;

use reqwest::Client;

const CONNECT_TIMEOUT_SECONDS: u64 = 10;

/// Shared outbound client. Per-call timeouts are applied on each request.
pub fn build_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECONDS))
        .build()
}

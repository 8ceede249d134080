use std::time::Duration;

/// Connect phase never waits longer than this, even with a larger total timeout.
const MAX_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Build the outbound HTTP client with a total per-request timeout.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    let connect_timeout = timeout.min(Duration::from_secs(MAX_CONNECT_TIMEOUT_SECS));

    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .tcp_nodelay(true)
        .user_agent(concat!("mailgate/", env!("CARGO_PKG_VERSION")))
        .build()
}

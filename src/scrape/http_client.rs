//! HTTP client creation and configuration utilities

use reqwest::blocking::Client;
use std::time::Duration;

/// Creates the blocking HTTP client used for all page requests.
///
/// Every fetch blocks until it completes or times out; there is no retry
/// logic anywhere above this client, so the timeout is the only bound on a
/// hung connection.
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
pub fn create_http_client(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("nba-games/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_http_client() {
        assert!(create_http_client(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS).is_ok());
    }
}

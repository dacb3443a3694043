// HTTP client utilities
use crate::domain::error::TranslatorError;
use reqwest::Client;
use std::time::Duration;

/// Create the HTTP client used for backend calls
///
/// The timeout bounds the whole round trip, generation included.
pub fn create_client(timeout_secs: u64) -> Result<Client, TranslatorError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("code-translator/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

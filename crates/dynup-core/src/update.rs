//! Update submission to the provider endpoint
//!
//! Speaks the dyndns-style update protocol: one POST with the record
//! name, the new address, and the account credentials as query
//! parameters. No request body is sent; everything travels in the URL,
//! credentials included. That is the protocol, not a recommendation.

use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

/// Total time allowed for one update round-trip
const UPDATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Submit `ip` for the configured hostname.
///
/// Any status above 204 is a rejection and carries the status code and
/// the verbatim response body back to the caller; statuses up to 204
/// are success and the body is ignored. A single attempt is final;
/// there is no retry.
pub async fn push_ip(client: &reqwest::Client, config: &Config, ip: &str) -> Result<()> {
    let request = client
        .post(&config.update_ip_url)
        .query(&[
            ("hostname", config.hostname.as_str()),
            ("myip", ip),
            ("user", config.username.as_str()),
            ("pass", config.password.as_str()),
        ])
        .timeout(UPDATE_TIMEOUT)
        .build()
        .map_err(Error::RequestBuild)?;

    // The full request URL carries the password, so it is never logged.
    debug!(hostname = %config.hostname, ip, "submitting update");

    let response = client.execute(request).await.map_err(Error::Network)?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(Error::BodyRead)?;

    if status > 204 {
        return Err(Error::UpdateFailed { status, body });
    }

    debug!(status, "update accepted");
    Ok(())
}

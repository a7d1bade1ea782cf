//! Public IP discovery via an HTTP lookup service
//!
//! One GET against the configured service, which is expected to answer
//! with the caller's IPv4 address as the entire response body (services
//! like api.ipify.org or icanhazip.com). Only IPv4 is handled.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

// Shape check only: exactly four dot-separated 1-3 digit groups.
// Octet ranges are not enforced, so "999.999.999.999" passes; the
// lookup service is trusted to return a routable address.
static IPV4_SHAPE: OnceLock<Regex> = OnceLock::new();

fn ipv4_shape() -> &'static Regex {
    IPV4_SHAPE.get_or_init(|| {
        Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("hard-coded pattern compiles")
    })
}

/// Fetch the caller's current public IPv4 address.
///
/// The request carries no query parameters, no auth headers, and no
/// client-side timeout; an unresponsive lookup service blocks the run.
/// The HTTP status is not inspected; whatever the body says is
/// validated as an address and returned trimmed.
pub async fn fetch_ip(client: &reqwest::Client, config: &Config) -> Result<String> {
    let response = client
        .get(&config.check_ip_url)
        .send()
        .await
        .map_err(Error::Network)?;

    let body = response.text().await.map_err(Error::BodyRead)?;
    let ip = validate(&body)?;

    debug!(ip, "public ip resolved");
    Ok(ip.to_string())
}

/// Trim the lookup body and check it is shaped like an IPv4 address.
fn validate(body: &str) -> Result<&str> {
    let ip = body.trim();
    if ip.is_empty() {
        return Err(Error::EmptyIp);
    }
    if !ipv4_shape().is_match(ip) {
        return Err(Error::InvalidIpFormat(ip.to_string()));
    }
    Ok(ip)
}

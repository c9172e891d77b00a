//! Client.

use std::time::Duration;

use http::{header, HeaderMap};
use reqwest::ClientBuilder;
use reviewload_config::Config;

/// Get the HTTP client builder.
///
/// Built once per service: reqwest keeps the connection pool inside the client.
pub fn get_client_builder(config: &Config) -> ClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.http.connect_timeout))
        .timeout(Duration::from_millis(config.api.http.request_timeout))
        .user_agent(format!("reviewload/{}", config.version))
        .default_headers(headers)
}

/// Build a target service URL.
pub fn build_url<T: AsRef<str>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.http.host.trim_end_matches('/'),
        path.as_ref()
    )
}

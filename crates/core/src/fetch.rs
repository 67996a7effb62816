//! Document fetching from URLs and local files.
//!
//! This module provides functions for retrieving HTML content from
//! HTTP/HTTPS URLs and local files. Fetching is the only I/O the crate
//! performs; a fetch failure of either document is fatal for the call,
//! with no retries.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

use crate::{Result, SimilisError};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Similis/1.0)".to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// This function performs an HTTP GET request and returns the response body
/// as text. It follows redirects, respects the configured timeout, and uses
/// a browser-like User-Agent for better compatibility.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| SimilisError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(SimilisError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(SimilisError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                SimilisError::Timeout { timeout: config.timeout }
            } else {
                SimilisError::HttpError(e)
            }
        })?;

    let content = response.text().await?;

    Ok(content)
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(SimilisError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(SimilisError::from)
    }
}

/// Fetches HTML content from a URL or local file path.
///
/// Sources starting with `http://` or `https://` are fetched over HTTP;
/// anything else is treated as a local file path.
#[cfg(feature = "fetch")]
pub async fn fetch_source(source: &str, config: &FetchConfig) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source, config).await
    } else {
        fetch_file(source)
    }
}

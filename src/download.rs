use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{GrabError, Result};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

/// Build an HTTP client. `timeout` bounds the whole request when set;
/// media and download calls pass `None` and may run as long as the peer keeps sending.
pub fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().default_headers(get_default_headers());
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout).connect_timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Get default headers for requests
fn get_default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}

/// Execute a GET request and reject non-2xx answers
async fn execute_request(client: &reqwest::Client, url: &str) -> Result<reqwest::Response> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            GrabError::RequestTimeout(url.to_string())
        } else {
            GrabError::NetworkError(e)
        }
    })?;

    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(GrabError::HttpError {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Download and parse JSON response from URL
pub async fn download_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    let response = execute_request(client, url).await?;
    let body = response.bytes().await.map_err(|e| {
        if e.is_timeout() {
            GrabError::RequestTimeout(url.to_string())
        } else {
            GrabError::NetworkError(e)
        }
    })?;
    Ok(serde_json::from_slice(&body)?)
}

/// Get HTTP response from URL, body left unread for streaming
pub async fn get_response(client: &reqwest::Client, url: &str) -> Result<reqwest::Response> {
    execute_request(client, url).await
}

//! Client for the audio listing endpoint and the media URLs it points at.

use crate::config::PlayerConfig;
#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
use serde_json::Value;
use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Every way the file list can fail to arrive. All of them leave the selector empty.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListingError {
    #[error("listing request failed: {0}")]
    Network(String),

    #[error("listing endpoint answered with status {0}")]
    Status(u16),

    #[error("listing payload is not an array of file names: {0}")]
    Malformed(String),
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a listing body. Only a JSON array of strings is accepted.
pub fn parse_file_list(body: &str) -> Result<Vec<String>, ListingError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ListingError::Malformed(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ListingError::Malformed(format!(
                "expected an array, got {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::String(name) => Ok(name),
            other => Err(ListingError::Malformed(format!(
                "entry {idx} is {}, expected a string",
                json_kind(&other)
            ))),
        })
        .collect()
}

/// Media URL for a listed file: the fixed prefix followed by the encoded name.
pub fn media_url(prefix: &str, file_name: &str) -> String {
    format!("{prefix}{}", urlencoding::encode(file_name))
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_audio_files(config: &PlayerConfig) -> Result<Vec<String>, ListingError> {
    let response = gloo_net::http::Request::get(&config.listing_endpoint)
        .send()
        .await
        .map_err(|e| ListingError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ListingError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ListingError::Network(e.to_string()))?;
    parse_file_list(&body)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_audio_files(config: &PlayerConfig) -> Result<Vec<String>, ListingError> {
    let response = HTTP_CLIENT
        .get(config.listing_url())
        .send()
        .await
        .map_err(|e| ListingError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ListingError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ListingError::Network(e.to_string()))?;
    parse_file_list(&body)
}

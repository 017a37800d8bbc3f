//! Passthrough fetch of the remote pattern dataset.
//!
//! Records stay opaque: the upstream guarantees no schema, so none is
//! imposed. Every call re-fetches from the origin.

use serde_json::Value;
use thiserror::Error;
use tokio::time::{timeout, Duration};

#[derive(Debug, Error)]
pub enum PatternsError {
    #[error("patterns request timed out")]
    Timeout,
    #[error("failed to reach patterns source: {0}")]
    Network(String),
    #[error("patterns source returned {status}")]
    Status { status: reqwest::StatusCode },
    #[error("failed to decode patterns payload: {0}")]
    Decode(String),
}

pub async fn fetch_patterns(
    http: &reqwest::Client,
    url: &str,
    timeout_ms: u64,
) -> Result<Vec<Value>, PatternsError> {
    let response = timeout(Duration::from_millis(timeout_ms), http.get(url).send())
        .await
        .map_err(|_| PatternsError::Timeout)?
        .map_err(|e| PatternsError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(PatternsError::Status {
            status: response.status(),
        });
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| PatternsError::Decode(e.to_string()))?;

    Ok(unwrap_records(body))
}

/// A missing (or non-array) `data` key is an empty dataset, not an error.
fn unwrap_records(mut body: Value) -> Vec<Value> {
    match body.get_mut("data").map(Value::take) {
        Some(Value::Array(records)) => records,
        _ => Vec::new(),
    }
}

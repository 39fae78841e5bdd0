// src/services/slots.rs
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("slot data request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("slot data is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of the current slot occupancy document.
#[async_trait]
pub trait SlotSource: Send + Sync {
    async fn fetch(&self) -> Result<Value, SnapshotError>;
}

/// Reads the slot document from the realtime database's REST endpoint.
pub struct FirebaseSlots {
    client: Client,
    url: String,
}

impl FirebaseSlots {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl SlotSource for FirebaseSlots {
    async fn fetch(&self) -> Result<Value, SnapshotError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Any JSON document is passed through, including error documents on non-2xx.
        let value: Value = serde_json::from_str(&body)?;
        tracing::debug!(%status, bytes = body.len(), "fetched slot snapshot");
        Ok(value)
    }
}

/// Result of the best-effort snapshot read for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotSnapshot {
    Live(Value),
    Unavailable { reason: String },
}

impl SlotSnapshot {
    pub fn from_fetch(result: Result<Value, SnapshotError>) -> Self {
        match result {
            Ok(value) => SlotSnapshot::Live(value),
            Err(e) => SlotSnapshot::Unavailable { reason: e.to_string() },
        }
    }

    /// The value embedded in the prompt: the live document, or an empty mapping.
    pub fn into_value(self) -> Value {
        match self {
            SlotSnapshot::Live(value) => value,
            SlotSnapshot::Unavailable { .. } => Value::Object(Map::new()),
        }
    }
}

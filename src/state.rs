// src/state.rs
use std::sync::Arc;

use reqwest::Client;

use crate::config::{Config, GENERATION_API_BASE, MODEL, SLOTS_URL};
use crate::services::{
    generator::{GeminiGenerator, TextGenerator},
    relay::ChatRelay,
    slots::{FirebaseSlots, SlotSource},
};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: ChatRelay,
}

impl AppState {
    pub fn new(slots: Arc<dyn SlotSource>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            relay: ChatRelay::new(slots, generator),
        }
    }

    /// Wire the live providers. Both share one HTTP client and its timeout.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.http_timeout).build()?;

        let slots = FirebaseSlots::new(client.clone(), SLOTS_URL);
        let generator = GeminiGenerator::new(client, config.api_key.clone(), GENERATION_API_BASE, MODEL);

        Ok(Self::new(Arc::new(slots), Arc::new(generator)))
    }
}

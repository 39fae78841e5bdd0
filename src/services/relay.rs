// src/services/relay.rs
use std::sync::Arc;

use super::{
    generator::{GenerationError, TextGenerator},
    prompt::build_prompt,
    slots::{SlotSnapshot, SlotSource},
};

/// Stateless chat relay: one snapshot read, one generation call per message.
#[derive(Clone)]
pub struct ChatRelay {
    slots: Arc<dyn SlotSource>,
    generator: Arc<dyn TextGenerator>,
}

impl ChatRelay {
    pub fn new(slots: Arc<dyn SlotSource>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { slots, generator }
    }

    pub async fn handle_chat(&self, message: &str) -> Result<String, GenerationError> {
        let snapshot = SlotSnapshot::from_fetch(self.slots.fetch().await);
        if let SlotSnapshot::Unavailable { reason } = &snapshot {
            tracing::warn!(%reason, "could not fetch live slot data, continuing with an empty snapshot");
        }
        let prompt = build_prompt(&snapshot.into_value(), message);

        self.generator.generate(&prompt).await.inspect_err(|e| {
            tracing::error!(error = %e, "text generation failed");
        })
    }
}

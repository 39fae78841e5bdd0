#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Response};
use serde_json::Value;

use parking_chat_relay::routes::create_router;
use parking_chat_relay::services::{
    generator::{GenerationError, TextGenerator},
    slots::{SlotSource, SnapshotError},
};
use parking_chat_relay::state::AppState;

pub enum SlotsBehaviour {
    Document(Value),
    NotJson,
    Unreachable,
}

pub struct MockSlots {
    behaviour: SlotsBehaviour,
    calls: AtomicUsize,
}

impl MockSlots {
    pub fn new(behaviour: SlotsBehaviour) -> Arc<Self> {
        Arc::new(Self { behaviour, calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlotSource for MockSlots {
    async fn fetch(&self) -> Result<Value, SnapshotError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behaviour {
            SlotsBehaviour::Document(value) => Ok(value.clone()),
            SlotsBehaviour::NotJson => {
                let err = serde_json::from_str::<Value>("<html>502 Bad Gateway</html>").unwrap_err();
                Err(SnapshotError::Decode(err))
            }
            SlotsBehaviour::Unreachable => {
                // A request that can never be built stands in for a transport failure.
                let err = reqwest::Client::new().get("not a url").build().unwrap_err();
                Err(SnapshotError::Transport(err))
            }
        }
    }
}

pub enum GeneratorBehaviour {
    Reply(String),
    EchoPrompt,
    Fail { status: u16, message: String },
}

pub struct MockGenerator {
    behaviour: GeneratorBehaviour,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new(behaviour: GeneratorBehaviour) -> Arc<Self> {
        Arc::new(Self { behaviour, prompts: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.behaviour {
            GeneratorBehaviour::Reply(text) => Ok(text.clone()),
            GeneratorBehaviour::EchoPrompt => Ok(prompt.to_string()),
            GeneratorBehaviour::Fail { status, message } => Err(GenerationError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

pub fn app(slots: Arc<MockSlots>, generator: Arc<MockGenerator>) -> Router {
    let state = Arc::new(AppState::new(slots, generator));
    create_router().with_state(state)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

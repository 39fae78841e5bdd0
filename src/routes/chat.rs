use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::{Map, Value};

use crate::{
    error::AppError,
    message::{Banner, ChatRequest, ChatResponse},
    state::SharedState,
};

pub const BANNER: &str = "🚗 Smart Parking Chatbot API is running!";

pub async fn root_handler() -> Json<Banner> {
    Json(Banner {
        message: BANNER.to_string(),
    })
}

pub async fn preflight_handler() -> Json<Value> {
    Json(Value::Object(Map::new()))
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // Reject bad bodies before either provider is contacted.
    let Json(payload) = payload?;

    let response = state.relay.handle_chat(&payload.message).await?;

    Ok(Json(ChatResponse { response }))
}

// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    extract::{DefaultBodyLimit, Request},
    http::{Method, header::ACCESS_CONTROL_REQUEST_METHOD},
    middleware::{self, Next},
    response::Response,
    routing::{get, options, post},
};
use chat::{chat_handler, preflight_handler, root_handler};
use tower::{Layer, ServiceExt};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/chat/", options(preflight_handler))
        // Messages are forwarded whole; no size cap on the body.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors_middleware))
}

/// Permissive CORS for regular requests and real preflights. A bare `OPTIONS`
/// without `Access-Control-Request-Method` is routed like any other request.
async fn cors_middleware(req: Request, next: Next) -> Response {
    let bare_options =
        req.method() == Method::OPTIONS && !req.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD);
    if bare_options {
        return next.run(req).await;
    }

    // Wide open for now; narrow the origin list once the frontend host is fixed.
    match CorsLayer::very_permissive().layer(next).oneshot(req).await {
        Ok(response) => response,
        Err(err) => match err {},
    }
}

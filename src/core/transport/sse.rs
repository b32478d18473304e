//! SSE transport implementation.
//!
//! Clients `GET` the stream path to open a session. The first event on the
//! stream is `endpoint`, whose data is the message path with the session id
//! appended. Clients then `POST` JSON-RPC messages there; each is accepted
//! with `202` and its response is pushed on that session's stream as a
//! `message` event. One worker per session handles the messages in the
//! order they were posted.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::{
        IntoResponse, Response,
        sse::{KeepAlive, KeepAliveStream, Sse},
    },
    routing::{get, post},
};
use bytes::Bytes;
use http::StatusCode;
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

use super::rpc::{parse_message, process_request};
use super::session::{SessionInbox, SessionRegistry, SessionStream};
use super::{TransportError, TransportResult, config::SseConfig};
use crate::core::McpServer;

/// SSE transport handler.
pub struct SseTransport {
    config: SseConfig,
}

/// State shared by the SSE handlers.
#[derive(Clone)]
struct SseState {
    server: McpServer,
    sessions: SessionRegistry,
    message_path: String,
    keep_alive: Duration,
}

/// Query string of a posted message.
#[derive(Debug, Deserialize)]
struct MessageQuery {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

impl SseTransport {
    /// Create a new SSE transport with the given config.
    pub fn new(config: SseConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the SSE transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_app(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (MCP over SSE)", addr);
        info!("  → Stream:   GET {}", self.config.sse_path);
        info!("  → Messages: POST {}?sessionId=<id>", self.config.message_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the router for the SSE transport.
pub fn build_app(server: McpServer, config: &SseConfig) -> Router {
    build_app_with_sessions(server, config, SessionRegistry::new())
}

/// Build the router over an existing session registry.
pub fn build_app_with_sessions(
    server: McpServer,
    config: &SseConfig,
    sessions: SessionRegistry,
) -> Router {
    let state = SseState {
        server,
        sessions,
        message_path: config.message_path.clone(),
        keep_alive: Duration::from_secs(config.keep_alive_secs.max(1)),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(&config.sse_path, get(open_stream))
        .route(&config.message_path, post(post_message))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Open a session and stream its events.
async fn open_stream(State(state): State<SseState>) -> Sse<KeepAliveStream<SessionStream>> {
    let (id, stream, inbox) = state.sessions.open(&state.message_path).await;
    tokio::spawn(run_session(state.server, state.sessions, id, inbox));
    Sse::new(stream).keep_alive(KeepAlive::new().interval(state.keep_alive))
}

/// Answer a session's requests one at a time until the session is removed.
#[instrument(skip_all, fields(session = %id))]
async fn run_session(
    server: McpServer,
    sessions: SessionRegistry,
    id: String,
    mut inbox: SessionInbox,
) {
    while let Some(request) = inbox.recv().await {
        let Some(response) = process_request(&server, request).await else {
            continue;
        };
        if let Err(e) = sessions.send(&id, &response).await {
            warn!("Failed to deliver response: {}", e);
            break;
        }
    }
    debug!("Session worker stopped");
}

/// Accept one JSON-RPC message for a session.
#[instrument(skip_all, fields(session))]
async fn post_message(
    State(state): State<SseState>,
    Query(query): Query<MessageQuery>,
    body: Bytes,
) -> Response {
    let Some(session_id) = query.session_id else {
        return (StatusCode::BAD_REQUEST, "Missing sessionId").into_response();
    };
    tracing::Span::current().record("session", session_id.as_str());

    if !state.sessions.contains(&session_id).await {
        warn!("Message for unknown session");
        return (StatusCode::NOT_FOUND, "Session not found").into_response();
    }

    let request = match parse_message(&body) {
        Ok(request) => request,
        Err(response) => return (StatusCode::BAD_REQUEST, Json(response)).into_response(),
    };

    info!("Received JSON-RPC request: {}", request.method);

    match state.sessions.submit(&session_id, request).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => {
            warn!("Message for closed session: {}", e);
            (StatusCode::NOT_FOUND, "Session not found").into_response()
        }
    }
}

/// Health check endpoint.
async fn health_check(State(state): State<SseState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "sessions": state.sessions.len().await,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

//! Open SSE sessions, keyed by an unguessable id.
//!
//! Each `GET` on the stream path registers a session and hands back a
//! stream that removes the session again when the client goes away.
//! Messages posted with that id are queued on the session's inbox and
//! answered on the matching stream only, in the order they were posted.

use std::collections::HashMap;
use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::response::sse::Event;
use futures::Stream;
use tokio::sync::{RwLock, mpsc};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, info};

use super::rpc::{JsonRpcRequest, JsonRpcResponse};
use super::{TransportError, TransportResult};

/// Events or requests buffered per session before senders wait.
const SESSION_BUFFER: usize = 32;

/// Requests posted to a session, in posting order.
pub type SessionInbox = mpsc::Receiver<JsonRpcRequest>;

#[derive(Clone)]
struct Session {
    events: mpsc::Sender<Event>,
    inbox: mpsc::Sender<JsonRpcRequest>,
}

/// Registry of live sessions shared by the SSE handlers.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new session.
    ///
    /// The returned stream yields the `endpoint` event first, pointing the
    /// client at `message_path` with its session id. The inbox receives
    /// every request submitted for the session and closes once the session
    /// is removed.
    pub async fn open(&self, message_path: &str) -> (String, SessionStream, SessionInbox) {
        let id = uuid::Uuid::new_v4().to_string();
        let (tx, rx) = mpsc::channel(SESSION_BUFFER);
        let (inbox_tx, inbox_rx) = mpsc::channel(SESSION_BUFFER);

        let endpoint = Event::default()
            .event("endpoint")
            .data(format!("{}?sessionId={}", message_path, id));
        // Fresh channel with spare capacity, so this cannot fail.
        let _ = tx.try_send(endpoint);

        let session = Session {
            events: tx,
            inbox: inbox_tx,
        };
        self.sessions.write().await.insert(id.clone(), session);
        info!(session = %id, "SSE session opened");

        let stream = SessionStream {
            inner: ReceiverStream::new(rx),
            guard: SessionGuard {
                id: id.clone(),
                registry: self.clone(),
            },
        };
        (id, stream, inbox_rx)
    }

    /// Whether a session with this id is open.
    pub async fn contains(&self, id: &str) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    /// Queue a request on a session's inbox.
    pub async fn submit(&self, id: &str, request: JsonRpcRequest) -> TransportResult<()> {
        let session = self.session(id).await?;
        if session.inbox.send(request).await.is_err() {
            self.remove(id).await;
            return Err(TransportError::SessionClosed(id.to_string()));
        }
        Ok(())
    }

    /// Push a JSON-RPC response to a session's stream as a `message` event.
    pub async fn send(&self, id: &str, response: &JsonRpcResponse) -> TransportResult<()> {
        let session = self.session(id).await?;

        let event = Event::default()
            .event("message")
            .data(serde_json::to_string(response)?);

        if session.events.send(event).await.is_err() {
            self.remove(id).await;
            return Err(TransportError::SessionClosed(id.to_string()));
        }
        Ok(())
    }

    async fn session(&self, id: &str) -> TransportResult<Session> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| TransportError::SessionNotFound(id.to_string()))
    }

    /// Forget a session. Returns whether it was open.
    pub async fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            info!(session = %id, "SSE session closed");
        }
        removed
    }

    /// Number of open sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether no session is open.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// Removes its session from the registry when dropped.
struct SessionGuard {
    id: String,
    registry: SessionRegistry,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let id = std::mem::take(&mut self.id);
        let registry = self.registry.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    registry.remove(&id).await;
                });
            }
            Err(_) => debug!(session = %id, "No runtime to close session"),
        }
    }
}

/// Event stream of one session.
pub struct SessionStream {
    inner: ReceiverStream<Event>,
    guard: SessionGuard,
}

impl SessionStream {
    /// Id of the session this stream belongs to.
    pub fn session_id(&self) -> &str {
        &self.guard.id
    }
}

impl Stream for SessionStream {
    type Item = Result<Event, Infallible>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx).map(|event| event.map(Ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use serde_json::json;

    #[tokio::test]
    async fn test_open_registers_unique_sessions() {
        let registry = SessionRegistry::new();
        let (a, stream_a, _) = registry.open("/messages").await;
        let (b, _stream_b, _) = registry.open("/messages").await;

        assert_ne!(a, b);
        assert_eq!(stream_a.session_id(), a);
        assert_eq!(registry.len().await, 2);
        assert!(registry.contains(&a).await);
    }

    #[tokio::test]
    async fn test_send_reaches_only_its_session() {
        let registry = SessionRegistry::new();
        let (a, mut stream_a, _) = registry.open("/messages").await;
        let (_b, mut stream_b, _) = registry.open("/messages").await;

        // Endpoint events first.
        assert!(stream_a.next().await.is_some());
        assert!(stream_b.next().await.is_some());

        registry
            .send(&a, &JsonRpcResponse::success(Some(json!(1)), json!({})))
            .await
            .unwrap();

        assert!(stream_a.next().await.is_some());
        let nothing =
            tokio::time::timeout(std::time::Duration::from_millis(50), stream_b.next()).await;
        assert!(nothing.is_err());
    }

    #[tokio::test]
    async fn test_send_to_unknown_session() {
        let registry = SessionRegistry::new();
        let err = registry
            .send("missing", &JsonRpcResponse::success(None, json!(null)))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn test_dropping_stream_closes_session() {
        let registry = SessionRegistry::new();
        let (id, stream, mut inbox) = registry.open("/messages").await;
        drop(stream);

        for _ in 0..50 {
            if !registry.contains(&id).await {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(registry.is_empty().await);
        assert!(!registry.remove(&id).await);
        // The inbox closes with the session.
        assert!(inbox.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_submit_keeps_posting_order() {
        let registry = SessionRegistry::new();
        let (id, _stream, mut inbox) = registry.open("/messages").await;

        for n in 1..=3 {
            let request: JsonRpcRequest =
                serde_json::from_value(json!({ "jsonrpc": "2.0", "id": n, "method": "ping" }))
                    .unwrap();
            registry.submit(&id, request).await.unwrap();
        }

        for n in 1..=3 {
            assert_eq!(inbox.recv().await.unwrap().id, Some(json!(n)));
        }
    }

    #[tokio::test]
    async fn test_submit_to_unknown_session() {
        let registry = SessionRegistry::new();
        let request: JsonRpcRequest =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" })).unwrap();
        let err = registry.submit("missing", request).await.unwrap_err();
        assert!(matches!(err, TransportError::SessionNotFound(_)));
    }
}

//! Per-subscriber session loop.
//!
//! A session is owned by the hub from register to unregister. It forwards
//! broadcast frames to the socket and reads inbound frames only to detect
//! closure; payloads from the client are logged at debug and discarded.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};

use crate::domain::BroadcastHub;

/// Runs the session loop for one accepted WebSocket connection.
///
/// Exits when the client closes, the socket errors, a forward fails, or
/// the hub drops this subscriber after a failed delivery. Every exit path
/// unregisters the session (a no-op if the hub already swept it).
pub async fn run_connection(socket: WebSocket, hub: Arc<BroadcastHub>) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (id, mut frame_rx) = hub.register().await;

    loop {
        tokio::select! {
            // Incoming frame from the client: drain and discard.
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        tracing::debug!(subscriber = %id, payload = %text, "received from client");
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        tracing::error!(subscriber = %id, error = %e, "ws receive error");
                        break;
                    }
                    _ => {}
                }
            }
            // Broadcast frame from the hub.
            frame = frame_rx.recv() => {
                match frame {
                    Some(json) => {
                        if ws_tx.send(Message::text(json)).await.is_err() {
                            break;
                        }
                    }
                    // Hub dropped our sender after a failed delivery.
                    None => break,
                }
            }
        }
    }

    hub.unregister(id).await;
    tracing::debug!(subscriber = %id, "ws connection closed");
}

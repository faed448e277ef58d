//! WebSocket layer: upgrade handling and per-subscriber sessions.
//!
//! The endpoint at `/ws` accepts a persistent connection; the session
//! forwards broadcast frames and drains (but does not act on) inbound
//! frames.

pub mod connection;
pub mod handler;

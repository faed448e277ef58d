//! # tagsock-gateway
//!
//! WebSocket gateway that bridges a physical proximity-card reader to a set
//! of live subscribers. A dedicated thread polls the reader; every detected
//! tag identifier is resolved against a JSON mapping file and the resulting
//! category is broadcast to all connected WebSocket clients.
//!
//! ## Architecture
//!
//! ```text
//! Tag Reader (blocking thread)
//!     │
//!     ├── Poll Loop (reader/)
//!     ├── MappingStore (mapping.rs, reloaded per resolution)
//!     │
//!     │ runtime handle (fire-and-forget)
//!     ▼
//! BroadcastHub (domain/)
//!     │
//!     └── WS Sessions (ws/)  ◄── Clients (WebSocket)
//! ```
//!
//! The poll loop never touches the hub directly; it schedules each broadcast
//! onto the serving runtime through a [`tokio::runtime::Handle`], so all hub
//! mutations happen on the async side.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod mapping;
pub mod reader;
pub mod ws;

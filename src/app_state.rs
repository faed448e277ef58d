//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::BroadcastHub;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Hub owning the live subscriber set.
    pub hub: Arc<BroadcastHub>,
}

//! The blocking poll loop bridging the reader to the broadcast hub.
//!
//! State machine: `Closed -> Open -> {Polling <-> Processing} -> Closed`.
//! Transient poll errors keep the loop alive; open failure and device
//! failure drive it back to `Closed` while the serving runtime stays up.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::domain::{BroadcastHub, TagEvent, TagId};
use crate::mapping::MappingStore;
use crate::reader::TagReader;

/// Drives `reader` until a fatal error, resolving every detected tag and
/// scheduling the resulting broadcast onto the serving runtime.
///
/// Meant to run on its own thread: [`TagReader::poll`] blocks, and the loop
/// sleeps `idle_delay` between polls. The device handle is released on
/// every exit path. This function never panics and never touches the hub
/// except through `handle`.
pub fn run_poll_loop<R: TagReader>(
    mut reader: R,
    transport: &str,
    store: MappingStore,
    hub: Arc<BroadcastHub>,
    handle: Handle,
    idle_delay: Duration,
) {
    match reader.open(transport) {
        Ok(()) => {
            tracing::info!(transport, "tag reader opened");
            poll_cycle(&mut reader, &store, &hub, &handle, idle_delay);
        }
        Err(e) => {
            tracing::error!(error = %e, "could not open tag reader; broadcasts disabled");
        }
    }
    reader.close();
    tracing::info!("tag reader closed");
}

/// The `Polling <-> Processing` cycle. Returns only on a fatal error.
fn poll_cycle<R: TagReader>(
    reader: &mut R,
    store: &MappingStore,
    hub: &Arc<BroadcastHub>,
    handle: &Handle,
    idle_delay: Duration,
) {
    loop {
        match reader.poll() {
            Ok(Some(tag)) => process_tag(&tag, store, hub, handle),
            Ok(None) => {}
            Err(e) if e.is_fatal() => {
                tracing::error!(error = %e, "fatal reader error; stopping poll loop");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "transient reader error");
            }
        }
        std::thread::sleep(idle_delay);
    }
}

/// Resolves one detected tag and hands any match to the hub.
fn process_tag(tag: &TagId, store: &MappingStore, hub: &Arc<BroadcastHub>, handle: &Handle) {
    tracing::info!(uid = %tag, "tag detected");
    match store.resolve(tag) {
        Some(category) => {
            tracing::info!(uid = %tag, category = %category, "tag resolved");
            let event = TagEvent::Answer { category };
            let hub = Arc::clone(hub);
            handle.spawn(async move {
                let delivered = hub.broadcast_all(&event).await;
                tracing::debug!(delivered, "broadcast complete");
            });
        }
        None => {
            tracing::info!(uid = %tag, "tag not present in mapping");
        }
    }
}

//! Domain layer: tag identity, broadcast events, and the subscriber hub.

pub mod event;
pub mod hub;
pub mod tag_id;

pub use event::{Category, TagEvent};
pub use hub::{BroadcastHub, SubscriberId};
pub use tag_id::TagId;

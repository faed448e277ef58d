//! Broadcast event and category types.
//!
//! A [`TagEvent`] exists only for the duration of one broadcast; nothing is
//! persisted and events with no subscribers are silently dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Application-level label a tag identifier resolves to.
///
/// Opaque to the gateway; it passes straight from the mapping file to the
/// wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message broadcast to every live subscriber.
///
/// Serializes exactly as `{"type":"answer","category":"<string>"}`, the
/// frame shape subscribers expect.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TagEvent {
    /// A presented tag resolved to a category.
    Answer {
        /// The resolved category label.
        category: Category,
    },
}

impl TagEvent {
    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::Answer { .. } => "answer",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn answer_wire_shape() {
        let event = TagEvent::Answer {
            category: Category::from("fruit"),
        };
        let json = serde_json::to_string(&event).unwrap_or_default();
        assert_eq!(json, r#"{"type":"answer","category":"fruit"}"#);
    }

    #[test]
    fn event_type_accessor() {
        let event = TagEvent::Answer {
            category: Category::from("legume"),
        };
        assert_eq!(event.event_type_str(), "answer");
    }

    #[test]
    fn category_is_transparent() {
        let category: Category = serde_json::from_str(r#""fruit""#).unwrap_or(Category::from(""));
        assert_eq!(category.as_str(), "fruit");
    }
}

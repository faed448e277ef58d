//! Reader failure taxonomy.
//!
//! [`ReaderError`] classifies every failure the tag reader can surface into
//! transient (the poll loop logs and continues) and fatal (the poll loop
//! releases the device and exits, leaving subscriber service up).

/// Errors surfaced by a [`crate::reader::TagReader`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// The device could not be opened at all (not present, no permission).
    #[error("could not open reader on {transport}: {reason}")]
    Open {
        /// Transport string the open was attempted on (e.g. `usb`).
        transport: String,
        /// Driver-level reason.
        reason: String,
    },

    /// A single poll attempt failed (timeout surfaced as error, read glitch).
    #[error("transient reader error: {0}")]
    Transient(String),

    /// The device failed mid-session (unplugged, stream ended).
    #[error("reader device failure: {0}")]
    Device(String),
}

impl ReaderError {
    /// Returns `true` if this error must stop the poll loop.
    ///
    /// Transient errors never do; the loop logs them and keeps polling.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Device(_))
    }
}

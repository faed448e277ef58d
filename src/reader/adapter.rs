//! Hardware adapter boundary for proximity-card readers.

use crate::domain::TagId;
use crate::error::ReaderError;

/// A physical tag reader.
///
/// The driver behind this trait performs the actual anti-collision and
/// identifier extraction; the gateway only sees identifier bytes.
///
/// [`TagReader::poll`] is a blocking call with device-dependent latency
/// (milliseconds to seconds) and must only be driven from a dedicated
/// thread, never from the serving runtime.
pub trait TagReader: Send {
    /// Opens the device on the given transport.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Open`] when the device is absent or cannot
    /// be acquired; this is always fatal to the poll loop.
    fn open(&mut self, transport: &str) -> Result<(), ReaderError>;

    /// Blocks until a tag is presented, a timeout elapses, or the device
    /// errors.
    ///
    /// `Ok(None)` is a quiet timeout: no tag was presented.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::Transient`] for failures the loop should
    /// ride out and [`ReaderError::Device`] when the device is gone.
    fn poll(&mut self) -> Result<Option<TagId>, ReaderError>;

    /// Releases the device handle. Safe to call on a never-opened reader.
    fn close(&mut self);
}

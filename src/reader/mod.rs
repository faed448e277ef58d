//! Reader layer: the hardware adapter boundary and the polling loop.
//!
//! The [`TagReader`] trait is the seam to the physical device; the poll
//! loop drives it on a dedicated blocking thread.

pub mod adapter;
pub mod poll_loop;
pub mod serial;

pub use adapter::TagReader;
pub use poll_loop::run_poll_loop;
pub use serial::SerialReader;

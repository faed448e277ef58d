//! Serial-device tag reader.
//!
//! Reads newline-delimited hex identifiers from a character device; the
//! driver stack that performs anti-collision sits behind that device and
//! emits one UID line per tag presentation.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::domain::TagId;
use crate::error::ReaderError;

/// [`crate::reader::TagReader`] implementation over a serial character
/// device (e.g. `/dev/ttyACM0`).
#[derive(Debug, Default)]
pub struct SerialReader {
    device: Option<BufReader<File>>,
}

impl SerialReader {
    /// Creates a reader in the closed state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl crate::reader::TagReader for SerialReader {
    fn open(&mut self, transport: &str) -> Result<(), ReaderError> {
        let file = File::open(transport).map_err(|e| ReaderError::Open {
            transport: transport.to_string(),
            reason: e.to_string(),
        })?;
        self.device = Some(BufReader::new(file));
        Ok(())
    }

    fn poll(&mut self) -> Result<Option<TagId>, ReaderError> {
        let Some(device) = self.device.as_mut() else {
            return Err(ReaderError::Device("reader not open".to_string()));
        };

        let mut line = String::new();
        match device.read_line(&mut line) {
            Ok(0) => Err(ReaderError::Device(
                "end of stream from reader device".to_string(),
            )),
            Ok(_) => {
                let uid = line.trim();
                if uid.is_empty() {
                    return Ok(None);
                }
                TagId::from_hex(uid).map(Some).ok_or_else(|| {
                    ReaderError::Transient(format!("unparseable identifier line: {uid:?}"))
                })
            }
            Err(e) => Err(ReaderError::Transient(e.to_string())),
        }
    }

    fn close(&mut self) {
        self.device = None;
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ReaderError;
    use crate::reader::TagReader;

    fn device_with(contents: &str) -> tempfile::NamedTempFile {
        let Ok(file) = tempfile::NamedTempFile::new() else {
            panic!("could not create temp device");
        };
        assert!(std::fs::write(file.path(), contents).is_ok());
        file
    }

    fn path_str(file: &tempfile::NamedTempFile) -> String {
        file.path().display().to_string()
    }

    #[test]
    fn open_missing_device_is_fatal() {
        let mut reader = SerialReader::new();
        let Err(err) = reader.open("/nonexistent/reader") else {
            panic!("open should fail");
        };
        assert!(err.is_fatal());
    }

    #[test]
    fn poll_reads_uid_line() {
        let file = device_with("04a224b2\n");
        let mut reader = SerialReader::new();
        assert!(reader.open(&path_str(&file)).is_ok());

        let Ok(Some(tag)) = reader.poll() else {
            panic!("expected a tag");
        };
        assert_eq!(tag.to_string(), "04A224B2");
    }

    #[test]
    fn blank_line_is_quiet_timeout() {
        let file = device_with("\n");
        let mut reader = SerialReader::new();
        assert!(reader.open(&path_str(&file)).is_ok());
        assert!(matches!(reader.poll(), Ok(None)));
    }

    #[test]
    fn garbage_line_is_transient() {
        let file = device_with("not-hex\n");
        let mut reader = SerialReader::new();
        assert!(reader.open(&path_str(&file)).is_ok());
        assert!(matches!(reader.poll(), Err(ReaderError::Transient(_))));
    }

    #[test]
    fn end_of_stream_is_fatal() {
        let file = device_with("");
        let mut reader = SerialReader::new();
        assert!(reader.open(&path_str(&file)).is_ok());
        let Err(err) = reader.poll() else {
            panic!("expected device error");
        };
        assert!(err.is_fatal());
    }

    #[test]
    fn poll_after_close_is_fatal() {
        let file = device_with("04a224b2\n");
        let mut reader = SerialReader::new();
        assert!(reader.open(&path_str(&file)).is_ok());
        reader.close();
        assert!(matches!(reader.poll(), Err(ReaderError::Device(_))));
    }
}

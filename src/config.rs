//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// Path to the JSON file mapping uppercase-hex tag identifiers to
    /// category labels. Reloaded on every resolution, so it can be edited
    /// while the gateway runs.
    pub mapping_file: PathBuf,

    /// Transport string handed to the tag reader on open (device path for
    /// the serial adapter).
    pub reader_device: String,

    /// Idle delay between reader polls, in milliseconds.
    pub poll_idle_delay_ms: u64,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()?;

        let mapping_file = PathBuf::from(
            std::env::var("NFC_MAPPING_FILE").unwrap_or_else(|_| "nfc_mapping.json".to_string()),
        );

        let reader_device =
            std::env::var("READER_DEVICE").unwrap_or_else(|_| "/dev/ttyACM0".to_string());

        let poll_idle_delay_ms = parse_env("POLL_IDLE_DELAY_MS", 500);

        Ok(Self {
            listen_addr,
            mapping_file,
            reader_device,
            poll_idle_delay_ms,
        })
    }

    /// Idle delay between polls as a [`Duration`].
    #[must_use]
    pub const fn poll_idle_delay(&self) -> Duration {
        Duration::from_millis(self.poll_idle_delay_ms)
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

//! Server configuration.
//!
//! The served surface is fixed: the only knob exposed at runtime is log verbosity, through
//! `RUST_LOG` (see [`telemetry`](crate::telemetry)).

use std::net::{Ipv4Addr, SocketAddr};

/// The port the server listens on.
pub const PORT: u16 = 4000;

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for a server process.
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "Re-exported at the crate root, where `Config` alone says too little."
)]
pub struct ServerConfig {
    /// Address to bind the listening socket to.
    pub bind: SocketAddr,
    /// Fallback log filter, in `EnvFilter` directive syntax.
    pub log_filter: String,
}

impl Default for ServerConfig {
    #[inline]
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT)),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

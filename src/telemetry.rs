//! Log subscriber setup.

use crate::{config::ServerConfig, errors::ServerError};
use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    util::SubscriberInitExt as _,
};

/// Target of the lines the server always prints: the startup hint and the `/rest` marker. They
/// stay enabled whatever `RUST_LOG` says.
pub const BANNER_TARGET: &str = "bookshelf::banner";

/// Installs a global subscriber printing human-readable events to stdout.
///
/// Verbosity is read from `RUST_LOG`, falling back to [`ServerConfig::log_filter`].
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed, or if the banner directive
/// can't be parsed.
#[inline]
pub fn init(config: &ServerConfig) -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(with_banner(filter)?)
        .with_target(false)
        .finish()
        .try_init()?;
    Ok(())
}

/// Adds a directive enabling [`BANNER_TARGET`] at `info` to `filter`.
///
/// # Errors
///
/// Returns an error if the directive can't be parsed.
#[inline]
pub fn with_banner(filter: EnvFilter) -> Result<EnvFilter, ParseError> {
    Ok(filter.add_directive(format!("{BANNER_TARGET}=info").parse()?))
}

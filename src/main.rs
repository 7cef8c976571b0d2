//! Runs the bookshelf server on port 4000.

// Dependencies of the library, not used directly by the binary.
use async_graphql as _;
use async_graphql_axum as _;
use axum as _;
use parking_lot as _;
use serde as _;
use thiserror as _;
use tower_http as _;
use tracing as _;
use tracing_subscriber as _;
#[cfg(test)]
use {reqwest as _, serde_json as _, tower as _};

use bookshelf::{BookStore, ServerConfig, ServerError, serve, telemetry};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::default();
    telemetry::init(&config)?;

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind.to_string(),
            source,
        })?;
    serve(listener, BookStore::seeded()).await
}

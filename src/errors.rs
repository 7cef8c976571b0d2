//! Error types used by the store and the server process.

use std::io::Error as IoError;
use thiserror::Error;
use tracing_subscriber::{filter::ParseError, util::TryInitError};

/// Errors that may occur when mutating a book. Created by the mutating methods of
/// [`BookStore`](crate::store::BookStore).
///
/// Lookups never produce this error; a missing book is reported as [`None`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// There was no book with the requested identifier.
    #[error("Couldn't find book with id {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: i32,
    },
}

/// Errors that may stop the server process. These never reach clients; resolver failures are
/// reported inside GraphQL responses instead.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound.
    #[error("Unable to bind {addr}: {source}")]
    Bind {
        /// The address that was requested.
        addr: String,
        /// The source error.
        #[source]
        source: IoError,
    },
    /// A built-in log directive could not be parsed.
    #[error(transparent)]
    LogDirective(#[from] ParseError),
    /// A global log subscriber was already installed.
    #[error(transparent)]
    Logging(#[from] TryInitError),
    /// The server stopped with an IO error.
    #[error(transparent)]
    Serve(#[from] IoError),
}

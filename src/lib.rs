//! A demonstration GraphQL server over a small, in-memory list of books.
//!
//! The [`store`] holds the books, the [`schema`] exposes them as GraphQL queries and mutations,
//! and [`app`] serves the schema over HTTP together with a `GraphiQL` editor.

// Silences `unused_crate_dependencies` for the library's unit-test target; only the
// integration tests use it.
#[cfg(test)]
use reqwest as _;

pub mod app;
pub mod config;
pub mod errors;
pub mod schema;
pub mod store;
pub mod telemetry;

#[cfg(test)]
mod api_testing;

pub use app::{router, serve};
pub use config::ServerConfig;
pub use errors::{ServerError, StoreError};
pub use store::{Book, BookStore};

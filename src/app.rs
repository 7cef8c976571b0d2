//! The HTTP front end: routes, handlers and the server loop.

use crate::{
    errors::ServerError,
    schema::{self, BookSchema},
    store::BookStore,
    telemetry::BANNER_TARGET,
};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Json, Router, extract::State, response::Html, routing::get, serve as axum_serve};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Path of the query/mutation execution route.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Path of the interactive query editor.
pub const GRAPHIQL_PATH: &str = "/graphiql";

/// Path of the smoke-test route.
pub const REST_PATH: &str = "/rest";

/// Line logged whenever the smoke-test route is hit.
const REST_MARKER: &str = "!!!--------REST req hit ------!!!!";

/// Body of the smoke-test route.
#[derive(Debug, Serialize)]
struct SmokeResponse {
    /// Always 123.
    wtf: u32,
}

/// Executes a GraphQL request. Accepts JSON bodies on `POST` and query strings on `GET`.
async fn graphql(State(schema): State<BookSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Serves `GraphiQL`, pointed at [`GRAPHQL_PATH`].
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Unrelated to books; only here to check that the server answers.
async fn rest() -> Json<SmokeResponse> {
    info!(target: BANNER_TARGET, "{REST_MARKER}");
    Json(SmokeResponse { wtf: 123 })
}

/// Builds the router serving `store`.
#[inline]
pub fn router(store: BookStore) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql).post(graphql))
        .route(GRAPHIQL_PATH, get(graphiql))
        .route(REST_PATH, get(rest))
        .layer(TraceLayer::new_for_http())
        .with_state(schema::build(store))
}

/// Serves `store` on an already bound listener until the server stops.
///
/// # Errors
///
/// Returns an error if the local address can't be read or the server fails.
#[inline]
pub async fn serve(listener: TcpListener, store: BookStore) -> Result<(), ServerError> {
    let port = listener.local_addr()?.port();
    info!(
        target: BANNER_TARGET,
        "Go to http://localhost:{port}{GRAPHIQL_PATH} to run queries!"
    );
    axum_serve(listener, router(store)).await?;
    Ok(())
}

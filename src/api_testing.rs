use crate::{
    app::{GRAPHIQL_PATH, GRAPHQL_PATH, REST_PATH, router},
    store::BookStore,
};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use tower::ServiceExt as _; // trait for calling the app

/// Sends `request` to `app` and returns the status and raw body.
///
/// # Panics
///
/// Panics if the request fails or the body can't be read.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, bytes.to_vec())
}

/// Posts a GraphQL document and returns the decoded response. The HTTP status must be 200 even
/// when the document fails.
///
/// # Panics
///
/// Panics if the request fails, the status isn't 200 or the body isn't JSON.
async fn post_graphql(app: &Router, query: &str) -> Value {
    let request = Request::builder()
        .method(Method::POST)
        .uri(GRAPHQL_PATH)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .expect("Failed to build GraphQL request");
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).expect("Failed to deserialize GraphQL response")
}

/// # Panics
/// Panics if tests fail
#[tokio::test]
async fn graphql_queries() {
    let app = router(BookStore::seeded());

    let books = post_graphql(&app, "{ books { id title author inventory } }").await;
    assert_eq!(
        books,
        json!({
            "data": {
                "books": [
                    {
                        "id": 0,
                        "title": "Harry Potter and the Sorcerer's stone",
                        "author": "J.K. Rowling",
                        "inventory": 0,
                    },
                    {
                        "id": 1,
                        "title": "Jurassic Park",
                        "author": "Michael Crichton",
                        "inventory": 0,
                    },
                ]
            }
        })
    );

    let found = post_graphql(&app, "{ book(id: 0) { id author } }").await;
    assert_eq!(found["data"]["book"], json!({ "id": 0, "author": "J.K. Rowling" }));

    let missing = post_graphql(&app, "{ book(id: 7) { id } }").await;
    assert_eq!(missing, json!({ "data": { "book": null } }));
}

/// # Panics
/// Panics if tests fail
#[tokio::test]
async fn graphql_mutations() {
    let app = router(BookStore::seeded());

    let renamed = post_graphql(
        &app,
        r#"mutation { updateTitle(id: 0, title: "New Title") { id } }"#,
    )
    .await;
    assert_eq!(renamed["data"]["updateTitle"]["id"], 0);

    let after = post_graphql(&app, "{ book(id: 0) { title author inventory } }").await;
    assert_eq!(
        after["data"]["book"],
        json!({ "title": "New Title", "author": "J.K. Rowling", "inventory": 0 })
    );

    for _ in 0..3 {
        let _increased =
            post_graphql(&app, "mutation { increaseInventory(id: 1) { inventory } }").await;
    }
    let stocked = post_graphql(&app, "{ book(id: 1) { inventory } }").await;
    assert_eq!(stocked["data"]["book"]["inventory"], 3);

    let failed = post_graphql(&app, "mutation { increaseInventory(id: 99) { inventory } }").await;
    assert_eq!(failed["data"], json!({ "increaseInventory": null }));
    assert_eq!(
        failed["errors"][0]["message"],
        "Couldn't find book with id 99"
    );
}

/// # Panics
/// Panics if tests fail
#[tokio::test]
async fn graphql_over_get() {
    let app = router(BookStore::seeded());

    let request = Request::builder()
        .uri(format!("{GRAPHQL_PATH}?query=%7Bbook(id%3A1)%7Btitle%7D%7D"))
        .body(Body::empty())
        .expect("Failed to build GET request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let response: Value = serde_json::from_slice(&body).expect("Failed to deserialize response");
    assert_eq!(response["data"]["book"]["title"], "Jurassic Park");
}

/// # Panics
/// Panics if tests fail
#[tokio::test]
async fn graphiql_page() {
    let app = router(BookStore::seeded());

    let request = Request::builder()
        .uri(GRAPHIQL_PATH)
        .body(Body::empty())
        .expect("Failed to build GraphiQL request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let page = String::from_utf8(body).expect("GraphiQL page isn't UTF-8");
    assert!(page.to_lowercase().contains("graphiql"));
    assert!(page.contains(GRAPHQL_PATH));
}

/// # Panics
/// Panics if tests fail
#[tokio::test]
async fn rest_smoke_route() {
    let app = router(BookStore::seeded());

    for uri in [REST_PATH.to_owned(), format!("{REST_PATH}?ignored=1&wtf=0")] {
        let request = Request::builder()
            .uri(uri)
            .body(Body::from("ignored"))
            .expect("Failed to build REST request");
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);

        let response: Value =
            serde_json::from_slice(&body).expect("Failed to deserialize REST response");
        assert_eq!(response, json!({ "wtf": 123 }));
    }
}

//! In-process stub server for the external APIs.
//!
//! One handler per route, each returning a fixture; anything unhandled gets
//! a 500 plus a console diagnostic so a test hitting an unmocked route
//! fails loudly instead of hanging on a real network call. Individual tests
//! override a route by building their own router with a replacement handler
//! before the fixture routes.

pub mod fixtures;

use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

#[allow(dead_code)]
pub fn mock_api_router() -> Router {
    Router::new()
        .route("/dj-rest-auth/keycloak", post(|| async { Json(fixtures::user_auth_fixture()) }))
        .route("/dj-rest-auth/user/", get(|| async { Json(fixtures::user_info_fixture()) }))
        .route(
            "/api/v1/carts/{pk}/",
            get(|| async { Json(fixtures::user_cart_fixture()) })
                .patch(|| async { Json(fixtures::user_cart_fixture()) }),
        )
        .route(
            "/api/v1/projects/",
            get(|| async { Json(serde_json::json!({ "results": fixtures::projects_fixture() })) }),
        )
        .route("/esg-search/search", get(|| async { Json(fixtures::esg_search_fixture()) }))
        .route("/search_files/{id}", get(|| async { Json(fixtures::esg_search_fixture()) }))
        .route("/citation_url", get(|| async { Json(fixtures::citation_fixture()) }))
        .fallback(unhandled_route)
}

async fn unhandled_route(uri: Uri) -> impl IntoResponse {
    eprintln!("Please add request handler for {}", uri);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "You must add request handler." })),
    )
}

/// Bind a router on an ephemeral port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_router(router: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{}", addr))
}

/// The full fixture contract on an ephemeral port.
#[allow(dead_code)]
pub async fn spawn_mock_api() -> anyhow::Result<String> {
    spawn_router(mock_api_router()).await
}

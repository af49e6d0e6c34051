//! Contract tests for the auth and cart operations against the mock API.

mod mock_api;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use backend::api::cart::{fetch_current_user_cart, fetch_user_cart, update_current_user_cart};
use backend::api::users::{fetch_user_info, keycloak_auth};
use backend::http_utils::api_routes::ApiRoutes;


#[tokio::test]
async fn auth_chain_reaches_the_cart() {
    let base = mock_api::spawn_mock_api().await.unwrap();
    let routes = ApiRoutes::from_base_urls(&base, &base);

    let auth = keycloak_auth(&routes).await.unwrap();
    assert_eq!(auth.access_token, "mock-access-token");

    let user = fetch_user_info(&routes, &auth.access_token).await.unwrap();
    assert_eq!(user.pk, "5d7a5684-0b77-4c64-95c4-655dcaa0c1cf");

    let cart = fetch_user_cart(&routes, &user.pk, &auth.access_token).await.unwrap();
    assert_eq!(cart.len(), 1);
    assert!(cart.contains("CMIP6.CMIP.E3SM-Project.piControl.r1i1p1f1|aims3.llnl.gov"));
}

#[tokio::test]
async fn chained_cart_operations_roundtrip() {
    let base = mock_api::spawn_mock_api().await.unwrap();
    let routes = ApiRoutes::from_base_urls(&base, &base);

    let cart = fetch_current_user_cart(&routes).await.unwrap();
    assert!(!cart.is_empty());

    let updated = update_current_user_cart(&routes, &cart.items).await.unwrap();
    assert_eq!(updated.items, cart.items);
}

#[tokio::test]
async fn overridden_cart_route_surfaces_the_error() {
    // a test can stand up its own handler set, e.g. a 404 cart
    let router = Router::new().route(
        "/api/v1/carts/{pk}/",
        get(|| async { (StatusCode::NOT_FOUND, Json(serde_json::json!({ "detail": "Not found." }))) }),
    );
    let base = mock_api::spawn_router(router).await.unwrap();
    let routes = ApiRoutes::from_base_urls(&base, &base);

    let err = fetch_user_cart(&routes, "abc", "token").await.unwrap_err();
    assert!(err.to_string().contains("404"), "unexpected error: {}", err);
}

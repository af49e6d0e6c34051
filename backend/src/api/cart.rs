//! User cart endpoints.

use common::cart::UserCart;
use common::search_result::Dataset;

use crate::api::users::{fetch_user_info, keycloak_auth};
use crate::http_utils::{api_routes::ApiRoutes, json_fetch::{get_json_with_token, patch_json}};


pub async fn fetch_user_cart(
    routes: &ApiRoutes,
    pk: &str,
    access_token: &str,
) -> anyhow::Result<UserCart> {
    get_json_with_token(&routes.user_cart_url(pk), access_token).await
}

/// Replace the cart's item list and return the cart as stored.
pub async fn update_user_cart(
    routes: &ApiRoutes,
    pk: &str,
    access_token: &str,
    items: &[Dataset],
) -> anyhow::Result<UserCart> {
    let body = serde_json::json!({ "items": items });
    patch_json(&routes.user_cart_url(pk), access_token, &body).await
}

/// Auth, profile and cart fetch chained for the current session.
pub async fn fetch_current_user_cart(routes: &ApiRoutes) -> anyhow::Result<UserCart> {
    let auth = keycloak_auth(routes).await?;
    let user = fetch_user_info(routes, &auth.access_token).await?;
    fetch_user_cart(routes, &user.pk, &auth.access_token).await
}

pub async fn update_current_user_cart(
    routes: &ApiRoutes,
    items: &[Dataset],
) -> anyhow::Result<UserCart> {
    let auth = keycloak_auth(routes).await?;
    let user = fetch_user_info(routes, &auth.access_token).await?;
    update_user_cart(routes, &user.pk, &auth.access_token, items).await
}

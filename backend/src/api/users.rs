//! Auth endpoints.

use common::users::{UserAuth, UserInfo};

use crate::http_utils::{api_routes::ApiRoutes, json_fetch::{get_json_with_token, post_json}};


/// Exchange the session for API tokens.
pub async fn keycloak_auth(routes: &ApiRoutes) -> anyhow::Result<UserAuth> {
    post_json(&routes.keycloak_auth).await
}

pub async fn fetch_user_info(routes: &ApiRoutes, access_token: &str) -> anyhow::Result<UserInfo> {
    get_json_with_token(&routes.user_info, access_token).await
}

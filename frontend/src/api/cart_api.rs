//! Client API calls for the user cart.

use common::cart::UserCart;
use common::search_result::Dataset;
use dioxus::prelude::*;


#[server]
pub async fn fetch_cart() -> Result<UserCart, ServerFnError> {
    let routes = backend::http_utils::api_routes::ApiRoutes::from_env();
    let x = backend::api::cart::fetch_current_user_cart(&routes).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn save_cart(items: Vec<Dataset>) -> Result<UserCart, ServerFnError> {
    let routes = backend::http_utils::api_routes::ApiRoutes::from_env();
    let x = backend::api::cart::update_current_user_cart(&routes, &items).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

//! JSON request helpers, with response caching for search traffic.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use serde::de::DeserializeOwned;
use tracing::info;


pub async fn get_json<T: DeserializeOwned>(url: &str) -> anyhow::Result<T> {
    request_json(reqwest::Client::new().get(url)).await
}

pub async fn get_json_with_token<T: DeserializeOwned>(url: &str, access_token: &str) -> anyhow::Result<T> {
    request_json(reqwest::Client::new().get(url).bearer_auth(access_token)).await
}

pub async fn post_json<T: DeserializeOwned>(url: &str) -> anyhow::Result<T> {
    request_json(reqwest::Client::new().post(url)).await
}

pub async fn patch_json<T: DeserializeOwned>(
    url: &str,
    access_token: &str,
    body: &serde_json::Value,
) -> anyhow::Result<T> {
    request_json(
        reqwest::Client::new()
            .patch(url)
            .bearer_auth(access_token)
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(body)?),
    )
    .await
}

async fn request_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> anyhow::Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    Ok(serde_json::from_str(&response_txt)?)
}


fn search_cache() -> &'static Mutex<HashMap<String, String>> {
    static CACHE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// GET with an in-process response cache, keyed by the full request URL.
/// Used for search traffic only, where identical queries repeat as the user
/// navigates back and forth between result pages.
pub async fn get_json_cached<T: DeserializeOwned>(url: &str) -> anyhow::Result<T> {
    let query_hash = sha256::digest(url);
    if let Ok(cache) = search_cache().lock() {
        if let Some(cached_response) = cache.get(&query_hash) {
            if let Ok(response) = serde_json::from_str::<T>(cached_response) {
                info!("search cache hit: {}", query_hash);
                return Ok(response);
            }
        }
    }
    info!("search cache miss: {}", query_hash);

    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let parsed = serde_json::from_str(&response_txt)?;
    if let Ok(mut cache) = search_cache().lock() {
        cache.insert(query_hash, response_txt);
    }
    Ok(parsed)
}

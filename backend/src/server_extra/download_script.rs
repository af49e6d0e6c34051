//! Wget script download route for the cart checkout flow.

use axum::{body::Body, extract::Query, http::StatusCode, response::IntoResponse};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};

use crate::api::search::search_files;
use crate::http_utils::api_routes::ApiRoutes;


#[derive(Debug, Deserialize)]
pub struct WgetScriptParams {
    /// Comma separated dataset ids from the cart.
    pub dataset_ids: String,
}

pub async fn download_wget_script(Query(params): Query<WgetScriptParams>) -> impl IntoResponse {
    let dataset_ids: Vec<&str> = params
        .dataset_ids
        .split(',')
        .filter(|id| !id.is_empty())
        .collect();
    info!("Rendering wget script for {} datasets", dataset_ids.len());

    let routes = ApiRoutes::from_env();
    let mut urls = Vec::new();
    for dataset_id in dataset_ids {
        match search_files(&routes, dataset_id, 0).await {
            Ok(result) => {
                urls.extend(
                    result
                        .files
                        .iter()
                        .filter_map(|file| file.http_download_url().map(str::to_string)),
                );
            }
            Err(e) => {
                warn!("File listing failed for {}: {}", dataset_id, e);
                return (
                    StatusCode::BAD_GATEWAY,
                    format!("File listing failed for {}", dataset_id),
                )
                    .into_response();
            }
        }
    }

    let body = Body::from(Bytes::from(render_wget_script(&urls)));
    let headers = [
        ("Content-Type", "text/x-shellscript; charset=utf-8"),
        ("Content-Disposition", "attachment; filename=\"dataset_download.sh\""),
    ];
    (headers, body).into_response()
}

/// Script body: one resumable wget invocation per file URL.
pub fn render_wget_script(urls: &[String]) -> String {
    let mut script = String::from("#!/bin/bash\nset -e\n\n");
    for url in urls {
        script.push_str(&format!("wget -c {:?}\n", url));
    }
    script
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_lists_one_wget_per_url() {
        let script = render_wget_script(&[
            "http://host/f1.nc".to_string(),
            "http://host/f2.nc".to_string(),
        ]);
        assert!(script.starts_with("#!/bin/bash"));
        assert_eq!(script.matches("wget -c").count(), 2);
        assert!(script.contains("\"http://host/f1.nc\""));
    }

    #[test]
    fn empty_cart_renders_header_only() {
        let script = render_wget_script(&[]);
        assert!(script.starts_with("#!/bin/bash"));
        assert!(!script.contains("wget"));
    }
}

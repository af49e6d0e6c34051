//! Routes for the external API services used by the app.

/// Resolved endpoint URLs for every external service the client talks to:
/// the user-data API (auth, profile, carts, projects) and the search node
/// (dataset/file search, citation proxy, status monitor).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRoutes {
    pub keycloak_auth: String,
    pub user_info: String,
    pub user_cart: String,
    pub projects: String,
    pub search_datasets: String,
    pub search_files: String,
    pub citation: String,
    pub node_status: String,
}

impl ApiRoutes {
    /// Resolve all endpoints from the environment, with local defaults.
    pub fn from_env() -> Self {
        let user_api = std::env::var("USER_API_URL").unwrap_or("http://localhost:8000".to_string());
        let search_api = std::env::var("SEARCH_API_URL").unwrap_or("http://localhost:8080".to_string());
        Self::from_base_urls(&user_api, &search_api)
    }

    pub fn from_base_urls(user_api: &str, search_api: &str) -> Self {
        let user_api = user_api.trim_end_matches('/');
        let search_api = search_api.trim_end_matches('/');
        Self {
            keycloak_auth: format!("{user_api}/dj-rest-auth/keycloak"),
            user_info: format!("{user_api}/dj-rest-auth/user/"),
            user_cart: format!("{user_api}/api/v1/carts"),
            projects: format!("{user_api}/api/v1/projects/"),
            search_datasets: format!("{search_api}/esg-search/search"),
            search_files: format!("{search_api}/search_files"),
            citation: format!("{search_api}/citation_url"),
            node_status: format!("{search_api}/status"),
        }
    }

    pub fn user_cart_url(&self, pk: &str) -> String {
        format!("{}/{}/", self.user_cart, pk)
    }

    pub fn search_files_url(&self, dataset_id: &str) -> String {
        format!("{}/{}", self.search_files, dataset_id)
    }
}

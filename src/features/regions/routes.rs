use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers::{self, RegionState};
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>, max_limit: usize) -> Router {
    Router::new()
        .route("/api/regions/stats", get(handlers::get_stats))
        .route("/api/regions/provinces", get(handlers::list_provinces))
        .route("/api/regions/levels/{level}", get(handlers::list_by_level))
        // Search routes (must come before {code} route)
        .route("/api/regions/search", get(handlers::search_regions))
        .route(
            "/api/regions/search/cache",
            get(handlers::get_search_cache).delete(handlers::clear_search_cache),
        )
        .route(
            "/api/regions/autocomplete",
            get(handlers::autocomplete_regions),
        )
        // Lookup by code
        .route("/api/regions/{code}", get(handlers::get_region))
        .route("/api/regions/{code}/children", get(handlers::list_children))
        .with_state(RegionState::new(service, max_limit))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use super::*;
    use crate::shared::test_helpers::sample_service;

    fn server_with_limit(max_limit: usize) -> TestServer {
        let app = routes(Arc::new(sample_service()), max_limit);
        TestServer::new(app).unwrap()
    }

    fn server() -> TestServer {
        server_with_limit(100)
    }

    fn codes(body: &Value) -> Vec<&str> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["code"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_get_region_by_code() {
        let response = server().get("/api/regions/31.71").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["code"], "31.71");
        assert_eq!(body["data"]["name"], "Kota Administrasi Jakarta Pusat");
        assert_eq!(body["data"]["level"], 2);
    }

    #[tokio::test]
    async fn test_get_unknown_region_is_not_found() {
        let response = server().get("/api/regions/99.99").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_list_provinces() {
        let response = server().get("/api/regions/provinces").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(codes(&body), vec!["11", "31", "32"]);
        assert_eq!(body["meta"]["total"], 3);
    }

    #[tokio::test]
    async fn test_list_children_and_levels() {
        let server = server();

        let body: Value = server.get("/api/regions/11.01/children").await.json();
        assert_eq!(codes(&body), vec!["11.01.01", "11.01.02"]);

        let body: Value = server.get("/api/regions/invalid/children").await.json();
        assert!(codes(&body).is_empty());

        let body: Value = server.get("/api/regions/levels/4").await.json();
        assert_eq!(body["meta"]["total"], 4);

        let body: Value = server.get("/api/regions/levels/9").await.json();
        assert_eq!(body["meta"]["total"], 0);

        server
            .get("/api/regions/levels/abc")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stats() {
        let body: Value = server().get("/api/regions/stats").await.json();
        assert_eq!(body["data"]["total"], 17);
        assert_eq!(body["data"]["provinsi"], 3);
        assert_eq!(body["data"]["kabupaten"], 6);
        assert_eq!(body["data"]["kecamatan"], 4);
        assert_eq!(body["data"]["kelurahan"], 4);
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let server = server();
        server
            .get("/api/regions/search")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .get("/api/regions/autocomplete")
            .add_query_param("q", "")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_and_autocomplete() {
        let server = server();

        let body: Value = server
            .get("/api/regions/search")
            .add_query_param("q", "JAKARTA")
            .await
            .json();
        assert_eq!(codes(&body), vec!["31", "31.71", "31.74"]);

        let body: Value = server
            .get("/api/regions/autocomplete")
            .add_query_param("q", "jakarta")
            .add_query_param("limit", 2)
            .await
            .json();
        assert_eq!(codes(&body), vec!["31", "31.71"]);
        assert_eq!(body["meta"]["total"], 2);

        // Short queries are valid but match nothing
        let body: Value = server
            .get("/api/regions/search")
            .add_query_param("q", "a")
            .await
            .json();
        assert!(codes(&body).is_empty());
    }

    #[tokio::test]
    async fn test_limit_is_capped() {
        let body: Value = server_with_limit(1)
            .get("/api/regions/search")
            .add_query_param("q", "aceh")
            .add_query_param("limit", 50)
            .await
            .json();
        assert_eq!(codes(&body), vec!["11"]);
    }

    #[tokio::test]
    async fn test_clear_search_cache() {
        let server = server();
        for _ in 0..2 {
            server
                .get("/api/regions/search")
                .add_query_param("q", "bandung")
                .await
                .assert_status_ok();
        }

        let body: Value = server.get("/api/regions/search/cache").await.json();
        assert_eq!(body["data"]["entries"], 1);
        assert_eq!(body["data"]["hits"], 1);
        assert_eq!(body["data"]["misses"], 1);

        let response = server.delete("/api/regions/search/cache").await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["entries"], 0);
        assert_eq!(body["message"], "Search cache cleared");
    }
}

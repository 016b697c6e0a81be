use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::countries::handlers;
use crate::features::countries::services::CountryService;

/// Create routes for the countries feature
pub fn routes(service: Arc<CountryService>) -> Router {
    Router::new()
        .route(
            "/api/countries",
            get(handlers::list_countries).post(handlers::create_country),
        )
        .route(
            "/api/countries/code/{code}",
            get(handlers::get_country_by_code),
        )
        .route(
            "/api/countries/{id}",
            get(handlers::get_country)
                .patch(handlers::update_country)
                .delete(handlers::delete_country),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::countries::models::Country;
    use crate::modules::resource::MemoryStore;
    use crate::shared::test_helpers::{create_regular_user, with_admin_auth, with_user};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn app() -> Router {
        routes(Arc::new(CountryService::new(Arc::new(
            MemoryStore::<Country>::new(),
        ))))
    }

    fn admin_server() -> TestServer {
        TestServer::new(with_admin_auth(app())).unwrap()
    }

    #[tokio::test]
    async fn test_create_requires_authentication() {
        let server = TestServer::new(app()).unwrap();

        let response = server
            .post("/api/countries")
            .json(&json!({ "name_country": "Indonesia", "code": "ID" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_requires_manage_permission() {
        let server = TestServer::new(with_user(app(), create_regular_user())).unwrap();

        let response = server
            .post("/api/countries")
            .json(&json!({ "name_country": "Indonesia" }))
            .await;

        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_create_get_update_delete() {
        let server = admin_server();

        let response = server
            .post("/api/countries")
            .json(&json!({ "name_country": "Indonesia", "code": "ID" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name_country"], "Indonesia");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let response = server.get(&format!("/api/countries/{}", id)).await;
        response.assert_status_ok();

        let response = server
            .patch(&format!("/api/countries/{}", id))
            .json(&json!({ "name_country": "Republic of Indonesia" }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["name_country"], "Republic of Indonesia");
        assert_eq!(body["data"]["code"], "ID");

        let response = server.get("/api/countries/code/ID").await;
        response.assert_status_ok();

        let response = server.delete(&format!("/api/countries/{}", id)).await;
        response.assert_status(StatusCode::NO_CONTENT);

        let response = server.get(&format!("/api/countries/{}", id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_code_is_bad_request() {
        let server = admin_server();

        server
            .post("/api/countries")
            .json(&json!({ "name_country": "Indonesia", "code": "ID" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/api/countries")
            .json(&json!({ "name_country": "Other", "code": "ID" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "code already taken");
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_and_blank_fields() {
        let server = admin_server();

        server
            .post("/api/countries")
            .json(&json!({ "name_country": "Indonesia", "capital": "Jakarta" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .post("/api/countries")
            .json(&json!({ "name_country": "   " }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .patch(&format!("/api/countries/{}", uuid::Uuid::now_v7()))
            .json(&json!({}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_paginates_and_filters() {
        let server = admin_server();

        for (name, code) in [("Indonesia", "ID"), ("Malaysia", "MY"), ("Singapore", "SG")] {
            server
                .post("/api/countries")
                .json(&json!({ "name_country": name, "code": code }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server
            .get("/api/countries")
            .add_query_param("limit", 2)
            .add_query_param("page", 2)
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["totalResults"], 3);
        assert_eq!(body["data"]["totalPages"], 2);
        assert_eq!(body["data"]["page"], 2);
        assert_eq!(body["data"]["limit"], 2);
        assert_eq!(body["data"]["results"].as_array().unwrap().len(), 1);
        assert_eq!(body["meta"]["total"], 3);

        let response = server
            .get("/api/countries")
            .add_query_param("code", "MY")
            .await;
        let body: Value = response.json();
        assert_eq!(body["data"]["totalResults"], 1);
        assert_eq!(body["data"]["results"][0]["name_country"], "Malaysia");

        let response = server
            .get("/api/countries")
            .add_query_param("sortBy", "name_country:desc")
            .await;
        let body: Value = response.json();
        assert_eq!(body["data"]["results"][0]["name_country"], "Singapore");
    }

    #[tokio::test]
    async fn test_list_rejects_bad_query() {
        let server = admin_server();

        server
            .get("/api/countries")
            .add_query_param("capital", "Jakarta")
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .get("/api/countries")
            .add_query_param("limit", 0)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .get("/api/countries")
            .add_query_param("sortBy", "password")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_and_unknown_ids() {
        let server = admin_server();

        server
            .get("/api/countries/not-a-uuid")
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .delete(&format!("/api/countries/{}", uuid::Uuid::now_v7()))
            .await
            .assert_status(StatusCode::NOT_FOUND);

        server
            .get("/api/countries/code/XX")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

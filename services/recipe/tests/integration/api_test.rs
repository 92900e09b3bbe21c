//! Router-level checks that run without a live database. Requests here are
//! rejected (or answered) before any query is issued.

use axum_test::TestServer;
use http::StatusCode;

use ladle_recipe::router::build_router;
use ladle_recipe::state::AppState;

fn test_server() -> TestServer {
    let state = AppState {
        db: sea_orm::DatabaseConnection::default(),
        media_root: std::env::temp_dir(),
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_answer_health_probes() {
    let server = test_server();

    let response = server.get("/healthz").await;
    response.assert_status(StatusCode::OK);

    let response = server.get("/readyz").await;
    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn should_reject_protected_routes_without_authorization_header() {
    let server = test_server();

    for path in [
        "/users/@me",
        "/recipe/tags",
        "/recipe/ingredients",
        "/recipe/recipes",
        "/recipe/recipes/1",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn should_reject_malformed_authorization_scheme() {
    let server = test_server();

    let response = server
        .get("/recipe/tags")
        .add_header(
            http::header::AUTHORIZATION,
            http::HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        )
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .get("/recipe/tags")
        .add_header(
            http::header::AUTHORIZATION,
            http::HeaderValue::from_static("some-bare-key"),
        )
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_return_unauthorized_error_body() {
    let server = test_server();

    let response = server.get("/recipe/recipes").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "UNAUTHORIZED");
}

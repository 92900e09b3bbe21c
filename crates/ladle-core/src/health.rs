use axum::http::StatusCode;

/// `GET /healthz`: process is up.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz`: ready to take traffic. A service with external
/// dependencies can route to its own handler instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

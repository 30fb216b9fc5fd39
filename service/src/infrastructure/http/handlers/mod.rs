use axum::http::StatusCode;

pub mod pages;
pub mod questions;

// health check handler
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

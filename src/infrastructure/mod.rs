pub mod axum_http;
pub mod hashing;
pub mod postgres;

// src/api/mod.rs - HTTP surface for the interview service

pub mod error;
pub mod http;

pub use error::ApiError;
pub use http::http_router;

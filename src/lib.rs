// src/lib.rs - library root for the interview server

pub mod api;
pub mod config;
pub mod error;
pub mod interview;
pub mod state;
pub mod store;

pub use error::{InterviewError, Result};
pub use state::AppState;

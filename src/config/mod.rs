// src/config/mod.rs
// Process configuration, loaded once from the environment at startup.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct InterviewConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── Database
    pub database_url: String,

    // ── CORS
    /// Comma-separated origin list, or "*" for any origin
    pub cors_allowed_origins: String,
    pub cors_allowed_methods: String,
    pub cors_allowed_headers: String,
    pub cors_allow_credentials: bool,
}

/// Read an env var, trimming whitespace and inline comments, falling back to
/// the default when the variable is missing or unparseable.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(raw) => {
            let clean = raw.split('#').next().unwrap_or("").trim();
            match clean.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {key} = '{raw}' (parse failed, using default)");
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl InterviewConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_var_or("INTERVIEW_HOST", "0.0.0.0".to_string()),
            port: env_var_or("INTERVIEW_PORT", 8080),
            database_url: env_var_or("DATABASE_URL", "sqlite:./interview.db".to_string()),
            cors_allowed_origins: env_var_or(
                "INTERVIEW_CORS_ORIGINS",
                "http://localhost:5173".to_string(),
            ),
            cors_allowed_methods: env_var_or(
                "INTERVIEW_CORS_METHODS",
                "GET,POST,OPTIONS".to_string(),
            ),
            cors_allowed_headers: env_var_or(
                "INTERVIEW_CORS_HEADERS",
                "Content-Type".to_string(),
            ),
            cors_allow_credentials: env_var_or("INTERVIEW_CORS_CREDENTIALS", true),
        }
    }

    /// Server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<InterviewConfig> = Lazy::new(InterviewConfig::from_env);

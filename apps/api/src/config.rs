use anyhow::{Context, Result};
use axum::http::HeaderValue;

/// Application configuration loaded from environment variables.
/// Startup fails if `GEMINI_API_KEY` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// The single browser origin allowed by CORS.
    pub cors_origin: HeaderValue,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let cors_origin = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            cors_origin: HeaderValue::from_str(&cors_origin)
                .with_context(|| format!("CORS_ORIGIN '{cors_origin}' is not a valid origin"))?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    let value =
        std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_reports_missing_key() {
        let err = require_env("MATCH_API_TEST_DEFINITELY_UNSET").unwrap_err();
        assert!(err.to_string().contains("MATCH_API_TEST_DEFINITELY_UNSET"));
    }
}

use anyhow::{Context, Result};

const DEFAULT_API_VERSION: &str = "2023-05-15";
const DEFAULT_DEPLOYMENT: &str = "gpt-4";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub azure_openai_endpoint: String,
    pub azure_openai_api_key: String,
    pub azure_openai_api_version: String,
    pub azure_openai_deployment: String,
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            azure_openai_endpoint: require_env("AZURE_OPENAI_ENDPOINT")?,
            azure_openai_api_key: require_env("AZURE_OPENAI_API_KEY")?,
            azure_openai_api_version: env_or("AZURE_OPENAI_API_VERSION", DEFAULT_API_VERSION),
            azure_openai_deployment: env_or("AZURE_OPENAI_DEPLOYMENT", DEFAULT_DEPLOYMENT),
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
pub(crate) fn test_config(endpoint: &str) -> Config {
    Config {
        azure_openai_endpoint: endpoint.to_string(),
        azure_openai_api_key: "test-key".to_string(),
        azure_openai_api_version: DEFAULT_API_VERSION.to_string(),
        azure_openai_deployment: DEFAULT_DEPLOYMENT.to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        rust_log: "debug".to_string(),
    }
}

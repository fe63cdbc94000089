use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable data; `LlmClient` wraps a cloneable connection pool handle.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let llm = LlmClient::new(&config)?;
        Ok(Self { llm, config })
    }
}

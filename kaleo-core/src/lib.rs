use std::env;
use std::sync::Arc;

use tracing::warn;

use kaleo_api::ApiClient;

/// Runtime configuration loaded from the environment.
pub struct Config {
    /// Base URL of the service, e.g. `https://kaleo.example.org`.
    pub api_url: String,
    /// Bearer token for protected endpoints, when present.
    pub access_token: Option<String>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `KALEO_API_URL` is required. `KALEO_ACCESS_TOKEN` is optional;
    /// without it only the public screens work.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_url = env::var("KALEO_API_URL")
            .map_err(|_| anyhow::anyhow!("KALEO_API_URL must be set"))?;

        let access_token = env::var("KALEO_ACCESS_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        if access_token.is_none() {
            warn!("KALEO_ACCESS_TOKEN not set; only public screens will work");
        }

        Ok(Self {
            api_url,
            access_token,
        })
    }
}

/// Shared application context passed into screens.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub api: Arc<ApiClient>,
}

impl Context {
    /// Create a new application context.
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

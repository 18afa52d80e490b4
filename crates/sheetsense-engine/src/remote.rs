//! Optional remote insight enrichment
//!
//! The engine itself performs no I/O. Callers that want model-generated
//! commentary implement [`InsightProvider`]; its result is appended to the
//! locally computed summary and never replaces the computed table. Any
//! provider failure must surface as `None`, not an error.

use sheetsense_core::Table;
use std::time::Duration;

/// Best-effort supplementary insight source
pub trait InsightProvider {
    /// Produce insight text for a prompt and a data sample, or `None` on
    /// any failure. Implementations must bound their own wait time.
    fn try_insight(&self, prompt: &str, sample: &Table) -> Option<String>;
}

/// Provider that never produces insights
pub struct NoRemote;

impl InsightProvider for NoRemote {
    fn try_insight(&self, _prompt: &str, _sample: &Table) -> Option<String> {
        None
    }
}

/// Connection settings for a remote inference endpoint.
///
/// Credentials are supplied by the caller's configuration; nothing is
/// embedded in the library.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl RemoteConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

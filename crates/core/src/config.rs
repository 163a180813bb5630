//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at
//! process startup and then passed into core services. The core itself
//! never reads process-wide environment variables; whoever hosts it (the
//! runner binary, a test harness) resolves the environment into a
//! [`CoreConfig`] and hands it over.
//!
//! The one decision configuration carries today is which submission
//! backend runs: the deterministic mock or the real HTTP client. Keeping
//! that a configuration value rather than a code path is what makes the
//! mock honestly replaceable.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::submission::backend::{MockBackend, MockLatency, SubmissionBackend};
use crate::submission::remote::RemoteBackend;

/// Which submission backend a process runs.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendChoice {
    /// The deterministic fake, with its simulated latency profile.
    Mock(MockLatency),
    /// The real HTTP client, targeting the given API base URL.
    Remote { base_url: String },
}

/// Core configuration resolved at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    backend: BackendChoice,
}

impl CoreConfig {
    /// Creates a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when a remote choice carries an
    /// empty base URL. Full URL validation happens when the backend is
    /// built; this check only catches configuration that cannot possibly
    /// be intended.
    pub fn new(backend: BackendChoice) -> CoreResult<Self> {
        if let BackendChoice::Remote { base_url } = &backend {
            if base_url.trim().is_empty() {
                return Err(CoreError::validation("base_url", "cannot be empty"));
            }
        }

        Ok(Self { backend })
    }

    /// Configuration running the mock backend with its default latency.
    pub fn mock() -> Self {
        Self {
            backend: BackendChoice::Mock(MockLatency::default()),
        }
    }

    /// Configuration running the real backend against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when `base_url` is empty.
    pub fn remote(base_url: impl Into<String>) -> CoreResult<Self> {
        Self::new(BackendChoice::Remote {
            base_url: base_url.into(),
        })
    }

    /// The configured backend choice.
    pub fn backend(&self) -> &BackendChoice {
        &self.backend
    }

    /// Builds the configured submission backend.
    ///
    /// # Errors
    ///
    /// Propagates [`RemoteBackend::new`] failures (malformed base URL,
    /// client construction).
    pub fn build_backend(&self) -> CoreResult<Arc<dyn SubmissionBackend>> {
        match &self.backend {
            BackendChoice::Mock(latency) => {
                tracing::debug!("submission backend: mock");
                Ok(Arc::new(MockBackend::with_latency(*latency)))
            }
            BackendChoice::Remote { base_url } => {
                let backend = RemoteBackend::new(base_url)?;
                tracing::debug!(base_url = backend.base_url(), "submission backend: remote");
                Ok(Arc::new(backend))
            }
        }
    }
}

impl Default for CoreConfig {
    /// The mock backend is the default until the platform API is live.
    fn default() -> Self {
        Self::mock()
    }
}

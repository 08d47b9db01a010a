//! Application state shared by all handlers.
//!
//! AppState is generic over the gateway port so tests can substitute an
//! in-memory fake; the binary pins it to the concrete infra implementation
//! via a type alias.

use std::sync::Arc;

use solace_core::gateway::ChatGateway;
use solace_infra::config::AppConfig;
use solace_infra::gateway::OllamaGateway;

/// Concrete state used by the server binary.
pub type ConcreteAppState = AppState<OllamaGateway>;

/// Shared application state: the gateway client and the resolved
/// configuration. Both are read-only after startup, so concurrent requests
/// need no synchronization.
pub struct AppState<G: ChatGateway> {
    pub gateway: Arc<G>,
    pub config: Arc<AppConfig>,
}

// Derived Clone would require G: Clone; the Arc fields clone regardless.
impl<G: ChatGateway> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            config: Arc::clone(&self.config),
        }
    }
}

impl<G: ChatGateway> AppState<G> {
    pub fn new(gateway: G, config: AppConfig) -> Self {
        Self {
            gateway: Arc::new(gateway),
            config: Arc::new(config),
        }
    }
}

impl ConcreteAppState {
    /// Wire the concrete state from configuration.
    pub fn from_config(config: AppConfig) -> Self {
        let gateway = OllamaGateway::from_config(&config);
        Self::new(gateway, config)
    }
}

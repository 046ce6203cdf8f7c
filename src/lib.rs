//! Retreat planning client
//!
//! Typed REST actions, a normalized entity store and fetch-if-missing hooks for the
//! retreat planning dashboard and attendee site.

pub mod api;
pub mod config;
pub mod errors;
pub mod hooks;
pub mod models;
pub mod store;
pub mod telemetry;

use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use api::{ActionEvent, ApiClient};
use config::ClientConfig;
use errors::ClientResult;
use store::Store;

pub use errors::ClientError;
pub use hooks::{HookState, UseEntity};
pub use store::{ActionMeta, Relation};
pub use telemetry::init_tracing;

/// Capacity of the lifecycle event channel; slow subscribers miss the oldest events.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Client state shared by every consumer: transport, store and lifecycle events.
#[derive(Clone)]
pub struct Dashboard {
    api: Arc<ApiClient>,
    store: Arc<RwLock<Store>>,
    events: broadcast::Sender<ActionEvent>,
    config: Arc<ClientConfig>,
}

impl Dashboard {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let api = ApiClient::new(&config)?;
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        tracing::info!("API base URL: {}", config.api_url);
        tracing::info!("File server URL: {}", config.files_url);
        if config.api_token.is_none() {
            tracing::warn!("No API token configured (RETREAT_API_TOKEN). Requests are anonymous!");
        }

        Ok(Self {
            api: Arc::new(api),
            store: Arc::new(RwLock::new(Store::new())),
            events,
            config: Arc::new(config),
        })
    }

    /// Build from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// The shared store. Writers are the action layer; consumers should only read.
    pub fn store(&self) -> &Arc<RwLock<Store>> {
        &self.store
    }

    /// Lifecycle events for every action issued from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ActionEvent> {
        self.events.subscribe()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests;

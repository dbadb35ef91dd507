//! Shared application state.

use mongodb::{Client, Database};

/// Cloned into each router; the MongoDB handles share one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Client used by the readiness probe and closed on shutdown
    pub mongo_client: Client,
    /// Database holding the items collection
    pub db: Database,
}

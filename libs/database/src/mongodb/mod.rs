//! MongoDB connection management
//!
//! Connection setup with retry, configuration and a ping probe.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE, DEFAULT_URL, MongoConfig};
pub use connector::{connect_from_config, connect_from_config_with_retry};
pub use health::ping;

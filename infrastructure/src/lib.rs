pub mod config;
pub mod fireworks_client;

pub use config::{ApiKey, ClientConfig, ConfigError};
pub use fireworks_client::HttpTransport;

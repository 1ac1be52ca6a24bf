// src/config/mod.rs
// Central configuration for Atlas backend

pub mod helpers;
pub mod server;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref CONFIG: AtlasConfig = AtlasConfig::from_env();
}

/// Main configuration structure - composes all domain configs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasConfig {
    pub server: server::ServerConfig,
    pub logging: server::LoggingConfig,

    // Flat field aliases for convenience
    pub host: String,
    pub port: u16,
}

impl AtlasConfig {
    pub fn from_env() -> Self {
        // Load .env file
        dotenv::dotenv().ok(); // Don't panic if .env doesn't exist (for production)

        let server = server::ServerConfig::from_env();
        let logging = server::LoggingConfig::from_env();

        Self {
            // Flat field aliases
            host: server.host.clone(),
            port: server.port,

            // Domain configs
            server,
            logging,
        }
    }

    // Server
    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

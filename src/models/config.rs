//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::db::PoolOptions;
use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageLimits};

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    #[serde(default = "default_pool_max_size")]
    pub db_pool_max_size: u32,
    #[serde(default = "default_connection_timeout_secs")]
    pub db_connection_timeout_secs: u64,
    #[serde(default = "default_busy_timeout_ms")]
    pub db_busy_timeout_ms: u64,
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
    #[serde(default = "max_page_size")]
    pub max_page_size: i64,
}

fn default_pool_max_size() -> u32 {
    10
}

fn default_connection_timeout_secs() -> u64 {
    30
}

fn default_busy_timeout_ms() -> u64 {
    30_000
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn max_page_size() -> i64 {
    MAX_PAGE_SIZE
}

impl ServerConfig {
    pub fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_size: self.db_pool_max_size,
            connection_timeout: Duration::from_secs(self.db_connection_timeout_secs),
            busy_timeout: Duration::from_millis(self.db_busy_timeout_ms),
        }
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
        }
    }
}

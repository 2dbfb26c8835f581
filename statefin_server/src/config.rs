//! Environment configuration. `.env` files are loaded by the binary before
//! anything reads these variables.

use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the search engine cluster.
    pub es_host: String,
    /// Deployment environment suffix carried by every index name.
    pub api_env: String,
    /// Listen address, overridable with the `--bind` flag.
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Config {
        Config {
            es_host: env::var("ES_HOST").unwrap_or_else(|_| "http://localhost:9200".to_string()),
            api_env: env::var("API_ENV").unwrap_or_else(|_| "dev".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
        }
    }
}

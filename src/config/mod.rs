use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connection_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub index_path: PathBuf,
    /// Cap on text-pass results per query.
    pub max_results: usize,
    /// Queries shorter than this (in characters, after normalization)
    /// return no results at all.
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            index_path: "./data/index".into(),
            max_results: 20,
            min_query_len: 2,
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:./data/mikra.db".to_string());

        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "25".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid DATABASE_MAX_CONNECTIONS value".to_string()))?;

        let min_connections = std::env::var("DATABASE_MIN_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid DATABASE_MIN_CONNECTIONS value".to_string()))?;

        let connection_timeout_seconds = std::env::var("DATABASE_CONNECTION_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid DATABASE_CONNECTION_TIMEOUT value".to_string()))?;

        let idle_timeout_seconds = std::env::var("DATABASE_IDLE_TIMEOUT")
            .unwrap_or_else(|_| "600".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid DATABASE_IDLE_TIMEOUT value".to_string()))?;

        let index_path = std::env::var("INDEX_PATH")
            .unwrap_or_else(|_| "./data/index".to_string())
            .into();

        let max_results = std::env::var("SEARCH_MAX_RESULTS")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid SEARCH_MAX_RESULTS value".to_string()))?;

        let min_query_len = std::env::var("SEARCH_MIN_QUERY_LEN")
            .unwrap_or_else(|_| "2".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid SEARCH_MIN_QUERY_LEN value".to_string()))?;

        Ok(Settings {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
                min_connections,
                connection_timeout_seconds,
                idle_timeout_seconds,
            },
            search: SearchConfig {
                index_path,
                max_results,
                min_query_len,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.url.is_empty() {
            return Err(Error::Config("Database URL must not be empty".to_string()));
        }

        if self.search.max_results == 0 {
            return Err(Error::Config(
                "SEARCH_MAX_RESULTS must be non-zero".to_string(),
            ));
        }

        if self.search.min_query_len == 0 {
            return Err(Error::Config(
                "SEARCH_MIN_QUERY_LEN must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

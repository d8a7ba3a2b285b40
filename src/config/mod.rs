//! Configuration module for the hiring backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite store file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Seed demo jobs on first run
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("HIRING_DB_PATH")
            .unwrap_or_else(|_| "./data/hiring.sqlite".to_string())
            .into();

        let bind_addr = env::var("HIRING_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid HIRING_BIND_ADDR format");

        let log_level = env::var("HIRING_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_demo_data = env::var("HIRING_SEED_DEMO")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        Self {
            db_path,
            bind_addr,
            log_level,
            seed_demo_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("HIRING_DB_PATH");
        env::remove_var("HIRING_BIND_ADDR");
        env::remove_var("HIRING_LOG_LEVEL");
        env::remove_var("HIRING_SEED_DEMO");

        let config = Config::from_env();

        assert_eq!(config.db_path, PathBuf::from("./data/hiring.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_demo_data);
    }
}

use super::{parse_bool_env, parse_env_or};
use std::env;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma separated origins, or `*`
    pub cors_origins: String,
    /// Start from the fixture collections instead of empty ones
    pub seed_fixtures: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: "*".to_string(),
            seed_fixtures: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_env_or("PORT", defaults.port),
            cors_origins: env::var("CORS_ORIGINS").unwrap_or(defaults.cors_origins),
            seed_fixtures: parse_bool_env("SEED_FIXTURES", defaults.seed_fixtures),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

use once_cell::sync::OnceCell;
use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Identity provider tenant domain, e.g. "halos.us.auth0.com".
    pub domain: String,
    /// Audience the access token must be minted for.
    pub audience: String,
    pub jwks_cache_ttl_secs: u64,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig {
                port: parsed_var("PORT", 8080)?,
            },
            auth: AuthConfig {
                domain: required_var("AUTH0_DOMAIN")?,
                audience: required_var("API_AUDIENCE")?,
                jwks_cache_ttl_secs: parsed_var("JWKS_CACHE_TTL_SECS", 300)?,
            },
            database: DatabaseConfig {
                max_connections: parsed_var("DATABASE_MAX_CONNECTIONS", 10)?,
                connect_timeout_secs: parsed_var("DATABASE_CONNECT_TIMEOUT_SECS", 30)?,
            },
        })
    }
}

// Empty values count as missing: an empty tenant domain or audience can
// never verify a token.
fn required_var(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(key)),
    }
}

fn parsed_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(v) => v.parse().map_err(|_| ConfigError::Invalid { key, value: v }),
        Err(_) => Ok(default),
    }
}

// Global singleton config - initialized once at startup
static CONFIG: OnceCell<AppConfig> = OnceCell::new();

// Convenience function for accessing config
pub fn config() -> Result<&'static AppConfig, ConfigError> {
    CONFIG.get_or_try_init(AppConfig::from_env)
}

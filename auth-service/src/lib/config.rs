use std::env;

use auth::AuthConfig;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Raw token settings as found in the configuration sources.
///
/// Every field is optional; [`JwtConfig::resolve`] fills the gaps from
/// the fallback table in [`AuthConfig`]:
/// - `secret` -> `AuthConfig::DEFAULT_SECRET`
/// - `access_expire_secs` -> `AuthConfig::DEFAULT_ACCESS_EXPIRE_SECS`
/// - `refresh_expire_secs` -> `AuthConfig::DEFAULT_REFRESH_EXPIRE_SECS`
#[derive(Debug, Deserialize, Clone, Default)]
pub struct JwtConfig {
    pub secret: Option<String>,
    pub access_expire_secs: Option<i64>,
    pub refresh_expire_secs: Option<i64>,
}

impl JwtConfig {
    pub fn resolve(&self) -> AuthConfig {
        AuthConfig::resolve(
            self.secret.clone(),
            self.access_expire_secs,
            self.refresh_expire_secs,
        )
    }
}

impl Config {
    const DEFAULT_HTTP_PORT: i64 = 3000;

    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, DATABASE__URL, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("server.http_port", Self::DEFAULT_HTTP_PORT)?
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Self::environment())
            .build()?;

        configuration.try_deserialize()
    }

    /// Environment variables with `__` between path segments.
    ///
    /// Example: `JWT__SECRET=...` overrides `jwt.secret`. No prefix is used,
    /// an empty one would only match variables starting with `__`.
    fn environment() -> Environment {
        Environment::default().separator("__").try_parsing(true)
    }
}

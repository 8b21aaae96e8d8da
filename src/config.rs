/*
 * Responsibility
 * - Load settings from the environment (.env supported via dotenvy)
 * - Validate them once at startup (missing/invalid -> startup fails)
 * - The resulting Config is immutable and handed to app wiring explicitly
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use secrecy::Secret;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    // Auth provider (Supabase) endpoint and its service-role key.
    // The key grants account deletion and must never reach a caller.
    pub supabase_url: Url,
    pub service_role_key: Secret<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the process env in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let supabase_url = lookup("URL_FOR_SUPABASE")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("URL_FOR_SUPABASE"))?;
        let supabase_url =
            Url::parse(supabase_url.trim()).map_err(|_| ConfigError::Invalid("URL_FOR_SUPABASE"))?;
        if !matches!(supabase_url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid("URL_FOR_SUPABASE"));
        }

        let service_role_key = lookup("SERVICE_ROLE_KEY")
            .filter(|s| !s.trim().is_empty())
            .map(Secret::new)
            .ok_or(ConfigError::Missing("SERVICE_ROLE_KEY"))?;

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            supabase_url,
            service_role_key,
        })
    }
}

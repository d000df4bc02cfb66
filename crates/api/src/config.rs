use std::str::FromStr;

use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// Startup configuration failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Outbound provider settings.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Empty when unset; generation then fails as an upstream error.
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub weather_api_key: String,
    pub weather_base_url: String,
}

/// Per-client-IP quota on the `/api` tree.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Requests allowed per window (default: `100`).
    pub max_requests: u32,
    /// Window length in seconds (default: `900`).
    pub window_secs: u64,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection string. `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    pub providers: ProviderConfig,
    /// Upper bound for the `days` field of AI itinerary requests.
    pub ai_max_days: u32,
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                                     |
    /// |--------------------------|---------------------------------------------|
    /// | `HOST`                   | `0.0.0.0`                                   |
    /// | `PORT`                   | `5000`                                      |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`                     |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                                        |
    /// | `DATABASE_URL`           | unset (in-memory store)                     |
    /// | `DB_MAX_CONNECTIONS`     | `10`                                        |
    /// | `GEMINI_API_KEY`         | empty                                       |
    /// | `GEMINI_MODEL`           | `gemini-2.5-flash`                          |
    /// | `GEMINI_BASE_URL`        | `https://generativelanguage.googleapis.com` |
    /// | `WEATHER_API_KEY`        | empty                                       |
    /// | `WEATHER_BASE_URL`       | `https://api.openweathermap.org`            |
    /// | `AI_MAX_DAYS`            | `14`                                        |
    /// | `RATE_LIMIT_MAX`         | `100`                                       |
    /// | `RATE_LIMIT_WINDOW_SECS` | `900`                                       |
    ///
    /// JWT settings are read by [`JwtConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");
        let port = parse_env("PORT", 5000u16)?;

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: bad.clone(),
            });
        }

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30u64)?;
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());
        let db_max_connections = parse_env("DB_MAX_CONNECTIONS", 10u32)?;

        let providers = ProviderConfig {
            gemini_api_key: env_or("GEMINI_API_KEY", ""),
            gemini_model: env_or("GEMINI_MODEL", "gemini-2.5-flash"),
            gemini_base_url: env_or(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com",
            ),
            weather_api_key: env_or("WEATHER_API_KEY", ""),
            weather_base_url: env_or("WEATHER_BASE_URL", "https://api.openweathermap.org"),
        };

        let ai_max_days = positive(parse_env("AI_MAX_DAYS", 14u32)?, "AI_MAX_DAYS")?;
        let rate_limit = RateLimitConfig {
            max_requests: positive(parse_env("RATE_LIMIT_MAX", 100u32)?, "RATE_LIMIT_MAX")?,
            window_secs: positive(
                parse_env("RATE_LIMIT_WINDOW_SECS", 900u64)?,
                "RATE_LIMIT_WINDOW_SECS",
            )?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            db_max_connections,
            jwt: JwtConfig::from_env()?,
            providers,
            ai_max_days,
            rate_limit,
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

/// Reject a zero value for `var`.
fn positive<T>(value: T, var: &'static str) -> Result<T, ConfigError>
where
    T: Default + PartialEq + ToString,
{
    if value == T::default() {
        return Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Parse `var` when set, otherwise return `default`.
pub(crate) fn parse_env<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
        Err(_) => Ok(default),
    }
}

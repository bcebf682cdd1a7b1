/**
 * Server Configuration
 *
 * All runtime settings live in `ServerConfig`, which is built once at
 * startup and handed to the components that need it. Nothing reads the
 * environment after that.
 *
 * # Environment Variables
 *
 * - `DB_CONNECTION_STRING` (or `DATABASE_URL`) - sqlx connection string
 * - `JWT_SECRET` - token signing secret (required)
 * - `JWT_TTL_SECS` - token lifetime, default 3600
 * - `JWT_LEEWAY_SECS` - clock leeway when validating, default 0
 * - `BCRYPT_COST` - bcrypt work factor, default 12
 * - `PORT` - listen port, default 3000
 */

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://authgate.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TTL_SECS: i64 = 3600;

const MAX_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Token signing settings
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_secs: i64,
    pub leeway_secs: u64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("ttl_secs", &self.ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub bcrypt_cost: u32,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DB_CONNECTION_STRING")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let ttl_secs: i64 = parse_or(&lookup, "JWT_TTL_SECS", DEFAULT_TTL_SECS)?;
        if !(1..=MAX_TTL_SECS).contains(&ttl_secs) {
            return Err(invalid("JWT_TTL_SECS", ttl_secs));
        }

        let bcrypt_cost: u32 = parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(invalid("BCRYPT_COST", bcrypt_cost));
        }

        Ok(Self {
            database_url,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            bcrypt_cost,
            jwt: JwtConfig {
                secret,
                ttl_secs,
                leeway_secs: parse_or(&lookup, "JWT_LEEWAY_SECS", 0)?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key,
            value: raw,
        }),
    }
}

fn invalid(key: &'static str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded by `dotenvy`).

use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;

use anyhow::{Context, anyhow, bail};
use auth::AuthConfig;
use platform::crypto::from_base64;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// HMAC key for access and refresh tokens
    pub token_secret: [u8; 32],
    pub app_version: String,
    pub app_env: String,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub admin_emails: Vec<String>,
    /// Layer `require_admin` over `/api/admin`
    pub admin_routes_require_auth: bool,
    /// Mount `/api/debug`
    pub enable_debug_routes: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_map(vars: &HashMap<String, String>) -> anyhow::Result<Self> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| get(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").context("DATABASE_URL must be set")?;

        let token_secret = match get("TOKEN_SECRET") {
            Some(encoded) => decode_secret(&encoded)?,
            None if cfg!(debug_assertions) => {
                tracing::warn!("TOKEN_SECRET not set, using a random secret; tokens will not survive restart");
                platform::crypto::random_secret()
            }
            None => bail!("TOKEN_SECRET must be set in release builds"),
        };

        let app_env = get("APP_ENV").unwrap_or_else(|| "development".to_string());
        let app_version =
            get("APP_VERSION").unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins =
            split_list(&get("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string()));
        let admin_emails = split_list(&get("ADMIN_EMAILS").unwrap_or_default());

        let admin_routes_require_auth =
            parse_flag("ADMIN_ROUTES_REQUIRE_AUTH", get("ADMIN_ROUTES_REQUIRE_AUTH"), true)?;
        let enable_debug_routes = parse_flag(
            "ENABLE_DEBUG_ROUTES",
            get("ENABLE_DEBUG_ROUTES"),
            app_env != "production",
        )?;

        Ok(Self {
            database_url,
            token_secret,
            app_version,
            app_env,
            bind_addr,
            frontend_origins,
            admin_emails,
            admin_routes_require_auth,
            enable_debug_routes,
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            token_secret: self.token_secret,
            ..AuthConfig::default()
        }
        .with_admin_emails(&self.admin_emails)
    }
}

fn decode_secret(encoded: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = from_base64(encoded).context("TOKEN_SECRET must be base64")?;
    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow!("TOKEN_SECRET must decode to 32 bytes (got {})", bytes.len()))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_flag(name: &str, value: Option<String>, default: bool) -> anyhow::Result<bool> {
    match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(default),
        Some("true" | "1" | "yes" | "on") => Ok(true),
        Some("false" | "0" | "no" | "off") => Ok(false),
        Some(other) => bail!("{name} must be a boolean (got {other:?})"),
    }
}

use anyhow::Context as _;

use podium_core::tracing::LogFormat;

/// Conference service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ConferenceConfig {
    /// Database connection URL (PostgreSQL or SQLite). Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for session tokens. Env var: `SESSION_SECRET`.
    /// Only the HTTP server needs it.
    pub session_secret: Option<String>,
    /// TCP port for the HTTP server (default 3000). Env var: `CONFERENCE_PORT`.
    pub conference_port: u16,
    /// `Domain` attribute for cookies. Env var: `COOKIE_DOMAIN`.
    pub cookie_domain: Option<String>,
    /// `Secure` attribute for cookies (default false). Env var: `COOKIE_SECURE`.
    pub cookie_secure: bool,
    /// Apply pending migrations at startup (default true). Env var: `RUN_MIGRATIONS`.
    pub run_migrations: bool,
    /// `json` (default) or `pretty`. Env var: `LOG_FORMAT`.
    pub log_format: LogFormat,
}

impl ConferenceConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            session_secret: non_empty_var("SESSION_SECRET"),
            conference_port: std::env::var("CONFERENCE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cookie_domain: non_empty_var("COOKIE_DOMAIN"),
            cookie_secure: flag_var("COOKIE_SECURE", false),
            run_migrations: flag_var("RUN_MIGRATIONS", true),
            log_format: match non_empty_var("LOG_FORMAT") {
                Some(v) => v.parse().map_err(anyhow::Error::msg)?,
                None => LogFormat::default(),
            },
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn flag_var(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

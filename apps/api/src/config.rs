use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on concurrently open editing sessions.
    pub max_sessions: usize,
    /// Sessions untouched for this many seconds are evicted.
    pub session_idle_secs: u64,
    pub cors_permissive: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_sessions = get("MAX_SESSIONS")
            .unwrap_or_else(|| "1000".to_string())
            .parse::<usize>()
            .context("MAX_SESSIONS must be a positive integer")?;
        if max_sessions == 0 {
            bail!("MAX_SESSIONS must be a positive integer");
        }

        let session_idle_secs = get("SESSION_IDLE_SECS")
            .unwrap_or_else(|| "3600".to_string())
            .parse::<u64>()
            .context("SESSION_IDLE_SECS must be a positive integer")?;
        if session_idle_secs == 0 {
            bail!("SESSION_IDLE_SECS must be a positive integer");
        }

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_sessions,
            session_idle_secs,
            cors_permissive: get("CORS_PERMISSIVE")
                .unwrap_or_else(|| "true".to_string())
                .parse::<bool>()
                .context("CORS_PERMISSIVE must be 'true' or 'false'")?,
        })
    }
}

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            // Single static secret shared by every deployment stage; kept
            // out of source but not rotated or validated anywhere.
            secret: std::env::var("JWT_SECRET")?,
            ttl_minutes: ttl_minutes_from(std::env::var("JWT_TTL_MINUTES").ok()),
        };
        Ok(Self { database_url, jwt })
    }
}

/// Token lifetime in minutes. Must be a non-negative integer; anything
/// else (including a negative value) is rejected with a warning and the
/// one-hour default applies.
fn ttl_minutes_from(raw: Option<String>) -> u64 {
    match raw {
        Some(v) => match v.parse::<u64>() {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(error = %e, value = %v, "invalid JWT_TTL_MINUTES; using 60");
                60
            }
        },
        None => 60,
    }
}

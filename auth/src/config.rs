use chrono::Duration;

/// Token signing settings, resolved once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub secret: String,
    pub access_expire: Duration,
    pub refresh_expire: Duration,
}

impl AuthConfig {
    /// Fallback signing secret. Only suitable for local development.
    pub const DEFAULT_SECRET: &'static str = "change-me-jwt-secret-at-least-32-bytes";
    /// Fallback access token lifetime (15 minutes).
    pub const DEFAULT_ACCESS_EXPIRE_SECS: i64 = 15 * 60;
    /// Fallback refresh token lifetime (7 days).
    pub const DEFAULT_REFRESH_EXPIRE_SECS: i64 = 7 * 24 * 60 * 60;

    pub fn new(secret: impl Into<String>, access_expire: Duration, refresh_expire: Duration) -> Self {
        Self {
            secret: secret.into(),
            access_expire,
            refresh_expire,
        }
    }

    /// Resolve each field from an optional override, falling back per field.
    ///
    /// # Arguments
    /// * `secret` - Configured secret; empty or absent uses `DEFAULT_SECRET`
    /// * `access_expire_secs` - Configured access TTL; absent, non-positive or out of range uses the default
    /// * `refresh_expire_secs` - Configured refresh TTL; absent, non-positive or out of range uses the default
    pub fn resolve(
        secret: Option<String>,
        access_expire_secs: Option<i64>,
        refresh_expire_secs: Option<i64>,
    ) -> Self {
        let secret = match secret.filter(|s| !s.trim().is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("No JWT secret configured, using the built-in development secret");
                Self::DEFAULT_SECRET.to_string()
            }
        };

        Self {
            secret,
            access_expire: resolve_ttl(
                "access",
                access_expire_secs,
                Self::DEFAULT_ACCESS_EXPIRE_SECS,
            ),
            refresh_expire: resolve_ttl(
                "refresh",
                refresh_expire_secs,
                Self::DEFAULT_REFRESH_EXPIRE_SECS,
            ),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}

fn resolve_ttl(name: &str, configured: Option<i64>, fallback: i64) -> Duration {
    match configured {
        Some(secs) if secs > 0 => match Duration::try_seconds(secs) {
            Some(ttl) => ttl,
            None => {
                tracing::warn!(
                    token_type = name,
                    configured = secs,
                    fallback,
                    "Ignoring out of range token lifetime"
                );
                Duration::seconds(fallback)
            }
        },
        Some(secs) => {
            tracing::warn!(
                token_type = name,
                configured = secs,
                fallback,
                "Ignoring non-positive token lifetime"
            );
            Duration::seconds(fallback)
        }
        None => {
            tracing::debug!(token_type = name, fallback, "Using default token lifetime");
            Duration::seconds(fallback)
        }
    }
}

use std::env;
use std::time::Duration;

/// Identity fields echoed back in every successful classification response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserInfo {
    pub full_name: String,
    pub birth_date: String,
    pub email: String,
    pub roll_number: String,
}

impl UserInfo {
    pub fn user_id(&self) -> String {
        format!("{}_{}", self.full_name, self.birth_date)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub user: UserInfo,
    pub cors_allowed_origins: Vec<String>,
    /// "development" exposes error details in 500 responses
    pub app_env: String,
    pub rate_limit_max: u32,
    pub rate_limit_window: Duration,
    /// Cap on distinct clients the limiter tracks at once
    pub rate_limit_max_clients: usize,
    /// Key the limiter on `X-Forwarded-For` (only behind a trusted proxy)
    pub trust_proxy: bool,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string_or =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            host: string_or("HOST", "0.0.0.0"),
            port: lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(3000),
            user: UserInfo {
                full_name: string_or("USER_FULL_NAME", "john_doe"),
                birth_date: string_or("USER_BIRTH_DATE", "17091999"),
                email: string_or("USER_EMAIL", "john@xyz.com"),
                roll_number: string_or("USER_ROLL_NUMBER", "ABCD123"),
            },
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            app_env: string_or("APP_ENV", "production"),
            rate_limit_max: lookup("RATE_LIMIT_MAX")
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            rate_limit_window: Duration::from_secs(
                lookup("RATE_LIMIT_WINDOW_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(15 * 60),
            ),
            rate_limit_max_clients: lookup("RATE_LIMIT_MAX_CLIENTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            trust_proxy: lookup("TRUST_PROXY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10 * 1024),
        }
    }

    pub fn is_development(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("development")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

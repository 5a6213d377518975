//! Fixed-window, per-client request limiting for the classification endpoint

use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts, Json},
    http::{StatusCode, request::Parts},
};
use dashmap::DashMap;
use serde_json::json;

use crate::infrastructure::AppState;

/// Upper bound on how often a full sweep of expired windows may run
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    /// Tracked clients never exceed this; unseen clients are refused while full
    max_clients: usize,
    sweep_interval: Duration,
    last_sweep: Mutex<Option<Instant>>,
    clients: DashMap<String, Window>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration, max_clients: usize) -> Self {
        Self {
            max_requests,
            window,
            max_clients,
            sweep_interval: window.min(MAX_SWEEP_INTERVAL),
            last_sweep: Mutex::new(None),
            clients: DashMap::new(),
        }
    }

    /// Record one request for `client` and report whether it is within quota
    pub fn check(&self, client: &str, now: Instant) -> bool {
        if !self.clients.contains_key(client) && self.clients.len() >= self.max_clients {
            self.sweep_if_due(now);
            if self.clients.len() >= self.max_clients {
                tracing::warn!(
                    "Rate limiter full ({} clients), refusing new client {}",
                    self.max_clients,
                    client
                );
                return false;
            }
        }

        let mut entry = self.clients.entry(client.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });
        if now.saturating_duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }
        entry.count = entry.count.saturating_add(1);
        entry.count <= self.max_requests
    }

    /// Drop expired windows, at most once per `sweep_interval`
    fn sweep_if_due(&self, now: Instant) -> bool {
        {
            let mut last = self
                .last_sweep
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let recently_swept =
                last.is_some_and(|at| now.saturating_duration_since(at) < self.sweep_interval);
            if recently_swept {
                return false;
            }
            *last = Some(now);
        }

        let window = self.window;
        self.clients
            .retain(|_, w| now.saturating_duration_since(w.started) < window);
        true
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.clients.len()
    }
}

/// Client address used as the quota key.
///
/// The first `X-Forwarded-For` hop is only honoured when `trust_proxy` is set;
/// otherwise the socket peer is used.
pub fn client_key(parts: &Parts, trust_proxy: bool) -> String {
    let forwarded = parts
        .headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split(',').next())
        .map(str::trim)
        .filter(|h| trust_proxy && !h.is_empty());
    if let Some(forwarded) = forwarded {
        return forwarded.to_string();
    }

    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Extractor that consumes one unit of the caller's quota
#[derive(Debug)]
pub struct ClientQuota {
    pub client: String,
}

#[async_trait]
impl FromRequestParts<AppState> for ClientQuota {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let client = client_key(parts, state.config.trust_proxy);
        if state.rate_limiter.check(&client, Instant::now()) {
            Ok(ClientQuota { client })
        } else {
            tracing::warn!("Rate limit exceeded for client {}", client);
            Err((
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({
                    "is_success": false,
                    "error": "Too many requests, please try again later."
                })),
            ))
        }
    }
}

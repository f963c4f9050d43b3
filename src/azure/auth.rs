//! ARM Authentication
//!
//! Token acquisition is pluggable: anything that can produce a bearer token
//! for the Resource Manager audience implements [`TokenProvider`]. The
//! [`Credentials`] wrapper adds expiry-buffered caching so repeated reads
//! do not hammer the provider.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// OAuth2 scope for Resource Manager API access
pub const DEFAULT_SCOPE: &str = "https://management.azure.com/.default";

/// Token expiry buffer - refresh tokens this much before they actually expire
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Default token TTL if the provider reports none (conservative: 30 minutes)
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Source of bearer tokens for ARM calls
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Produce a token valid for the given scope, and its remaining lifetime
    /// if known.
    async fn token(&self, scope: &str) -> Result<(String, Option<Duration>)>;
}

/// Provider that always returns a fixed token.
///
/// Covers tokens obtained out of band (`az account get-access-token`) and
/// mocked servers in tests.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self, _scope: &str) -> Result<(String, Option<Duration>)> {
        Ok((self.token.clone(), None))
    }
}

/// Credentials holder with token caching
#[derive(Clone)]
pub struct Credentials {
    provider: Arc<dyn TokenProvider>,
    token_cache: Arc<RwLock<Option<CachedToken>>>,
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    /// When this token expires (with buffer applied)
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

impl Credentials {
    pub fn new(provider: impl TokenProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
            token_cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Get an access token for API calls, refreshing when the cached one is
    /// expired or about to expire.
    pub async fn get_token(&self) -> Result<String> {
        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("Cached token expired, fetching new token");
            }
        }

        let (token, ttl) = self
            .provider
            .token(DEFAULT_SCOPE)
            .await
            .context("Failed to get access token")?;

        let ttl = ttl.unwrap_or(DEFAULT_TOKEN_TTL);
        let expires_at = Instant::now() + ttl.saturating_sub(TOKEN_EXPIRY_BUFFER);

        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                token: token.clone(),
                expires_at,
            });
        }

        tracing::debug!(
            "New token cached, expires in ~{} minutes",
            ttl.saturating_sub(TOKEN_EXPIRY_BUFFER).as_secs() / 60
        );

        Ok(token)
    }

    /// Force refresh the token
    pub async fn refresh_token(&self) -> Result<String> {
        {
            let mut cache = self.token_cache.write().await;
            *cache = None;
        }

        self.get_token().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TokenProvider for CountingProvider {
        async fn token(&self, _scope: &str) -> Result<(String, Option<Duration>)> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok((format!("token-{}", n), Some(Duration::from_secs(3600))))
        }
    }

    #[tokio::test]
    async fn token_is_cached_between_calls() {
        let calls = Arc::new(AtomicUsize::new(0));
        let credentials = Credentials::new(CountingProvider {
            calls: calls.clone(),
        });

        let first = credentials.get_token().await.unwrap();
        let second = credentials.get_token().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn refresh_bypasses_the_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let credentials = Credentials::new(CountingProvider {
            calls: calls.clone(),
        });

        let first = credentials.get_token().await.unwrap();
        let refreshed = credentials.refresh_token().await.unwrap();

        assert_ne!(first, refreshed);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn static_provider_returns_its_token() {
        let credentials = Credentials::new(StaticTokenProvider::new("fixed"));
        assert_eq!(credentials.get_token().await.unwrap(), "fixed");
    }
}

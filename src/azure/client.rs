//! Elastic pools client
//!
//! Combines credentials, configuration, and the HTTP wrapper into the one
//! operation this crate needs: fetching a single elastic pool.

use super::auth::Credentials;
use super::http::{ApiFailure, ArmHttpClient};
use super::models::ElasticPool;
use crate::config::Config;
use anyhow::{Context, Result};
use url::Url;

/// Client for the Microsoft.Sql elastic pools API surface
#[derive(Clone)]
pub struct ElasticPoolsClient {
    pub config: Config,
    pub credentials: Credentials,
    http: ArmHttpClient,
}

impl std::fmt::Debug for ElasticPoolsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticPoolsClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ElasticPoolsClient {
    /// Create a new client. Fails if no subscription is configured, the
    /// endpoint is not a valid URL, or the HTTP client cannot be built.
    pub fn new(config: Config, credentials: Credentials) -> Result<Self> {
        // An empty subscription would produce /subscriptions// URLs that ARM
        // answers with a 404, misdiagnosing the pool as missing
        if config.effective_subscription().is_empty() {
            anyhow::bail!(
                "No subscription ID configured; set it explicitly or via AZURE_SUBSCRIPTION_ID"
            );
        }

        Url::parse(&config.effective_endpoint())
            .context("Invalid Resource Manager endpoint")?;

        let http = ArmHttpClient::new(config.effective_timeout())?;

        Ok(Self {
            config,
            credentials,
            http,
        })
    }

    /// Build the ARM URL addressing one elastic pool.
    ///
    /// Path parameters are passed through verbatim; ARM resource names do
    /// not require percent-encoding.
    pub fn elastic_pool_url(&self, resource_group: &str, server: &str, pool: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Sql/servers/{}/elasticPools/{}?api-version={}",
            self.config.effective_endpoint(),
            self.config.effective_subscription(),
            resource_group,
            server,
            pool,
            self.config.effective_api_version(),
        )
    }

    /// Fetch one elastic pool.
    ///
    /// Returns [`ApiFailure::NotFound`] when the pool (or any parent in its
    /// path) does not exist, and [`ApiFailure::Other`] for every other
    /// transport or decoding failure.
    pub async fn get(
        &self,
        resource_group: &str,
        server: &str,
        pool: &str,
    ) -> Result<ElasticPool, ApiFailure> {
        let token = self
            .credentials
            .get_token()
            .await
            .map_err(ApiFailure::Other)?;

        let url = self.elastic_pool_url(resource_group, server, pool);
        let body = self.http.get(&url, &token).await?;

        serde_json::from_value(body)
            .context("Failed to decode elastic pool response")
            .map_err(ApiFailure::Other)
    }
}

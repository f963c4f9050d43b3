//! azpool - read-only Azure SQL elastic pool state
//!
//! This crate reads a single elastic pool from the Azure Resource Manager
//! API and projects the remote representation into a flat state record
//! suitable for declarative infrastructure tooling. It covers the
//! read/import path only; there is no create/update/delete surface.
//!
//! # Module Structure
//!
//! - [`azure`] - ARM client: authentication, HTTP, typed wire models
//! - [`datasource`] - schema descriptor and the read projector
//! - [`config`] - client configuration with environment fallbacks
//! - [`error`] - the `NotFound` / `RequestFailed` error taxonomy
//!
//! # Example
//!
//! ```ignore
//! use azpool::azure::auth::{Credentials, StaticTokenProvider};
//! use azpool::azure::client::ElasticPoolsClient;
//! use azpool::config::Config;
//! use azpool::datasource::{read_pool, LookupKey};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let config = Config::from_env().with_subscription_id("0000-...");
//!     let credentials = Credentials::new(StaticTokenProvider::new("token"));
//!     let client = ElasticPoolsClient::new(config, credentials)?;
//!
//!     let key = LookupKey::new("my-pool", "my-rg", "my-server")?;
//!     let state = read_pool(&client, &key).await?;
//!     println!("{:?} GB max", state.max_size_gb);
//!     Ok(())
//! }
//! ```

pub mod azure;
pub mod config;
pub mod datasource;
pub mod error;

pub use config::Config;
pub use datasource::{read_pool, LookupKey, PoolState};
pub use error::ReadError;

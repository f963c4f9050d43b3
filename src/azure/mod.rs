//! Azure Resource Manager interaction module
//!
//! Provides the pieces needed to read Microsoft.Sql elastic pools over the
//! ARM REST API: authentication, an HTTP wrapper, URL building, and the
//! typed wire models.
//!
//! # Module Structure
//!
//! - [`auth`] - token acquisition with expiry-buffered caching
//! - [`client`] - the elastic pools client (URL building + typed GET)
//! - [`http`] - HTTP utilities for ARM REST calls
//! - [`models`] - serde models of the elastic pool wire representation
//! - [`location`] - region-name normalization

pub mod auth;
pub mod client;
pub mod http;
pub mod location;
pub mod models;

//! Wire models for the Microsoft.Sql elastic pool resource
//!
//! These mirror the ARM JSON shape. Every sub-structure the service may
//! omit is an `Option`; absence is normal, not an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An elastic pool as returned by
/// `GET .../servers/{server}/elasticPools/{pool}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElasticPool {
    /// Fully qualified ARM resource ID (may be absent on some responses)
    #[serde(default)]
    pub id: Option<String>,
    /// Display form of the Azure region, e.g. `"East US"`
    #[serde(default)]
    pub location: Option<String>,
    /// Resource tags; ARM omits the field when no tags are set
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// The pool's property bag
    #[serde(default)]
    pub properties: Option<ElasticPoolProperties>,
}

/// Property bag of an elastic pool
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElasticPoolProperties {
    /// Storage limit of the pool in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size_bytes: Option<i64>,
    /// Whether replicas are spread across availability zones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_redundant: Option<bool>,
    /// Per-database capacity floor/ceiling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_database_settings: Option<PerDatabaseSettings>,
}

/// Capacity bounds each database in the pool is guaranteed/capped at.
///
/// vCore capacities can be fractional (0.25, 0.5), so these are floats on
/// the wire even though the projected schema declares integers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerDatabaseSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<f64>,
}

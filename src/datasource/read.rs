//! Read projector
//!
//! One remote fetch, then a field-by-field copy of the snapshot into the
//! flat output record. Absent sub-structures leave their output fields
//! unset; any fetch failure aborts the read with no record at all.

use crate::azure::client::ElasticPoolsClient;
use crate::azure::http::ApiFailure;
use crate::azure::location::normalize_location;
use crate::azure::models::ElasticPool;
use crate::error::ReadError;
use std::collections::BTreeMap;

/// Bytes per gigabyte, the divisor behind `max_size_gb`
const BYTES_PER_GB: i64 = 1_073_741_824;

/// The tuple addressing one remote pool.
///
/// All three parts are required; construction is the boundary where
/// required-ness is enforced, so the projector itself never re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKey {
    name: String,
    resource_group_name: String,
    server_name: String,
}

impl LookupKey {
    /// Build a lookup key, rejecting empty components.
    pub fn new(name: &str, resource_group_name: &str, server_name: &str) -> Result<Self, ReadError> {
        if name.is_empty() {
            return Err(ReadError::InvalidKey("name"));
        }
        if resource_group_name.is_empty() {
            return Err(ReadError::InvalidKey("resource_group_name"));
        }
        if server_name.is_empty() {
            return Err(ReadError::InvalidKey("server_name"));
        }
        Ok(Self {
            name: name.to_string(),
            resource_group_name: resource_group_name.to_string(),
            server_name: server_name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resource_group_name(&self) -> &str {
        &self.resource_group_name
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }
}

/// The flattened pool state handed back to the caller.
///
/// Computed fields are `None` whenever the corresponding snapshot
/// sub-structure was absent remotely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PoolState {
    /// Fully qualified ARM resource ID
    pub id: Option<String>,
    /// Pool name, echoed from the lookup key
    pub name: String,
    /// Resource group, echoed from the lookup key
    pub resource_group_name: String,
    /// SQL server, echoed from the lookup key
    pub server_name: String,
    /// Normalized region name
    pub location: Option<String>,
    /// Resource tags, copied as-is
    pub tags: BTreeMap<String, String>,
    /// Storage limit in bytes
    pub max_size_bytes: Option<i64>,
    /// Storage limit in whole gigabytes
    pub max_size_gb: Option<f64>,
    /// Zone redundancy flag
    pub zone_redundant: Option<bool>,
    /// Per-database capacity floor
    pub per_db_min_capacity: Option<i64>,
    /// Per-database capacity ceiling
    pub per_db_max_capacity: Option<i64>,
}

/// Read one elastic pool and project it into a [`PoolState`].
///
/// Exactly one remote fetch; no retries, no caching, no partial output.
/// Dropping the returned future cancels the in-flight request.
pub async fn read_pool(
    client: &ElasticPoolsClient,
    key: &LookupKey,
) -> Result<PoolState, ReadError> {
    let snapshot = client
        .get(key.resource_group_name(), key.server_name(), key.name())
        .await
        .map_err(|failure| match failure {
            ApiFailure::NotFound => ReadError::NotFound {
                pool: key.name().to_string(),
                resource_group: key.resource_group_name().to_string(),
                server: key.server_name().to_string(),
            },
            ApiFailure::Other(source) => ReadError::RequestFailed {
                pool: key.name().to_string(),
                resource_group: key.resource_group_name().to_string(),
                server: key.server_name().to_string(),
                source,
            },
        })?;

    Ok(project(snapshot, key))
}

/// Map a snapshot onto the output record. Pure; split out so the
/// conditional field mapping is testable without a server.
fn project(snapshot: ElasticPool, key: &LookupKey) -> PoolState {
    let mut state = PoolState {
        name: key.name().to_string(),
        resource_group_name: key.resource_group_name().to_string(),
        server_name: key.server_name().to_string(),
        ..PoolState::default()
    };

    if let Some(id) = snapshot.id {
        state.id = Some(id);
    }

    if let Some(location) = snapshot.location {
        state.location = Some(normalize_location(&location));
    }

    state.tags = flatten_tags(snapshot.tags);

    if let Some(props) = snapshot.properties {
        if let Some(bytes) = props.max_size_bytes {
            state.max_size_bytes = Some(bytes);
            state.max_size_gb = Some(max_size_gb(bytes));
        }
        state.zone_redundant = props.zone_redundant;

        if let Some(per_db) = props.per_database_settings {
            state.per_db_min_capacity = per_db.min_capacity.map(|c| c as i64);
            state.per_db_max_capacity = per_db.max_capacity.map(|c| c as i64);
        }
    }

    state
}

/// Derive whole gigabytes from a byte count.
///
/// Integer division first, float conversion second: 5368709119 bytes is
/// 4.0 GB here, not 4.999... GB.
fn max_size_gb(max_size_bytes: i64) -> f64 {
    (max_size_bytes / BYTES_PER_GB) as f64
}

/// Copy the remote tag mapping into the output attribute
fn flatten_tags(tags: BTreeMap<String, String>) -> BTreeMap<String, String> {
    tags
}

//! Data-source layer
//!
//! Projects the remote elastic pool representation into the flat record a
//! declarative engine consumes.
//!
//! - [`schema`] - the fixed attribute table (names, kinds, required/computed)
//! - [`read`] - the read projector: lookup key in, pool state out

pub mod read;
pub mod schema;

pub use read::{read_pool, LookupKey, PoolState};
pub use schema::{attribute, attributes, AttrKind, AttributeDef, Classification};

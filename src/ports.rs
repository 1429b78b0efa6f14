//! Collaborator ports - the two read interfaces the audit core depends on.
//!
//! Implementations are pluggable to allow dependency injection and testing;
//! `crate::snapshot` provides the file-backed one.

use anyhow::Result;

use crate::scope::{ScopeKind, Store, Website};
use crate::value::ConfigValue;

/// Read access to effective configuration values.
///
/// `value` returns the value visible at the given scope. Falling back to a
/// parent scope when a level has no own value is the store's
/// responsibility, not the caller's. `None` means no value is set anywhere.
pub trait ValueStore: Send + Sync {
    fn value(&self, key: &str, kind: ScopeKind, code: Option<&str>) -> Result<Option<ConfigValue>>;
}

/// Enumerates the active scope tree.
///
/// Order is whatever the directory provides and is treated as fixed for
/// one audit pass.
pub trait ScopeDirectory: Send + Sync {
    fn websites(&self) -> Result<Vec<Website>>;

    fn stores(&self) -> Result<Vec<Store>>;
}

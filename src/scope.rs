//! Scope model - the three levels of the configuration hierarchy.
//!
//! - `Default` scope: the global fallback, no scope code
//! - `Website` scope: one website, identified by its code
//! - `Store` scope: one store view inside a website

use serde::{Deserialize, Serialize};

/// The level a value is read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Default,
    Website,
    Store,
}

impl std::fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeKind::Default => write!(f, "default"),
            ScopeKind::Website => write!(f, "website"),
            ScopeKind::Store => write!(f, "store"),
        }
    }
}

/// A website record from the scope directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    pub id: u32,
    pub code: String,
    pub name: String,
}

/// A store view record from the scope directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: u32,
    pub website_id: u32,
    pub code: String,
    pub name: String,
}

/// Identifies where to read a value.
///
/// `Unknown` carries the kind tag of a malformed external descriptor; it
/// exists so an unrecognized scope degrades to a diagnostic instead of an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeLocator {
    Default,
    Website { code: String, name: String },
    Store { code: String, name: String },
    Unknown { kind: String },
}

impl ScopeLocator {
    pub fn website(website: &Website) -> Self {
        ScopeLocator::Website {
            code: website.code.clone(),
            name: website.name.clone(),
        }
    }

    pub fn store(store: &Store) -> Self {
        ScopeLocator::Store {
            code: store.code.clone(),
            name: store.name.clone(),
        }
    }

    /// Build a locator from an external `(kind, code, name)` descriptor.
    /// Unrecognized kinds are kept as `Unknown` rather than rejected.
    pub fn parse(kind: &str, code: &str, name: &str) -> Self {
        match kind {
            "default" => ScopeLocator::Default,
            "website" | "websites" => ScopeLocator::Website {
                code: code.to_string(),
                name: name.to_string(),
            },
            "store" | "stores" => ScopeLocator::Store {
                code: code.to_string(),
                name: name.to_string(),
            },
            other => ScopeLocator::Unknown {
                kind: other.to_string(),
            },
        }
    }

    /// Resolve to `(kind, code, scope phrase)`, or `None` for `Unknown`.
    ///
    /// The phrase is the human-readable suffix of a finding's display text.
    pub fn resolved(&self) -> Option<(ScopeKind, Option<&str>, String)> {
        match self {
            ScopeLocator::Default => {
                Some((ScopeKind::Default, None, "in Default Config".to_string()))
            }
            ScopeLocator::Website { code, name } => Some((
                ScopeKind::Website,
                Some(code.as_str()),
                format!("for website '{}'", name),
            )),
            ScopeLocator::Store { code, name } => Some((
                ScopeKind::Store,
                Some(code.as_str()),
                format!("for store '{}'", name),
            )),
            ScopeLocator::Unknown { .. } => None,
        }
    }
}

//! Snapshot-backed store and directory.
//!
//! A snapshot is a TOML dump of one deployment: the scope tree plus one
//! value table per scope. Scope tables are keyed `default`,
//! `websites/<code>` and `stores/<code>`:
//!
//! ```toml
//! [[websites]]
//! id = 1
//! code = "base"
//! name = "Main Website"
//!
//! [[stores]]
//! id = 1
//! website_id = 1
//! code = "default"
//! name = "Default Store View"
//!
//! [values.default]
//! "dev/js/merge_files" = true
//!
//! [values."stores/default"]
//! "dev/js/merge_files" = false
//! ```
//!
//! Reads implement the inheritance chain: a store falls back to its
//! website, then to default; a website falls back to default.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::error::{ScopecheckError, ScopecheckResult};
use crate::ports::{ScopeDirectory, ValueStore};
use crate::scope::{ScopeKind, Store, Website};
use crate::value::ConfigValue;

/// In-memory picture of a deployment's scope tree and values.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigSnapshot {
    #[serde(default)]
    websites: Vec<Website>,
    #[serde(default)]
    stores: Vec<Store>,
    #[serde(default)]
    values: BTreeMap<String, BTreeMap<String, ConfigValue>>,
}

impl ConfigSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a snapshot file.
    pub fn load(path: &Path) -> ScopecheckResult<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot: ConfigSnapshot =
            toml::from_str(&content).map_err(|e| ScopecheckError::Parse {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Every store must belong to a known website.
    pub fn validate(&self) -> ScopecheckResult<()> {
        for store in &self.stores {
            if !self.websites.iter().any(|w| w.id == store.website_id) {
                return Err(ScopecheckError::DanglingStore {
                    store: store.code.clone(),
                    website_id: store.website_id,
                });
            }
        }
        Ok(())
    }

    pub fn with_website(mut self, id: u32, code: &str, name: &str) -> Self {
        self.websites.push(Website {
            id,
            code: code.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_store(mut self, id: u32, website_id: u32, code: &str, name: &str) -> Self {
        self.stores.push(Store {
            id,
            website_id,
            code: code.to_string(),
            name: name.to_string(),
        });
        self
    }

    /// Set a value in a scope table (`default`, `websites/<code>`,
    /// `stores/<code>`).
    pub fn with_value(mut self, scope: &str, key: &str, value: impl Into<ConfigValue>) -> Self {
        self.values
            .entry(scope.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
        self
    }

    fn scope_value(&self, scope: &str, key: &str) -> Option<&ConfigValue> {
        self.values.get(scope).and_then(|table| table.get(key))
    }

    fn website_by_code(&self, code: &str) -> Option<&Website> {
        self.websites.iter().find(|w| w.code == code)
    }

    fn store_by_code(&self, code: &str) -> Option<&Store> {
        self.stores.iter().find(|s| s.code == code)
    }
}

impl ValueStore for ConfigSnapshot {
    fn value(&self, key: &str, kind: ScopeKind, code: Option<&str>) -> Result<Option<ConfigValue>> {
        match kind {
            ScopeKind::Default => Ok(self.scope_value("default", key).cloned()),
            ScopeKind::Website => {
                let code = code.ok_or(ScopecheckError::MissingScopeCode { kind })?;
                let website =
                    self.website_by_code(code)
                        .ok_or_else(|| ScopecheckError::UnknownScopeCode {
                            kind,
                            code: code.to_string(),
                        })?;
                Ok(self
                    .scope_value(&format!("websites/{}", website.code), key)
                    .or_else(|| self.scope_value("default", key))
                    .cloned())
            }
            ScopeKind::Store => {
                let code = code.ok_or(ScopecheckError::MissingScopeCode { kind })?;
                let store =
                    self.store_by_code(code)
                        .ok_or_else(|| ScopecheckError::UnknownScopeCode {
                            kind,
                            code: code.to_string(),
                        })?;
                let website = self.websites.iter().find(|w| w.id == store.website_id).ok_or(
                    ScopecheckError::DanglingStore {
                        store: store.code.clone(),
                        website_id: store.website_id,
                    },
                )?;
                Ok(self
                    .scope_value(&format!("stores/{}", store.code), key)
                    .or_else(|| self.scope_value(&format!("websites/{}", website.code), key))
                    .or_else(|| self.scope_value("default", key))
                    .cloned())
            }
        }
    }
}

impl ScopeDirectory for ConfigSnapshot {
    fn websites(&self) -> Result<Vec<Website>> {
        Ok(self.websites.clone())
    }

    fn stores(&self) -> Result<Vec<Store>> {
        Ok(self.stores.clone())
    }
}

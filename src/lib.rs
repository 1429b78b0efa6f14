//! Scopecheck - recommended-settings auditor for layered storefront
//! configuration
//!
//! Scopecheck walks a deployment's scope hierarchy (default config →
//! websites → store views), compares the effective value of each audited
//! setting against its recommendation, and reports mismatches with
//! remediation guidance.

pub mod audit;
pub mod dashboard;
pub mod error;
pub mod ports;
pub mod rules;
pub mod scope;
pub mod snapshot;
pub mod value;

// Re-exports for convenience
pub use audit::{Finding, HierarchyAuditor, Report, ScopeEvaluator, Status};
pub use dashboard::{Dashboard, DashboardRow};
pub use error::{ScopecheckError, ScopecheckResult};
pub use ports::{ScopeDirectory, ValueStore};
pub use rules::{builtin_rules, load_rules, ConfigRule, RuleWarning};
pub use scope::{ScopeKind, ScopeLocator, Store, Website};
pub use snapshot::ConfigSnapshot;
pub use value::{capitalize, loose_eq, show_value, ConfigValue};

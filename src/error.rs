//! Error types for scopecheck
//!
//! Uses `thiserror` for library errors; the command layer wraps them in
//! `anyhow` at the seams.

use std::path::PathBuf;
use thiserror::Error;

use crate::scope::ScopeKind;

/// Result type alias for scopecheck operations
pub type ScopecheckResult<T> = Result<T, ScopecheckError>;

/// Main error type for scopecheck operations
#[derive(Error, Debug)]
pub enum ScopecheckError {
    /// Rule file or snapshot file failed to parse
    #[error("failed to parse {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// A rule entry is missing required content
    #[error("invalid rule #{index} in {file}: {reason}")]
    InvalidRule {
        index: usize,
        file: PathBuf,
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Store record references a website that does not exist
    #[error("store '{store}' references unknown website id {website_id}")]
    DanglingStore { store: String, website_id: u32 },

    /// A scoped read used a code the directory does not know
    #[error("unknown {kind} code '{code}'")]
    UnknownScopeCode { kind: ScopeKind, code: String },

    /// Website/store reads need a scope code
    #[error("{kind} scope requires a scope code")]
    MissingScopeCode { kind: ScopeKind },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_invalid_rule() {
        let err = ScopecheckError::InvalidRule {
            index: 2,
            file: PathBuf::from("rules.toml"),
            reason: "empty key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid rule #2 in rules.toml: empty key"
        );
    }

    #[test]
    fn test_error_display_dangling_store() {
        let err = ScopecheckError::DanglingStore {
            store: "de".to_string(),
            website_id: 7,
        };
        assert_eq!(
            err.to_string(),
            "store 'de' references unknown website id 7"
        );
    }

    #[test]
    fn test_error_display_unknown_scope_code() {
        let err = ScopecheckError::UnknownScopeCode {
            kind: ScopeKind::Website,
            code: "emea".to_string(),
        };
        assert_eq!(err.to_string(), "unknown website code 'emea'");
    }
}

//! Rule catalog - which settings get audited and what they should be.
//!
//! A rule is one dashboard row: a title, a configuration key and the
//! recommended value. The built-in catalog covers the settings that most
//! often regress on production storefronts; a TOML file can replace it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ScopecheckError, ScopecheckResult};
use crate::value::ConfigValue;

/// One audit rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigRule {
    pub title: String,
    pub key: String,
    pub recommended: ConfigValue,
}

impl ConfigRule {
    pub fn new(title: &str, key: &str, recommended: impl Into<ConfigValue>) -> Self {
        Self {
            title: title.to_string(),
            key: key.to_string(),
            recommended: recommended.into(),
        }
    }
}

/// Non-fatal warning surfaced to CLI users when a rule file carries keys
/// the parser does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleWarning {
    pub key: String,
    pub file: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct RuleFile {
    #[serde(default, rename = "rule")]
    rules: Vec<ConfigRule>,
}

/// The default catalog.
pub fn builtin_rules() -> Vec<ConfigRule> {
    vec![
        ConfigRule::new("JavaScript file merging", "dev/js/merge_files", true),
        ConfigRule::new("JavaScript minifying", "dev/js/minify_files", true),
        ConfigRule::new("CSS file merging", "dev/css/merge_css_files", true),
        ConfigRule::new("CSS minifying", "dev/css/minify_files", true),
        ConfigRule::new("HTML minifying", "dev/template/minify_html", true),
        ConfigRule::new(
            "Asynchronous sending of sales emails",
            "sales_email/general/async_sending",
            true,
        ),
        ConfigRule::new(
            "Asynchronous order grid indexing",
            "dev/grid/async_indexing",
            true,
        ),
        ConfigRule::new("Debug logging", "dev/debug/debug_logging", false),
    ]
}

/// Load rules from a TOML file, collecting unknown-key warnings.
pub fn load_rules(path: &Path) -> ScopecheckResult<(Vec<ConfigRule>, Vec<RuleWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let file: RuleFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ScopecheckError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for (index, rule) in file.rules.iter().enumerate() {
        if rule.key.trim().is_empty() {
            return Err(ScopecheckError::InvalidRule {
                index,
                file: path.to_path_buf(),
                reason: "empty key".to_string(),
            });
        }
        if rule.title.trim().is_empty() {
            return Err(ScopecheckError::InvalidRule {
                index,
                file: path.to_path_buf(),
                reason: "empty title".to_string(),
            });
        }
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|key| RuleWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((file.rules, warnings))
}

/// Load from an explicit path, the user config dir, or the built-in
/// catalog, in that order.
pub fn load_or_builtin(
    explicit: Option<&Path>,
) -> ScopecheckResult<(Vec<ConfigRule>, Vec<RuleWarning>)> {
    if let Some(path) = explicit {
        return load_rules(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_rules = config_dir.join("scopecheck/rules.toml");
        if user_rules.exists() {
            return load_rules(&user_rules);
        }
    }

    Ok((builtin_rules(), Vec::new()))
}

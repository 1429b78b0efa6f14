//! Rules command - show the effective catalog

use std::path::Path;

use anyhow::Result;

use scopecheck::rules;

use crate::render;

pub fn cmd_rules(rules_path: Option<&Path>, json: bool) -> Result<()> {
    let (catalog, rule_warnings) = rules::load_or_builtin(rules_path)?;

    for warning in &rule_warnings {
        eprintln!(
            "warning: unknown key '{}' in {}",
            warning.key,
            warning.file.display()
        );
    }

    if json {
        let mut out = std::io::stdout().lock();
        for rule in &catalog {
            let _ = render::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "rule",
                    "title": rule.title,
                    "key": rule.key,
                    "recommended": rule.recommended,
                }),
            );
        }
        return Ok(());
    }

    for rule in &catalog {
        let recommended =
            serde_json::to_string(&rule.recommended).unwrap_or_else(|_| "?".to_string());
        println!("{} ({}): recommended {}", rule.title, rule.key, recommended);
    }

    Ok(())
}

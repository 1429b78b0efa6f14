//! Dashboard runner
//!
//! Runs the whole rule catalog against one store/directory pair and tallies
//! the outcome per severity.

use anyhow::Result;

use crate::audit::{HierarchyAuditor, Report, Status};
use crate::ports::{ScopeDirectory, ValueStore};
use crate::rules::ConfigRule;

/// One evaluated rule.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRow {
    pub title: String,
    pub key: String,
    pub report: Report,
}

/// Result of evaluating a rule catalog.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub rows: Vec<DashboardRow>,
    pub ok: usize,
    pub warnings: usize,
    pub problems: usize,
    pub unknown: usize,
}

impl Dashboard {
    /// No problems and no unknowns.
    pub fn is_success(&self) -> bool {
        self.problems == 0 && self.unknown == 0
    }

    /// Success with no warnings either.
    pub fn is_clean(&self) -> bool {
        self.is_success() && self.warnings == 0
    }

    /// Evaluate every rule in order.
    pub fn run(
        rules: &[ConfigRule],
        store: &dyn ValueStore,
        directory: &dyn ScopeDirectory,
    ) -> Result<Dashboard> {
        Self::run_with_callback(rules, store, directory, |_| {})
    }

    /// Evaluate every rule, invoking `on_row` as each row completes (for
    /// streaming UIs).
    pub fn run_with_callback(
        rules: &[ConfigRule],
        store: &dyn ValueStore,
        directory: &dyn ScopeDirectory,
        mut on_row: impl FnMut(&DashboardRow),
    ) -> Result<Dashboard> {
        let auditor = HierarchyAuditor::new(store, directory);
        let mut dashboard = Dashboard::default();

        for rule in rules {
            let report = auditor.aggregate(&rule.key, &rule.recommended)?;
            match report.status {
                Status::Ok => dashboard.ok += 1,
                Status::Warning => dashboard.warnings += 1,
                Status::Problem => dashboard.problems += 1,
                Status::Unknown => dashboard.unknown += 1,
            }

            let row = DashboardRow {
                title: rule.title.clone(),
                key: rule.key.clone(),
                report,
            };
            on_row(&row);
            dashboard.rows.push(row);
        }

        Ok(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ConfigRule;
    use crate::snapshot::ConfigSnapshot;

    fn snapshot() -> ConfigSnapshot {
        ConfigSnapshot::new()
            .with_website(1, "base", "Main Website")
            .with_store(1, 1, "default", "Default Store View")
            .with_value("default", "dev/js/merge_files", true)
            .with_value("default", "dev/debug/debug_logging", true)
    }

    fn rules() -> Vec<ConfigRule> {
        vec![
            ConfigRule::new("JavaScript file merging", "dev/js/merge_files", true),
            ConfigRule::new("Debug logging", "dev/debug/debug_logging", false),
        ]
    }

    #[test]
    fn counts_sum_to_rule_count() {
        let snap = snapshot();
        let dashboard = Dashboard::run(&rules(), &snap, &snap).unwrap();

        assert_eq!(dashboard.rows.len(), 2);
        assert_eq!(
            dashboard.ok + dashboard.warnings + dashboard.problems + dashboard.unknown,
            2
        );
        assert_eq!(dashboard.ok, 1);
        assert_eq!(dashboard.problems, 1);
        assert!(!dashboard.is_success());
    }

    #[test]
    fn success_when_everything_matches() {
        let snap = snapshot().with_value("default", "dev/debug/debug_logging", false);
        let dashboard = Dashboard::run(&rules(), &snap, &snap).unwrap();

        assert!(dashboard.is_success());
        assert!(dashboard.is_clean());
    }

    #[test]
    fn callback_fires_once_per_rule() {
        let snap = snapshot();
        let mut seen = Vec::new();

        let dashboard =
            Dashboard::run_with_callback(&rules(), &snap, &snap, |row| seen.push(row.key.clone()))
                .unwrap();

        assert_eq!(seen.len(), dashboard.rows.len());
        assert_eq!(seen, vec!["dev/js/merge_files", "dev/debug/debug_logging"]);
    }

    #[test]
    fn rows_keep_rule_order() {
        let snap = snapshot();
        let dashboard = Dashboard::run(&rules(), &snap, &snap).unwrap();
        assert_eq!(dashboard.rows[0].title, "JavaScript file merging");
        assert_eq!(dashboard.rows[1].title, "Debug logging");
    }
}

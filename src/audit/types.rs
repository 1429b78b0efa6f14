//! Audit result types

use crate::value::ConfigValue;

/// Severity of a finding. Discriminants are part of the JSON output
/// contract; ordering drives escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Ok = 0,
    Warning = 1,
    Problem = 2,
    Unknown = 3,
}

impl Status {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Stable lowercase name, used for NDJSON events.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Warning => "warning",
            Status::Problem => "problem",
            Status::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one key at one scope.
///
/// `action` is present exactly when the status is not `Ok`.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub status: Status,
    /// Value read from the store; absent when the scope was unrecognized.
    pub value: Option<ConfigValue>,
    /// "<Value> <scope phrase>", e.g. "Enabled in Default Config".
    pub display: String,
    /// "Switch to <Recommended> <scope phrase>".
    pub action: Option<String>,
}

/// Aggregated outcome for one key across the whole hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Highest severity observed during escalation.
    pub status: Status,
    /// Newline-joined display text of escalated findings, or the default
    /// scope's display text when nothing escalated.
    pub info: String,
    /// Newline-joined action text of escalated findings; empty when
    /// nothing escalated.
    pub action: String,
}

impl Report {
    pub fn info_lines(&self) -> impl Iterator<Item = &str> {
        self.info.lines()
    }

    pub fn action_lines(&self) -> impl Iterator<Item = &str> {
        self.action.lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_orders_by_severity() {
        assert!(Status::Ok < Status::Warning);
        assert!(Status::Warning < Status::Problem);
        assert!(Status::Problem < Status::Unknown);
    }

    #[test]
    fn status_discriminants_are_stable() {
        assert_eq!(Status::Ok.as_u8(), 0);
        assert_eq!(Status::Warning.as_u8(), 1);
        assert_eq!(Status::Problem.as_u8(), 2);
        assert_eq!(Status::Unknown.as_u8(), 3);
    }

    #[test]
    fn status_names() {
        assert_eq!(Status::Ok.to_string(), "ok");
        assert_eq!(Status::Problem.to_string(), "problem");
    }

    #[test]
    fn report_lines_split_on_newline() {
        let report = Report {
            status: Status::Problem,
            info: "a\nb".to_string(),
            action: String::new(),
        };
        assert_eq!(report.info_lines().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(report.action_lines().count(), 0);
    }
}

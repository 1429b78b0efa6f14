//! Hierarchy traversal and escalation

use anyhow::Result;

use crate::ports::{ScopeDirectory, ValueStore};
use crate::scope::ScopeLocator;
use crate::value::ConfigValue;

use super::evaluator::ScopeEvaluator;
use super::types::{Report, Status};

/// Audits one key across default → websites → stores.
///
/// Escalation is parent-relative: a website finding is surfaced when it is
/// strictly worse than the default finding, a store finding when it is
/// strictly worse than its own website's finding. A store matching its
/// website does not escalate even if a sibling website scored higher.
pub struct HierarchyAuditor<'a> {
    store: &'a dyn ValueStore,
    directory: &'a dyn ScopeDirectory,
}

impl<'a> HierarchyAuditor<'a> {
    pub fn new(store: &'a dyn ValueStore, directory: &'a dyn ScopeDirectory) -> Self {
        Self { store, directory }
    }

    /// Evaluate every scope and aggregate escalated findings into one
    /// report, in traversal order.
    pub fn aggregate(&self, key: &str, recommended: &ConfigValue) -> Result<Report> {
        let evaluator = ScopeEvaluator::new(self.store);

        let default = evaluator.evaluate(key, recommended, &ScopeLocator::Default)?;
        let mut status = default.status;
        let mut info: Vec<String> = Vec::new();
        let mut action: Vec<String> = Vec::new();

        if default.status > Status::Ok {
            info.push(default.display.clone());
            action.extend(default.action.clone());
        }

        let stores = self.directory.stores()?;
        for website in self.directory.websites()? {
            let website_finding =
                evaluator.evaluate(key, recommended, &ScopeLocator::website(&website))?;
            if website_finding.status > default.status {
                status = website_finding.status;
                info.push(website_finding.display.clone());
                action.extend(website_finding.action.clone());
            }

            for store in stores.iter().filter(|s| s.website_id == website.id) {
                let store_finding =
                    evaluator.evaluate(key, recommended, &ScopeLocator::store(store))?;
                if store_finding.status > website_finding.status {
                    status = store_finding.status;
                    info.push(store_finding.display);
                    action.extend(store_finding.action);
                }
            }
        }

        if status == Status::Ok {
            // Nothing escalated: the default finding is the whole story.
            Ok(Report {
                status,
                info: default.display,
                action: String::new(),
            })
        } else {
            Ok(Report {
                status,
                info: info.join("\n"),
                action: action.join("\n"),
            })
        }
    }
}

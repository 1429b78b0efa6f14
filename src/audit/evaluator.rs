//! Single-scope evaluation

use anyhow::Result;

use crate::ports::ValueStore;
use crate::scope::ScopeLocator;
use crate::value::{capitalize, loose_eq, show_value, ConfigValue};

use super::types::{Finding, Status};

/// Evaluates one configuration key at one scope.
pub struct ScopeEvaluator<'a> {
    store: &'a dyn ValueStore,
}

impl<'a> ScopeEvaluator<'a> {
    pub fn new(store: &'a dyn ValueStore) -> Self {
        Self { store }
    }

    /// Read the value at `locator` and compare it to `recommended`.
    ///
    /// An unrecognized locator produces a `Status::Unknown` finding rather
    /// than an error; a failing store read propagates.
    pub fn evaluate(
        &self,
        key: &str,
        recommended: &ConfigValue,
        locator: &ScopeLocator,
    ) -> Result<Finding> {
        let Some((kind, code, phrase)) = locator.resolved() else {
            return Ok(Finding {
                status: Status::Unknown,
                value: None,
                display: "Unknown scope".to_string(),
                action: None,
            });
        };

        let value = self
            .store
            .value(key, kind, code)?
            .unwrap_or(ConfigValue::Null);

        let display = format!("{} {}", capitalize(&show_value(&value, recommended)), phrase);

        if loose_eq(recommended, &value) {
            Ok(Finding {
                status: Status::Ok,
                value: Some(value),
                display,
                action: None,
            })
        } else {
            let action = format!(
                "Switch to {} {}",
                capitalize(&show_value(recommended, recommended)),
                phrase
            );
            Ok(Finding {
                status: Status::Problem,
                value: Some(value),
                display,
                action: Some(action),
            })
        }
    }
}

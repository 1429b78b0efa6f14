//! Configuration values and the coercive comparison used on them.
//!
//! Values read from a store and recommended values declared in rules share
//! one scalar model. Comparison is deliberately loose: recommended values
//! are often declared as booleans while stores persist strings, so `"1"`
//! must compare equal to `true`. The exact coercion table:
//!
//! - `Bool` vs anything: compare the bool against the other side's
//!   truthiness (`Null`, `false`, `0`, `0.0`, `""`, `"0"` and the empty
//!   list are falsy; everything else is truthy).
//! - `Null` vs anything else: equal iff the other side is falsy (an unset
//!   value behaves like `false`/`""`/`0`).
//! - `Int`/`Float` vs `Int`/`Float`: numeric comparison.
//! - `Str` vs `Int`/`Float`: equal iff the string parses as a number equal
//!   to it; non-numeric strings never equal numbers.
//! - `Str` vs `Str`: numeric comparison when both sides parse as numbers
//!   (`"1"` equals `"01"`), byte equality otherwise.
//! - `List` vs `List`: element-wise loose comparison, same length.
//!   `List` vs anything else: never equal.

use serde::{Deserialize, Serialize};

/// A scalar (or list) configuration value.
///
/// Variant order matters for untagged deserialization: `Int` must come
/// before `Float` so whole numbers keep their integer type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ConfigValue>),
    Null,
}

impl ConfigValue {
    /// Runtime type name, used by the unsupported-type display rule.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Int(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::Str(_) => "string",
            ConfigValue::List(_) => "array",
            ConfigValue::Null => "null",
        }
    }

    /// Coercive truthiness: `Null`, `false`, zero, `""`, `"0"` and the
    /// empty list are falsy.
    pub fn truthy(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => *b,
            ConfigValue::Int(i) => *i != 0,
            ConfigValue::Float(f) => *f != 0.0,
            ConfigValue::Str(s) => !s.is_empty() && s != "0",
            ConfigValue::List(v) => !v.is_empty(),
            ConfigValue::Null => false,
        }
    }

    /// Raw string form used when a string-typed recommendation asks for
    /// the value verbatim. `Null` renders empty, booleans the way stores
    /// persist them.
    pub fn raw_display(&self) -> String {
        match self {
            ConfigValue::Bool(true) => "1".to_string(),
            ConfigValue::Bool(false) => String::new(),
            ConfigValue::Int(i) => i.to_string(),
            ConfigValue::Float(f) => f.to_string(),
            ConfigValue::Str(s) => s.clone(),
            ConfigValue::List(v) => v
                .iter()
                .map(ConfigValue::raw_display)
                .collect::<Vec<_>>()
                .join(","),
            ConfigValue::Null => String::new(),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

fn as_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    // f64 parsing accepts "inf"/"NaN"; those are words, not config numbers.
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Loose, type-coercing equality per the table in the module docs.
/// Symmetric by construction.
pub fn loose_eq(a: &ConfigValue, b: &ConfigValue) -> bool {
    use ConfigValue::*;
    match (a, b) {
        (Bool(x), other) | (other, Bool(x)) => *x == other.truthy(),
        (Null, other) | (other, Null) => !other.truthy(),
        (List(x), List(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| loose_eq(a, b))
        }
        (List(_), _) | (_, List(_)) => false,
        (Str(x), Str(y)) => match (as_number(x), as_number(y)) {
            (Some(nx), Some(ny)) => nx == ny,
            _ => x == y,
        },
        (Int(x), Int(y)) => x == y,
        (Float(x), Float(y)) => x == y,
        (Int(x), Float(y)) | (Float(y), Int(x)) => *x as f64 == *y,
        (Str(s), Int(y)) | (Int(y), Str(s)) => as_number(s) == Some(*y as f64),
        (Str(s), Float(y)) | (Float(y), Str(s)) => as_number(s) == Some(*y),
    }
}

/// Format a value for display, keyed on the recommended value's type.
///
/// Boolean recommendations render as "enabled"/"disabled", string
/// recommendations show the stored value verbatim, and any other
/// recommendation type has no display rule. First-letter capitalization is
/// applied by the caller, not here.
pub fn show_value(value: &ConfigValue, hint: &ConfigValue) -> String {
    match hint {
        ConfigValue::Bool(_) => {
            let word = if value.truthy() { "enabled" } else { "disabled" };
            word.to_string()
        }
        ConfigValue::Str(_) => value.raw_display(),
        other => format!("Unsupported type: '{}'", other.type_name()),
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

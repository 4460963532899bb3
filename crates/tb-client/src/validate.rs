//! Structural validation of decoded response payloads.
//!
//! The registry's implicit response schema is never trusted. Each domain type
//! has a [`Shape`]: a table of field name to [`Rule`]. Validators are pure
//! functions over `serde_json::Value` returning every [`Violation`] found; an
//! empty list means the payload is well-formed.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::model::{CompatibilityType, SemanticVersion};

/// One structural problem in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Location in the payload: `$`, `$.id`, `$[1].version`.
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Predicate a single value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Whole number within `i64`.
    Int,
    Bool,
    NonEmptyString,
    /// Absent, `null`, or a string.
    OptionalString,
    /// String in `vMAJOR.MINOR.PATCH` form.
    SemanticVersion,
    /// String equal to one of the listed names.
    OneOf(&'static [&'static str]),
}

/// Field table describing an object payload.
pub type Shape = &'static [(&'static str, Rule)];

pub const SUBJECT: Shape = &[
    ("name", Rule::NonEmptyString),
    ("description", Rule::OptionalString),
];

pub const SCHEMA: Shape = &[
    ("id", Rule::Int),
    ("subject", Rule::NonEmptyString),
    ("version", Rule::SemanticVersion),
    ("schema", Rule::NonEmptyString),
];

pub const SCHEMA_ID: Shape = &[("id", Rule::Int)];

pub const REGISTRY_CONFIG: Shape = &[("compatibility", Rule::OneOf(CompatibilityType::NAMES))];

pub const COMPATIBILITY: Shape = &[("isCompatible", Rule::Bool)];

impl Rule {
    /// Check `value` (`None` when the field is absent) at `path`.
    fn check(self, value: Option<&Value>, path: &str) -> Option<Violation> {
        let value = match (self, value) {
            (Self::OptionalString, None | Some(Value::Null | Value::String(_))) => return None,
            (_, None) => return Some(Violation::new(path, "missing required field")),
            (_, Some(Value::Null)) => return Some(Violation::new(path, "must not be null")),
            (_, Some(value)) => value,
        };

        let problem = match self {
            Self::Int => value
                .as_number()
                .and_then(whole_number)
                .is_none()
                .then(|| format!("expected an integer, got {}", describe(value))),
            Self::Bool => (!value.is_boolean())
                .then(|| format!("expected a boolean, got {}", describe(value))),
            Self::NonEmptyString | Self::OptionalString => match value.as_str() {
                Some("") if self == Self::NonEmptyString => {
                    Some(String::from("expected a non-empty string"))
                }
                Some(_) => None,
                None => Some(format!("expected a string, got {}", describe(value))),
            },
            Self::SemanticVersion => match value.as_str() {
                Some(text) => SemanticVersion::parse(text).err().map(|e| e.to_string()),
                None => Some(format!(
                    "expected a semantic version string, got {}",
                    describe(value)
                )),
            },
            Self::OneOf(names) => match value.as_str() {
                Some(text) if names.contains(&text) => None,
                _ => Some(format!(
                    "expected one of {}, got {}",
                    names.join(", "),
                    describe(value)
                )),
            },
        };

        problem.map(|message| Violation::new(path, message))
    }
}

/// Accept only a whole number.
#[must_use]
pub fn validate_int(value: &Value) -> Vec<Violation> {
    Rule::Int.check(Some(value), "$").into_iter().collect()
}

/// Accept only a non-empty string.
#[must_use]
pub fn validate_non_empty_string(value: &Value) -> Vec<Violation> {
    Rule::NonEmptyString.check(Some(value), "$").into_iter().collect()
}

/// Accept only an array whose every element is a non-empty string.
#[must_use]
pub fn validate_string_array(value: &Value) -> Vec<Violation> {
    validate_each(value, Rule::NonEmptyString)
}

/// Accept an array whose every element satisfies `rule`.
///
/// Every failing element is reported, not just the first.
#[must_use]
pub fn validate_each(value: &Value, rule: Rule) -> Vec<Violation> {
    let Some(items) = value.as_array() else {
        return vec![not_an_array(value)];
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| rule.check(Some(item), &format!("$[{index}]")))
        .collect()
}

/// Validate an object payload against `shape`.
#[must_use]
pub fn validate_object(value: &Value, shape: Shape) -> Vec<Violation> {
    object_violations(value, shape, "$")
}

/// Accept an array of objects, each validated against `shape`.
///
/// Failures from all elements are aggregated into one list.
#[must_use]
pub fn validate_array(value: &Value, shape: Shape) -> Vec<Violation> {
    let Some(items) = value.as_array() else {
        return vec![not_an_array(value)];
    };
    items
        .iter()
        .enumerate()
        .flat_map(|(index, item)| object_violations(item, shape, &format!("$[{index}]")))
        .collect()
}

fn object_violations(value: &Value, shape: Shape, path: &str) -> Vec<Violation> {
    let Some(object) = value.as_object() else {
        return vec![Violation::new(
            path,
            format!("expected an object, got {}", describe(value)),
        )];
    };
    shape
        .iter()
        .filter_map(|(field, rule)| rule.check(object.get(*field), &format!("{path}.{field}")))
        .collect()
}

fn not_an_array(value: &Value) -> Violation {
    Violation::new("$", format!("expected an array, got {}", describe(value)))
}

/// Integer value of a JSON number that has no fractional part.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn whole_number(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(b) => format!("a boolean `{b}`"),
        Value::Number(n) => format!("a number `{n}`"),
        Value::String(s) => format!("a string `{s}`"),
        Value::Array(_) => String::from("an array"),
        Value::Object(_) => String::from("an object"),
    }
}

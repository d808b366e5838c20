//! Field condition builders and composite assembly
//!
//! Builders never fail: an absent value is a no-op and an unrecognised
//! operator token falls back to exact matching.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::types::{ConditionSet, FieldCondition, Predicate};

/// Operator token carried after `~` in a raw filter value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterOp {
    #[default]
    Eq,
    Like,
    In,
}

impl FilterOp {
    /// Parse an operator token. Unknown or missing tokens map to `Eq`.
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("like") | Some("contains") | Some("ilike") => Self::Like,
            Some("in") => Self::In,
            _ => Self::Eq,
        }
    }
}

/// Input for a single-value field condition
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryCondition<'a> {
    pub field: &'a str,
    pub operation: Option<&'a str>,
    pub value: Option<&'a str>,
    pub subfield: Option<&'a str>,
}

/// Input for a membership field condition.
///
/// `operation` is accepted for symmetry with [`QueryCondition`]; membership is
/// the only semantic this builder produces.
#[derive(Debug, Clone, Copy)]
pub struct ArrayQueryCondition<'a> {
    pub field: &'a str,
    pub operation: Option<&'a str>,
    pub values: &'a [String],
    pub subfield: Option<&'a str>,
}

/// Build an exact-match or substring condition for one field
pub fn build_query_condition(condition: QueryCondition<'_>) -> ConditionSet {
    let Some(value) = condition.value.filter(|v| !v.is_empty()) else {
        return ConditionSet::new();
    };

    let predicate = match FilterOp::from_token(condition.operation) {
        FilterOp::Like => Predicate::Contains(value.to_string()),
        FilterOp::Eq | FilterOp::In => Predicate::Equals(value.to_string()),
    };

    ConditionSet::single(FieldCondition::new(
        condition.field,
        condition.subfield,
        predicate,
    ))
}

/// Build a membership condition: the field (or subfield) equals one of `values`
pub fn build_array_query_condition(condition: ArrayQueryCondition<'_>) -> ConditionSet {
    if condition.values.is_empty() {
        return ConditionSet::new();
    }

    ConditionSet::single(FieldCondition::new(
        condition.field,
        condition.subfield,
        Predicate::In(condition.values.to_vec()),
    ))
}

/// Full filter for a list query.
///
/// Every variant implies the soft-delete exclusion (`deleted_at IS NULL`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CompositeFilter {
    /// No field conditions, only the soft-delete exclusion
    #[default]
    Baseline,
    /// All conditions must match
    All(ConditionSet),
    /// At least one group must match
    Any(Vec<ConditionSet>),
}

impl CompositeFilter {
    /// Combine a route's merged conditions using the `operator` query flag.
    ///
    /// `"and"` requires every condition. Any other flag wraps the merged set in
    /// a one-element OR group, which still requires every condition in it.
    pub fn assemble(conditions: ConditionSet, operator: Option<&str>) -> Self {
        if conditions.is_empty() {
            return Self::Baseline;
        }
        match operator {
            Some("and") => Self::All(conditions),
            _ => Self::Any(vec![conditions]),
        }
    }

    pub fn is_baseline(&self) -> bool {
        matches!(self, Self::Baseline)
    }

    /// JSON form for logging
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Serialize for CompositeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Baseline => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("deletedAt", &())?;
                map.end()
            }
            Self::All(set) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("AND", set)?;
                map.serialize_entry("deletedAt", &())?;
                map.end()
            }
            Self::Any(sets) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("OR", sets)?;
                map.serialize_entry("deletedAt", &())?;
                map.end()
            }
        }
    }
}

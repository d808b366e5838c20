//! Filter type definitions
//!
//! Field conditions, the merged condition set a route builds from its query
//! parameters, and the parameter collector used while rendering SQL.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Comparison applied to a single column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Exact match
    Equals(String),
    /// Case-insensitive substring match
    Contains(String),
    /// Column equals one of the values
    In(Vec<String>),
}

impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Equals(value) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("equals", value)?;
                map.end()
            }
            Self::Contains(value) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("contains", value)?;
                map.serialize_entry("mode", "insensitive")?;
                map.end()
            }
            Self::In(values) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("in", values)?;
                map.end()
            }
        }
    }
}

/// A predicate scoped to one field of a record.
///
/// `path` walks into related records: `["action", "title"]` on the `lastAction`
/// field of a case matches against `lastAction.action.title`. An empty path
/// applies the predicate to the field itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCondition {
    pub field: String,
    pub path: Vec<String>,
    pub predicate: Predicate,
}

impl FieldCondition {
    /// Create a condition, splitting a dotted subfield into relation hops
    pub fn new(field: &str, subfield: Option<&str>, predicate: Predicate) -> Self {
        let path = subfield
            .filter(|s| !s.is_empty())
            .map(|s| s.split('.').map(str::to_string).collect())
            .unwrap_or_default();
        Self {
            field: field.to_string(),
            path,
            predicate,
        }
    }
}

/// Serializes the path as nested single-key objects ending at the predicate
struct NestedPredicate<'a> {
    path: &'a [String],
    predicate: &'a Predicate,
}

impl Serialize for NestedPredicate<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.path.split_first() {
            None => self.predicate.serialize(serializer),
            Some((head, rest)) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(
                    head,
                    &NestedPredicate {
                        path: rest,
                        predicate: self.predicate,
                    },
                )?;
                map.end()
            }
        }
    }
}

/// Merged field conditions for one list request.
///
/// Holds at most one condition per field. Inserting a condition for a field
/// that is already present replaces it without changing its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionSet {
    conditions: Vec<FieldCondition>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(condition: FieldCondition) -> Self {
        Self {
            conditions: vec![condition],
        }
    }

    pub fn insert(&mut self, condition: FieldCondition) {
        match self
            .conditions
            .iter_mut()
            .find(|c| c.field == condition.field)
        {
            Some(existing) => *existing = condition,
            None => self.conditions.push(condition),
        }
    }

    pub fn merge(&mut self, other: ConditionSet) {
        for condition in other.conditions {
            self.insert(condition);
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldCondition> {
        self.conditions.iter().find(|c| c.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldCondition> {
        self.conditions.iter()
    }
}

impl FromIterator<ConditionSet> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = ConditionSet>>(iter: I) -> Self {
        let mut merged = ConditionSet::new();
        for set in iter {
            merged.merge(set);
        }
        merged
    }
}

impl Serialize for ConditionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.conditions.len()))?;
        for condition in &self.conditions {
            map.serialize_entry(
                &condition.field,
                &NestedPredicate {
                    path: &condition.path,
                    predicate: &condition.predicate,
                },
            )?;
        }
        map.end()
    }
}

/// Errors raised while rendering a filter against a record schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter field: {0}")]
    UnknownField(String),

    #[error("Invalid filter path for {field}: {reason}")]
    InvalidPath { field: String, reason: &'static str },
}

/// Collects SQL parameters during query building (maintains insertion order)
#[derive(Debug, Default)]
pub struct SqlParams {
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dotted_subfield_becomes_path() {
        let condition = FieldCondition::new(
            "lastAction",
            Some("action.title"),
            Predicate::Equals("Filed".to_string()),
        );
        assert_eq!(condition.path, vec!["action", "title"]);
    }

    #[test]
    fn empty_subfield_means_direct_field() {
        let condition = FieldCondition::new("title", Some(""), Predicate::Equals("x".into()));
        assert!(condition.path.is_empty());
    }

    #[test]
    fn insert_replaces_existing_field_in_place() {
        let mut set = ConditionSet::new();
        set.insert(FieldCondition::new("title", None, Predicate::Equals("a".into())));
        set.insert(FieldCondition::new("amount", None, Predicate::Equals("1".into())));
        set.insert(FieldCondition::new("title", None, Predicate::Contains("b".into())));

        assert_eq!(set.len(), 2);
        let fields: Vec<&str> = set.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "amount"]);
        assert_eq!(
            set.get("title").map(|c| &c.predicate),
            Some(&Predicate::Contains("b".into()))
        );
    }

    #[test]
    fn collect_merges_sets() {
        let set: ConditionSet = [
            ConditionSet::new(),
            ConditionSet::single(FieldCondition::new(
                "title",
                None,
                Predicate::Equals("a".into()),
            )),
            ConditionSet::new(),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn serializes_nested_relation_predicate() {
        let set = ConditionSet::single(FieldCondition::new(
            "status",
            Some("name"),
            Predicate::In(vec!["Open".into(), "Closed".into()]),
        ));
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({"status": {"name": {"in": ["Open", "Closed"]}}})
        );
    }

    #[test]
    fn serializes_contains_as_insensitive() {
        let set = ConditionSet::single(FieldCondition::new(
            "title",
            None,
            Predicate::Contains("acme".into()),
        ));
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({"title": {"contains": "acme", "mode": "insensitive"}})
        );
    }

    #[test]
    fn filter_error_display() {
        let err = FilterError::UnknownField("nope".to_string());
        assert_eq!(err.to_string(), "Unknown filter field: nope");
    }
}

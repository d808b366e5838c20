//! SQL rendering for composite filters
//!
//! Produces a parameterised SQLite WHERE clause. Field names are resolved
//! through a [`RecordSchema`]; values only ever travel as `?` parameters.

use super::builder::CompositeFilter;
use super::schema::{FieldDef, FieldKind, RecordSchema};
use super::types::{ConditionSet, FieldCondition, FilterError, Predicate, SqlParams};
use crate::utils::sql::{contains_regex, placeholders};

impl CompositeFilter {
    /// Render the full WHERE clause, soft-delete exclusion included
    pub fn to_sql(
        &self,
        schema: &RecordSchema,
        params: &mut SqlParams,
    ) -> Result<String, FilterError> {
        let not_deleted = format!("{}.deleted_at IS NULL", schema.alias);
        match self {
            Self::Baseline => Ok(not_deleted),
            Self::All(set) => Ok(format!("({}) AND {}", set.to_sql(schema, params)?, not_deleted)),
            Self::Any(sets) => {
                let groups = sets
                    .iter()
                    .map(|set| set.to_sql(schema, params).map(|sql| format!("({sql})")))
                    .collect::<Result<Vec<_>, _>>()?;
                let any = if groups.is_empty() {
                    "1=1".to_string()
                } else {
                    groups.join(" OR ")
                };
                Ok(format!("({any}) AND {not_deleted}"))
            }
        }
    }
}

impl ConditionSet {
    /// AND of every condition in the set. An empty set matches everything.
    pub fn to_sql(
        &self,
        schema: &RecordSchema,
        params: &mut SqlParams,
    ) -> Result<String, FilterError> {
        if self.is_empty() {
            return Ok("1=1".to_string());
        }
        let clauses = self
            .iter()
            .map(|condition| condition.to_sql(schema, params))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(clauses.join(" AND "))
    }
}

impl FieldCondition {
    pub fn to_sql(
        &self,
        schema: &RecordSchema,
        params: &mut SqlParams,
    ) -> Result<String, FilterError> {
        let field = schema
            .field(&self.field)
            .ok_or_else(|| FilterError::UnknownField(self.field.clone()))?;
        let column = format!("{}.{}", schema.alias, field.column);
        render_field(&self.field, &column, field, &self.path, &self.predicate, params)
    }
}

/// Walk relation hops until the path ends on a scalar column
fn render_field(
    name: &str,
    column: &str,
    field: &FieldDef,
    path: &[String],
    predicate: &Predicate,
    params: &mut SqlParams,
) -> Result<String, FilterError> {
    match (field.kind, path.split_first()) {
        (FieldKind::Scalar, None) => Ok(predicate.to_sql(column, params)),
        (FieldKind::Scalar, Some(_)) => Err(FilterError::InvalidPath {
            field: name.to_string(),
            reason: "scalar field has no subfields",
        }),
        (FieldKind::Relation(_), None) => Err(FilterError::InvalidPath {
            field: name.to_string(),
            reason: "relation field requires a subfield",
        }),
        (FieldKind::Relation(relation), Some((head, rest))) => {
            let hop = format!("{name}.{head}");
            let sub = relation
                .field(head)
                .ok_or_else(|| FilterError::UnknownField(hop.clone()))?;
            let sub_column = format!("{}.{}", relation.table, sub.column);
            let inner = render_field(&hop, &sub_column, sub, rest, predicate, params)?;
            Ok(format!(
                "{column} IN (SELECT {table}.{key} FROM {table} WHERE {inner})",
                table = relation.table,
                key = relation.key,
            ))
        }
    }
}

impl Predicate {
    /// Render against a fully qualified column
    pub fn to_sql(&self, column: &str, params: &mut SqlParams) -> String {
        match self {
            Self::Equals(value) => {
                params.values.push(value.clone());
                format!("{column} = ?")
            }
            // REGEXP is registered per connection; NULL columns never reach it
            Self::Contains(value) => {
                params.values.push(contains_regex(value));
                format!(
                    "CASE WHEN {column} IS NULL THEN 0 \
                     ELSE CAST({column} AS TEXT) REGEXP ? END"
                )
            }
            Self::In(values) => {
                if values.is_empty() {
                    return "1=0".to_string();
                }
                params.values.extend(values.iter().cloned());
                format!("{column} IN ({})", placeholders(values.len()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::schema::{CASE_SCHEMA, REIMBURSEMENT_SCHEMA};

    fn cond(field: &str, subfield: Option<&str>, predicate: Predicate) -> ConditionSet {
        ConditionSet::single(FieldCondition::new(field, subfield, predicate))
    }

    #[test]
    fn baseline_is_soft_delete_only() {
        let mut params = SqlParams::default();
        let sql = CompositeFilter::Baseline
            .to_sql(&CASE_SCHEMA, &mut params)
            .unwrap();
        assert_eq!(sql, "c.deleted_at IS NULL");
        assert!(params.values.is_empty());
    }

    #[test]
    fn equals_on_scalar() {
        let mut params = SqlParams::default();
        let filter = CompositeFilter::All(cond(
            "caseNumber",
            None,
            Predicate::Equals("CV-1".into()),
        ));
        let sql = filter.to_sql(&CASE_SCHEMA, &mut params).unwrap();
        assert_eq!(sql, "(c.case_number = ?) AND c.deleted_at IS NULL");
        assert_eq!(params.values, vec!["CV-1"]);
    }

    #[test]
    fn contains_binds_literal_pattern() {
        let mut params = SqlParams::default();
        let filter = CompositeFilter::All(cond(
            "description",
            None,
            Predicate::Contains("taxi (x2)".into()),
        ));
        let sql = filter.to_sql(&REIMBURSEMENT_SCHEMA, &mut params).unwrap();
        assert_eq!(
            sql,
            "(CASE WHEN r.description IS NULL THEN 0 \
             ELSE CAST(r.description AS TEXT) REGEXP ? END) AND r.deleted_at IS NULL"
        );
        assert_eq!(params.values, vec!["(?i)taxi \\(x2\\)"]);
    }

    #[test]
    fn membership_through_relation() {
        let mut params = SqlParams::default();
        let filter = CompositeFilter::All(cond(
            "status",
            Some("name"),
            Predicate::In(vec!["Open".into(), "Closed".into()]),
        ));
        let sql = filter.to_sql(&CASE_SCHEMA, &mut params).unwrap();
        assert_eq!(
            sql,
            "(c.status_key IN (SELECT statuses.key FROM statuses WHERE statuses.name IN (?, ?))) \
             AND c.deleted_at IS NULL"
        );
        assert_eq!(params.values, vec!["Open", "Closed"]);
    }

    #[test]
    fn nested_relation_hops() {
        let mut params = SqlParams::default();
        let set = cond("lastAction", Some("action.title"), Predicate::Contains("hearing".into()));
        let sql = set.to_sql(&CASE_SCHEMA, &mut params).unwrap();
        assert_eq!(
            sql,
            "c.last_action_id IN (SELECT case_actions.id FROM case_actions WHERE \
             case_actions.action_id IN (SELECT actions.id FROM actions WHERE \
             CASE WHEN actions.title IS NULL THEN 0 \
             ELSE CAST(actions.title AS TEXT) REGEXP ? END))"
        );
        assert_eq!(params.values, vec!["(?i)hearing"]);
    }

    #[test]
    fn any_wraps_each_group() {
        let mut set = cond("title", None, Predicate::Equals("a".into()));
        set.insert(FieldCondition::new(
            "caseNumber",
            None,
            Predicate::Equals("b".into()),
        ));
        let mut params = SqlParams::default();
        let sql = CompositeFilter::Any(vec![set])
            .to_sql(&CASE_SCHEMA, &mut params)
            .unwrap();
        assert_eq!(
            sql,
            "((c.title = ? AND c.case_number = ?)) AND c.deleted_at IS NULL"
        );
        assert_eq!(params.values, vec!["a", "b"]);
    }

    #[test]
    fn unknown_field_is_error() {
        let mut params = SqlParams::default();
        let err = cond("bogus", None, Predicate::Equals("x".into()))
            .to_sql(&CASE_SCHEMA, &mut params)
            .unwrap_err();
        assert_eq!(err, FilterError::UnknownField("bogus".into()));

        let err = cond("status", Some("color"), Predicate::Equals("x".into()))
            .to_sql(&CASE_SCHEMA, &mut params)
            .unwrap_err();
        assert_eq!(err, FilterError::UnknownField("status.color".into()));
    }

    #[test]
    fn path_shape_mismatch_is_error() {
        let mut params = SqlParams::default();
        let err = cond("title", Some("name"), Predicate::Equals("x".into()))
            .to_sql(&CASE_SCHEMA, &mut params)
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidPath { .. }));

        let err = cond("status", None, Predicate::Equals("x".into()))
            .to_sql(&CASE_SCHEMA, &mut params)
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidPath { .. }));
    }
}

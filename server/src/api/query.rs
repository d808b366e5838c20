//! Query-string filter helpers shared by list routes
//!
//! Each filterable query parameter is split into values and an operator, then
//! turned into a single-value or membership condition on one field.

use crate::data::filters::{
    ArrayQueryCondition, CompositeFilter, ConditionSet, QueryCondition, RecordSchema, SortOrder,
    build_array_query_condition, build_query_condition, split_filter_value,
};
use crate::data::types::ListQuery;

/// Condition on the first value of a raw filter string
pub fn single_value(field: &str, raw: Option<&str>, subfield: Option<&str>) -> ConditionSet {
    let split = split_filter_value(raw);
    build_query_condition(QueryCondition {
        field,
        operation: split.operator(),
        value: split.first(),
        subfield,
    })
}

/// Membership condition on every value of a raw filter string
pub fn multi_value(field: &str, raw: Option<&str>, subfield: Option<&str>) -> ConditionSet {
    let split = split_filter_value(raw);
    build_array_query_condition(ArrayQueryCondition {
        field,
        operation: split.operator(),
        values: &split.values,
        subfield,
    })
}

/// Paging, sort and combinator parameters common to every list route
pub struct ListParams<'a> {
    pub page: u32,
    pub per_page: u32,
    pub sort: Option<&'a str>,
    pub operator: Option<&'a str>,
}

/// Assemble the repository query from merged conditions
pub fn list_query(
    conditions: ConditionSet,
    params: ListParams<'_>,
    schema: &RecordSchema,
) -> ListQuery {
    ListQuery {
        filter: CompositeFilter::assemble(conditions, params.operator),
        sort: SortOrder::resolve(params.sort, schema),
        page: params.page,
        per_page: params.per_page,
    }
}

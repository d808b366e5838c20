//! Query filter system
//!
//! Turns list-endpoint query parameters into a composite filter and renders it
//! as a parameterised SQLite WHERE clause.
//!
//! ## Usage
//!
//! ```
//! use docket_server::data::filters::{
//!     ArrayQueryCondition, CompositeFilter, SqlParams, build_array_query_condition,
//!     schema::CASE_SCHEMA, split_filter_value,
//! };
//!
//! let split = split_filter_value(Some("Open.Closed~in"));
//! let conditions = build_array_query_condition(ArrayQueryCondition {
//!     field: "status",
//!     operation: split.operator(),
//!     values: &split.values,
//!     subfield: Some("name"),
//! });
//! let filter = CompositeFilter::assemble(conditions, Some("and"));
//!
//! let mut params = SqlParams::default();
//! let sql = filter.to_sql(&CASE_SCHEMA, &mut params).unwrap();
//! assert!(sql.ends_with("AND c.deleted_at IS NULL"));
//! assert_eq!(params.values, vec!["Open", "Closed"]);
//! ```

mod builder;
mod parser;
pub mod schema;
mod sort;
mod sql;
mod types;

pub use builder::{
    ArrayQueryCondition, CompositeFilter, FilterOp, QueryCondition, build_array_query_condition,
    build_query_condition,
};
pub use parser::{SplitValue, split_filter_value};
pub use schema::RecordSchema;
pub use sort::{SortDirection, SortOrder};
pub use types::{ConditionSet, FieldCondition, FilterError, Predicate, SqlParams};

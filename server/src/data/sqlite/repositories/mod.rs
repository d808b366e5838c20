//! SQLite repositories
//!
//! Types (CaseRow, ReimbursementRow, etc.) should be imported from `crate::data::types`.

pub mod case;
pub mod reimbursement;

pub use case::{get_case, list_cases};
pub use reimbursement::{get_reimbursement, list_reimbursements};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::data::types::LookupRow;

/// Read a LEFT JOINed lookup; a NULL key means the join found nothing
fn lookup(row: &SqliteRow, key: &str, name: &str) -> Result<Option<LookupRow>, sqlx::Error> {
    match row.try_get::<Option<String>, _>(key)? {
        Some(key) => Ok(Some(LookupRow {
            key,
            name: row.try_get(name)?,
        })),
        None => Ok(None),
    }
}

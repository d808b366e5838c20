//! Case repository for SQLite operations

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::data::filters::SqlParams;
use crate::data::filters::schema::CASE_SCHEMA;
use crate::data::sqlite::SqliteError;
use crate::data::types::{CaseActionRow, CaseRow, ListQuery, LookupRow, UserRefRow};

use super::lookup;

const CASE_SELECT: &str = "SELECT c.id, c.title, c.case_number, c.filing_date, \
    c.created_at, c.updated_at, \
    p.key AS priority_key, p.name AS priority_name, \
    s.key AS status_key, s.name AS status_name, \
    cat.id AS category_id, cat.name AS category_name, \
    d.id AS division_id, d.name AS division_name, \
    n.id AS nature_id, n.name AS nature_name, \
    u.id AS user_id, u.email AS user_email, u.display_name AS user_display_name, \
    ca.id AS last_action_id, ca.note AS last_action_note, ca.created_at AS last_action_created_at, \
    a.id AS action_id, a.title AS action_title \
    FROM cases c \
    LEFT JOIN priorities p ON p.key = c.priority_key \
    LEFT JOIN statuses s ON s.key = c.status_key \
    LEFT JOIN categories cat ON cat.id = c.category_id \
    LEFT JOIN divisions d ON d.id = c.division_id \
    LEFT JOIN natures n ON n.id = c.nature_id \
    LEFT JOIN users u ON u.id = c.assigned_to_id \
    LEFT JOIN case_actions ca ON ca.id = c.last_action_id \
    LEFT JOIN actions a ON a.id = ca.action_id";

fn case_from_row(row: &SqliteRow) -> Result<CaseRow, sqlx::Error> {
    let assigned_to = match row.try_get::<Option<String>, _>("user_id")? {
        Some(id) => Some(UserRefRow {
            id,
            email: row.try_get("user_email")?,
            display_name: row.try_get("user_display_name")?,
        }),
        None => None,
    };

    let last_action = match (
        row.try_get::<Option<String>, _>("last_action_id")?,
        lookup(row, "action_id", "action_title")?,
    ) {
        (Some(id), Some(action)) => Some(CaseActionRow {
            id,
            note: row.try_get("last_action_note")?,
            created_at: row.try_get("last_action_created_at")?,
            action,
        }),
        _ => None,
    };

    Ok(CaseRow {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        case_number: row.try_get("case_number")?,
        filing_date: row.try_get("filing_date")?,
        priority: lookup(row, "priority_key", "priority_name")?,
        status: lookup(row, "status_key", "status_name")?,
        category: lookup(row, "category_id", "category_name")?,
        division: lookup(row, "division_id", "division_name")?,
        nature: lookup(row, "nature_id", "nature_name")?,
        assigned_to,
        last_action,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// List live cases matching the query, with the total match count.
///
/// Rows and count are read in one transaction so the page count agrees with
/// the rows returned.
pub async fn list_cases(
    pool: &SqlitePool,
    query: &ListQuery,
) -> Result<(Vec<CaseRow>, u64), SqliteError> {
    let mut params = SqlParams::default();
    let where_clause = query.filter.to_sql(&CASE_SCHEMA, &mut params)?;

    let select_sql = format!(
        "{} WHERE {} ORDER BY {} LIMIT ? OFFSET ?",
        CASE_SELECT,
        where_clause,
        query.sort.to_sql(CASE_SCHEMA.alias)
    );
    let count_sql = format!("SELECT COUNT(*) FROM cases c WHERE {}", where_clause);

    let mut tx = pool.begin().await?;

    let mut select = sqlx::query(&select_sql);
    for value in &params.values {
        select = select.bind(value);
    }
    let rows = select
        .bind(query.per_page as i64)
        .bind(query.offset() as i64)
        .fetch_all(&mut *tx)
        .await?;

    let mut count = sqlx::query_scalar::<_, i64>(&count_sql);
    for value in &params.values {
        count = count.bind(value);
    }
    let total = count.fetch_one(&mut *tx).await?;

    tx.commit().await?;

    let cases = rows
        .iter()
        .map(case_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(returned = cases.len(), total, "Listed cases");
    Ok((cases, total.max(0) as u64))
}

/// Get a case by ID. Soft-deleted cases are still returned.
pub async fn get_case(pool: &SqlitePool, id: &str) -> Result<Option<CaseRow>, SqliteError> {
    let sql = format!("{} WHERE c.id = ?", CASE_SELECT);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    row.as_ref()
        .map(case_from_row)
        .transpose()
        .map_err(Into::into)
}

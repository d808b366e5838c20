//! Reimbursement repository for SQLite operations

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::data::filters::SqlParams;
use crate::data::filters::schema::REIMBURSEMENT_SCHEMA;
use crate::data::sqlite::SqliteError;
use crate::data::types::{ListQuery, ReimbursementRow};

use super::lookup;

const REIMBURSEMENT_SELECT: &str = "SELECT r.id, r.description, r.amount, r.date, r.remarks, \
    r.case_id, r.user_id, r.expense_type_id, r.created_at, r.updated_at, \
    e.id AS expense_type_key, e.name AS expense_type_name \
    FROM reimbursements r \
    LEFT JOIN expense_types e ON e.id = r.expense_type_id";

fn reimbursement_from_row(row: &SqliteRow) -> Result<ReimbursementRow, sqlx::Error> {
    Ok(ReimbursementRow {
        id: row.try_get("id")?,
        description: row.try_get("description")?,
        amount: row.try_get("amount")?,
        date: row.try_get("date")?,
        remarks: row.try_get("remarks")?,
        case_id: row.try_get("case_id")?,
        user_id: row.try_get("user_id")?,
        expense_type_id: row.try_get("expense_type_id")?,
        expense_type: lookup(row, "expense_type_key", "expense_type_name")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// List live reimbursements matching the query, with the total match count
pub async fn list_reimbursements(
    pool: &SqlitePool,
    query: &ListQuery,
) -> Result<(Vec<ReimbursementRow>, u64), SqliteError> {
    let mut params = SqlParams::default();
    let where_clause = query.filter.to_sql(&REIMBURSEMENT_SCHEMA, &mut params)?;

    let select_sql = format!(
        "{} WHERE {} ORDER BY {} LIMIT ? OFFSET ?",
        REIMBURSEMENT_SELECT,
        where_clause,
        query.sort.to_sql(REIMBURSEMENT_SCHEMA.alias)
    );
    let count_sql = format!(
        "SELECT COUNT(*) FROM reimbursements r WHERE {}",
        where_clause
    );

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

    let reimbursements = rows
        .iter()
        .map(reimbursement_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(returned = reimbursements.len(), total, "Listed reimbursements");
    Ok((reimbursements, total.max(0) as u64))
}

/// Get a reimbursement by ID, soft-deleted or not
pub async fn get_reimbursement(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<ReimbursementRow>, SqliteError> {
    let sql = format!("{} WHERE r.id = ?", REIMBURSEMENT_SELECT);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;

    row.as_ref()
        .map(reimbursement_from_row)
        .transpose()
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::{
        CompositeFilter, ConditionSet, QueryCondition, SortOrder, build_query_condition,
        split_filter_value,
    };
    use crate::data::sqlite::fixtures::seeded_pool;

    fn filter_on(field: &str, raw: &str) -> CompositeFilter {
        let split = split_filter_value(Some(raw));
        let conditions = build_query_condition(QueryCondition {
            field,
            operation: split.operator(),
            value: split.first(),
            subfield: None,
        });
        CompositeFilter::assemble(conditions, Some("and"))
    }

    #[tokio::test]
    async fn test_list_excludes_soft_deleted() {
        let pool = seeded_pool().await;
        let (rows, total) = list_reimbursements(&pool, &ListQuery::default())
            .await
            .unwrap();

        assert_eq!(total, 2);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r-2", "r-1"]);
        assert_eq!(
            rows[1].expense_type.as_ref().map(|e| e.name.as_str()),
            Some("Filing Fees")
        );
    }

    #[tokio::test]
    async fn test_filter_by_case_id() {
        let pool = seeded_pool().await;
        let query = ListQuery {
            filter: filter_on("caseId", "c-1"),
            ..Default::default()
        };

        // r-3 also belongs to c-1 but is soft-deleted
        let (rows, total) = list_reimbursements(&pool, &query).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(rows[0].id, "r-1");
    }

    #[tokio::test]
    async fn test_description_contains() {
        let pool = seeded_pool().await;
        let query = ListQuery {
            filter: filter_on("description", "taxi~like"),
            ..Default::default()
        };

        let (rows, _) = list_reimbursements(&pool, &query).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 32.5);
    }

    #[tokio::test]
    async fn test_amount_equality_matches_numeric_column() {
        let pool = seeded_pool().await;
        let query = ListQuery {
            filter: filter_on("amount", "150"),
            ..Default::default()
        };

        let (rows, _) = list_reimbursements(&pool, &query).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "r-1");
    }

    #[tokio::test]
    async fn test_sort_by_amount() {
        let pool = seeded_pool().await;
        let query = ListQuery {
            filter: CompositeFilter::assemble(ConditionSet::new(), None),
            sort: SortOrder::resolve(Some("amount.asc"), &REIMBURSEMENT_SCHEMA),
            ..Default::default()
        };

        let (rows, _) = list_reimbursements(&pool, &query).await.unwrap();
        let amounts: Vec<f64> = rows.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![32.5, 150.0]);
    }

    #[tokio::test]
    async fn test_get_reimbursement() {
        let pool = seeded_pool().await;

        let row = get_reimbursement(&pool, "r-1").await.unwrap().unwrap();
        assert_eq!(row.description, "Court filing fee");
        assert_eq!(row.case_id.as_deref(), Some("c-1"));

        let deleted = get_reimbursement(&pool, "r-3").await.unwrap().unwrap();
        assert_eq!(deleted.description, "Deleted expense");

        assert!(get_reimbursement(&pool, "missing").await.unwrap().is_none());
    }
}

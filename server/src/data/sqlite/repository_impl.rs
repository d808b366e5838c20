//! Repository trait implementations for SQLite
//!
//! Implemented for `Arc<SqliteService>` so handlers can hold a shared,
//! backend-agnostic trait object.

use std::sync::Arc;

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::traits::{CaseRepository, ReimbursementRepository};
use crate::data::types::{CaseRow, ListQuery, ReimbursementRow};

use super::SqliteService;
use super::repositories::{case, reimbursement};

#[async_trait]
impl CaseRepository for Arc<SqliteService> {
    async fn list_cases(&self, query: &ListQuery) -> Result<(Vec<CaseRow>, u64), DataError> {
        case::list_cases(self.pool(), query)
            .await
            .map_err(Into::into)
    }

    async fn get_case(&self, id: &str) -> Result<Option<CaseRow>, DataError> {
        case::get_case(self.pool(), id).await.map_err(Into::into)
    }
}

#[async_trait]
impl ReimbursementRepository for Arc<SqliteService> {
    async fn list_reimbursements(
        &self,
        query: &ListQuery,
    ) -> Result<(Vec<ReimbursementRow>, u64), DataError> {
        reimbursement::list_reimbursements(self.pool(), query)
            .await
            .map_err(Into::into)
    }

    async fn get_reimbursement(&self, id: &str) -> Result<Option<ReimbursementRow>, DataError> {
        reimbursement::get_reimbursement(self.pool(), id)
            .await
            .map_err(Into::into)
    }
}

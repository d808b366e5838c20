//! Repository traits for record storage
//!
//! Handlers depend on these traits rather than on a concrete backend.
//! `Arc<SqliteService>` implements both.

use async_trait::async_trait;

use crate::data::error::DataError;
use crate::data::types::{CaseRow, ListQuery, ReimbursementRow};

/// Read access to case records
#[async_trait]
pub trait CaseRepository: Send + Sync {
    /// List live cases with pagination, filter and sort.
    /// Returns the page of rows and the total number of matches.
    async fn list_cases(&self, query: &ListQuery) -> Result<(Vec<CaseRow>, u64), DataError>;

    /// Get a single live case by ID
    async fn get_case(&self, id: &str) -> Result<Option<CaseRow>, DataError>;
}

/// Read access to reimbursement records
#[async_trait]
pub trait ReimbursementRepository: Send + Sync {
    async fn list_reimbursements(
        &self,
        query: &ListQuery,
    ) -> Result<(Vec<ReimbursementRow>, u64), DataError>;

    async fn get_reimbursement(&self, id: &str) -> Result<Option<ReimbursementRow>, DataError>;
}

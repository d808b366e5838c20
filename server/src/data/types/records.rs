//! Case and reimbursement rows with their joined lookups

use serde::{Deserialize, Serialize};

use crate::data::filters::{CompositeFilter, SortOrder};

// ============================================================================
// Lookup types
// ============================================================================

/// Row from a key/name lookup table (priorities, statuses, categories, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupRow {
    pub key: String,
    pub name: String,
}

/// User referenced by a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRefRow {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

/// Most recent action logged against a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseActionRow {
    pub id: String,
    pub note: Option<String>,
    pub created_at: i64,
    pub action: LookupRow,
}

// ============================================================================
// Record types
// ============================================================================

/// Case row with its includes resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRow {
    pub id: String,
    pub title: String,
    pub case_number: String,
    pub filing_date: Option<String>,
    pub priority: Option<LookupRow>,
    pub status: Option<LookupRow>,
    pub category: Option<LookupRow>,
    pub division: Option<LookupRow>,
    pub nature: Option<LookupRow>,
    pub assigned_to: Option<UserRefRow>,
    pub last_action: Option<CaseActionRow>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Reimbursement row with its expense type resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReimbursementRow {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: Option<String>,
    pub remarks: Option<String>,
    pub case_id: Option<String>,
    pub user_id: Option<String>,
    pub expense_type_id: Option<String>,
    pub expense_type: Option<LookupRow>,
    pub created_at: i64,
    pub updated_at: i64,
}

// ============================================================================
// Query parameters
// ============================================================================

/// Parameters for a paginated list query
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub filter: CompositeFilter,
    pub sort: SortOrder,
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
}

impl ListQuery {
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filter: CompositeFilter::Baseline,
            sort: SortOrder::default(),
            page: 1,
            per_page: 10,
        }
    }
}

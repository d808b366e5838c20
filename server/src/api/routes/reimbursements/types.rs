//! Reimbursement API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::query::{ListParams, list_query, single_value};
use crate::api::routes::cases::types::LookupDto;
use crate::api::types::{
    default_page, default_per_page, validate_filter_value, validate_page, validate_per_page,
};
use crate::data::filters::ConditionSet;
use crate::data::filters::schema::REIMBURSEMENT_SCHEMA;
use crate::data::types::{ListQuery, ReimbursementRow};

/// Reimbursement DTO for API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReimbursementDto {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: Option<String>,
    pub remarks: Option<String>,
    pub case_id: Option<String>,
    pub user_id: Option<String>,
    pub expense_type_id: Option<String>,
    pub expense_type: Option<LookupDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReimbursementRow> for ReimbursementDto {
    fn from(row: ReimbursementRow) -> Self {
        Self {
            id: row.id,
            description: row.description,
            amount: row.amount,
            date: row.date,
            remarks: row.remarks,
            case_id: row.case_id,
            user_id: row.user_id,
            expense_type_id: row.expense_type_id,
            expense_type: row.expense_type.map(Into::into),
            created_at: DateTime::from_timestamp(row.created_at, 0).unwrap_or_else(Utc::now),
            updated_at: DateTime::from_timestamp(row.updated_at, 0).unwrap_or_else(Utc::now),
        }
    }
}

/// Query params for listing reimbursements
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListReimbursementsQuery {
    #[serde(default = "default_page")]
    #[validate(custom(function = "validate_page"))]
    pub page: u32,

    #[serde(default = "default_per_page", rename = "per_page")]
    #[validate(custom(function = "validate_per_page"))]
    pub per_page: u32,

    #[validate(custom(function = "validate_filter_value"))]
    pub sort: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub operator: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub description: Option<String>,

    /// Only the part before the first `.` is compared
    #[validate(custom(function = "validate_filter_value"))]
    pub amount: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub case_id: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub user_id: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub expense_type_id: Option<String>,
}

impl ListReimbursementsQuery {
    pub fn conditions(&self) -> ConditionSet {
        [
            single_value("description", self.description.as_deref(), None),
            single_value("amount", self.amount.as_deref(), None),
            single_value("caseId", self.case_id.as_deref(), None),
            single_value("userId", self.user_id.as_deref(), None),
            single_value("expenseTypeId", self.expense_type_id.as_deref(), None),
        ]
        .into_iter()
        .collect()
    }

    pub fn to_list_query(&self) -> ListQuery {
        list_query(
            self.conditions(),
            ListParams {
                page: self.page,
                per_page: self.per_page,
                sort: self.sort.as_deref(),
                operator: self.operator.as_deref(),
            },
            &REIMBURSEMENT_SCHEMA,
        )
    }
}

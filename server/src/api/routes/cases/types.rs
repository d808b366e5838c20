//! Case API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::query::{ListParams, list_query, multi_value, single_value};
use crate::api::types::{
    default_page, default_per_page, validate_filter_value, validate_page, validate_per_page,
};
use crate::data::filters::ConditionSet;
use crate::data::filters::schema::CASE_SCHEMA;
use crate::data::types::{CaseActionRow, CaseRow, ListQuery, LookupRow, UserRefRow};

/// Key/name pair from a lookup table
#[derive(Debug, Serialize, ToSchema)]
pub struct LookupDto {
    pub key: String,
    pub name: String,
}

impl From<LookupRow> for LookupDto {
    fn from(row: LookupRow) -> Self {
        Self {
            key: row.key,
            name: row.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeDto {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl From<UserRefRow> for AssigneeDto {
    fn from(row: UserRefRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            display_name: row.display_name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActionDto {
    pub id: String,
    pub title: String,
}

/// Latest action recorded on a case
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LastActionDto {
    pub id: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub action: ActionDto,
}

impl From<CaseActionRow> for LastActionDto {
    fn from(row: CaseActionRow) -> Self {
        Self {
            id: row.id,
            note: row.note,
            created_at: DateTime::from_timestamp(row.created_at, 0).unwrap_or_else(Utc::now),
            action: ActionDto {
                id: row.action.key,
                title: row.action.name,
            },
        }
    }
}

/// Case DTO for API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseDto {
    pub id: String,
    pub title: String,
    pub case_number: String,
    pub filing_date: Option<String>,
    pub priority: Option<LookupDto>,
    pub status: Option<LookupDto>,
    pub category: Option<LookupDto>,
    pub division: Option<LookupDto>,
    pub nature: Option<LookupDto>,
    pub assigned_to: Option<AssigneeDto>,
    pub last_action: Option<LastActionDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CaseRow> for CaseDto {
    fn from(row: CaseRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            case_number: row.case_number,
            filing_date: row.filing_date,
            priority: row.priority.map(Into::into),
            status: row.status.map(Into::into),
            category: row.category.map(Into::into),
            division: row.division.map(Into::into),
            nature: row.nature.map(Into::into),
            assigned_to: row.assigned_to.map(Into::into),
            last_action: row.last_action.map(Into::into),
            created_at: DateTime::from_timestamp(row.created_at, 0).unwrap_or_else(Utc::now),
            updated_at: DateTime::from_timestamp(row.updated_at, 0).unwrap_or_else(Utc::now),
        }
    }
}

/// Query params for listing cases.
///
/// Filter values use `value1.value2~operator`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListCasesQuery {
    #[serde(default = "default_page")]
    #[validate(custom(function = "validate_page"))]
    pub page: u32,

    #[serde(default = "default_per_page", rename = "per_page")]
    #[validate(custom(function = "validate_per_page"))]
    pub per_page: u32,

    #[validate(custom(function = "validate_filter_value"))]
    pub sort: Option<String>,

    /// `and` requires every filter; anything else wraps them in one OR group
    #[validate(custom(function = "validate_filter_value"))]
    pub operator: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub title: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub priority: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub case_number: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub assigned_to: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub filing_date: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub status: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub category: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub division: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub nature: Option<String>,

    #[validate(custom(function = "validate_filter_value"))]
    pub last_action: Option<String>,
}

impl ListCasesQuery {
    /// Merge one condition per filter parameter that carries a value
    pub fn conditions(&self) -> ConditionSet {
        [
            single_value("title", self.title.as_deref(), None),
            multi_value("priority", self.priority.as_deref(), Some("name")),
            single_value("caseNumber", self.case_number.as_deref(), None),
            single_value(
                "assignedTo",
                self.assigned_to.as_deref(),
                Some("displayName"),
            ),
            single_value("filingDate", self.filing_date.as_deref(), None),
            multi_value("status", self.status.as_deref(), Some("name")),
            multi_value("category", self.category.as_deref(), Some("name")),
            multi_value("division", self.division.as_deref(), Some("name")),
            multi_value("nature", self.nature.as_deref(), Some("name")),
            single_value(
                "lastAction",
                self.last_action.as_deref(),
                Some("action.title"),
            ),
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
            &CASE_SCHEMA,
        )
    }
}

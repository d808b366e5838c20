//! Reimbursement API endpoints

pub mod types;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::{RecordPath, ValidatedQuery};
use crate::api::types::{ApiError, ItemResponse, ListResponse};
use crate::data::TransactionalService;

use types::{ListReimbursementsQuery, ReimbursementDto};

#[derive(Clone)]
pub struct ReimbursementsApiState {
    pub database: TransactionalService,
}

/// Build Reimbursements API routes
pub fn routes(database: TransactionalService) -> Router<()> {
    let state = ReimbursementsApiState { database };

    Router::new()
        .route("/", get(list_reimbursements))
        .route("/{id}", get(get_reimbursement))
        .with_state(state)
}

/// List live reimbursements
#[utoipa::path(
    get,
    path = "/api/v1/reimbursements",
    tag = "reimbursements",
    params(
        ("page" = Option<u32>, Query, description = "Page number (default 1)"),
        ("per_page" = Option<u32>, Query, description = "Items per page (1-100, default 10)"),
        ("sort" = Option<String>, Query, description = "column.direction, e.g. amount.desc"),
        ("operator" = Option<String>, Query, description = "and | or"),
        ("description" = Option<String>, Query, description = "value~operator"),
        ("amount" = Option<String>, Query, description = "value~operator"),
        ("caseId" = Option<String>, Query, description = "Case ID"),
        ("userId" = Option<String>, Query, description = "User ID"),
        ("expenseTypeId" = Option<String>, Query, description = "Expense type ID")
    ),
    responses(
        (status = 200, description = "Page of reimbursements with page count", body = ListResponse<ReimbursementDto>),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub async fn list_reimbursements(
    State(state): State<ReimbursementsApiState>,
    ValidatedQuery(query): ValidatedQuery<ListReimbursementsQuery>,
) -> Result<Json<ListResponse<ReimbursementDto>>, ApiError> {
    let list_query = query.to_list_query();
    tracing::debug!(
        filter = %list_query.filter.to_json(),
        sort = ?list_query.sort,
        page = list_query.page,
        per_page = list_query.per_page,
        "Listing reimbursements"
    );

    let (rows, total) = state
        .database
        .reimbursements()
        .list_reimbursements(&list_query)
        .await
        .map_err(ApiError::from_data)?;

    let data = rows.into_iter().map(ReimbursementDto::from).collect();
    Ok(Json(ListResponse::new(data, list_query.per_page, total)))
}

/// Get a single reimbursement by ID
#[utoipa::path(
    get,
    path = "/api/v1/reimbursements/{id}",
    tag = "reimbursements",
    params(
        ("id" = String, Path, description = "Reimbursement ID")
    ),
    responses(
        (status = 200, description = "Reimbursement details, or null data when absent", body = ItemResponse<ReimbursementDto>),
        (status = 400, description = "Invalid ID")
    )
)]
pub async fn get_reimbursement(
    State(state): State<ReimbursementsApiState>,
    path: RecordPath,
) -> Result<Json<ItemResponse<ReimbursementDto>>, ApiError> {
    let reimbursement = state
        .database
        .reimbursements()
        .get_reimbursement(&path.id)
        .await
        .map_err(ApiError::from_data)?;

    Ok(Json(ItemResponse {
        data: reimbursement.map(ReimbursementDto::from),
    }))
}

//! Case API endpoints

pub mod types;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::{RecordPath, ValidatedQuery};
use crate::api::types::{ApiError, ItemResponse, ListResponse};
use crate::data::TransactionalService;

use types::{CaseDto, ListCasesQuery};

/// Shared state for Cases API endpoints
#[derive(Clone)]
pub struct CasesApiState {
    pub database: TransactionalService,
}

/// Build Cases API routes
pub fn routes(database: TransactionalService) -> Router<()> {
    let state = CasesApiState { database };

    Router::new()
        .route("/", get(list_cases))
        .route("/{id}", get(get_case))
        .with_state(state)
}

/// List live cases matching the query-string filters
#[utoipa::path(
    get,
    path = "/api/v1/cases",
    tag = "cases",
    params(
        ("page" = Option<u32>, Query, description = "Page number (default 1)"),
        ("per_page" = Option<u32>, Query, description = "Items per page (1-100, default 10)"),
        ("sort" = Option<String>, Query, description = "column.direction, e.g. caseNumber.asc"),
        ("operator" = Option<String>, Query, description = "and | or"),
        ("title" = Option<String>, Query, description = "value~operator"),
        ("priority" = Option<String>, Query, description = "name1.name2"),
        ("caseNumber" = Option<String>, Query, description = "value~operator"),
        ("assignedTo" = Option<String>, Query, description = "Assignee display name"),
        ("filingDate" = Option<String>, Query, description = "value~operator"),
        ("status" = Option<String>, Query, description = "name1.name2"),
        ("category" = Option<String>, Query, description = "name1.name2"),
        ("division" = Option<String>, Query, description = "name1.name2"),
        ("nature" = Option<String>, Query, description = "name1.name2"),
        ("lastAction" = Option<String>, Query, description = "Latest action title")
    ),
    responses(
        (status = 200, description = "Page of cases with page count", body = ListResponse<CaseDto>),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub async fn list_cases(
    State(state): State<CasesApiState>,
    ValidatedQuery(query): ValidatedQuery<ListCasesQuery>,
) -> Result<Json<ListResponse<CaseDto>>, ApiError> {
    let list_query = query.to_list_query();
    tracing::debug!(
        filter = %list_query.filter.to_json(),
        sort = ?list_query.sort,
        page = list_query.page,
        per_page = list_query.per_page,
        "Listing cases"
    );

    let (rows, total) = state
        .database
        .cases()
        .list_cases(&list_query)
        .await
        .map_err(ApiError::from_data)?;

    let data: Vec<CaseDto> = rows.into_iter().map(CaseDto::from).collect();
    Ok(Json(ListResponse::new(data, list_query.per_page, total)))
}

/// Get a single case by ID
#[utoipa::path(
    get,
    path = "/api/v1/cases/{id}",
    tag = "cases",
    params(
        ("id" = String, Path, description = "Case ID")
    ),
    responses(
        (status = 200, description = "Case details, or null data when absent", body = ItemResponse<CaseDto>),
        (status = 400, description = "Invalid ID")
    )
)]
pub async fn get_case(
    State(state): State<CasesApiState>,
    path: RecordPath,
) -> Result<Json<ItemResponse<CaseDto>>, ApiError> {
    let case = state
        .database
        .cases()
        .get_case(&path.id)
        .await
        .map_err(ApiError::from_data)?;

    Ok(Json(ItemResponse {
        data: case.map(CaseDto::from),
    }))
}

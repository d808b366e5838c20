//! Shared API types
//!
//! Common types used across all API endpoints including error handling,
//! pagination, and filter-string validation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationError;

/// Maximum items per page for paginated endpoints
pub const MAX_PER_PAGE: u32 = 100;
/// Maximum page number to prevent expensive OFFSET queries
pub const MAX_PAGE: u32 = 10_000;
/// Default page number
pub const DEFAULT_PAGE: u32 = 1;
/// Default items per page
pub const DEFAULT_PER_PAGE: u32 = 10;
/// Maximum length of a raw filter or sort value
pub const MAX_FILTER_LENGTH: usize = 1024;

/// Validator function for page parameter
pub fn validate_page(page: u32) -> Result<(), ValidationError> {
    if page < 1 {
        return Err(ValidationError::new("page_min").with_message("Page must be >= 1".into()));
    }
    if page > MAX_PAGE {
        return Err(ValidationError::new("page_max").with_message(
            format!("Page must be <= {} to prevent expensive queries", MAX_PAGE).into(),
        ));
    }
    Ok(())
}

/// Validator function for per_page parameter
pub fn validate_per_page(per_page: u32) -> Result<(), ValidationError> {
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(ValidationError::new("per_page_range")
            .with_message(format!("per_page must be between 1 and {}", MAX_PER_PAGE).into()));
    }
    Ok(())
}

/// Validator function for raw filter strings (`value1.value2~operator`)
pub fn validate_filter_value(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_FILTER_LENGTH {
        return Err(ValidationError::new("filter_too_long").with_message(
            format!("Filter value too long (max {} chars)", MAX_FILTER_LENGTH).into(),
        ));
    }
    Ok(())
}

/// Standard API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn from_data(e: crate::data::DataError) -> Self {
        tracing::error!(error = %e, transient = e.is_transient(), "Data error");
        Self::internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, code, message) = match self {
            Self::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, "bad_request", code, message)
            }
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "INTERNAL".to_string(),
                message,
            ),
        };
        (
            status,
            Json(serde_json::json!({
                "error": error_type,
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}

pub fn default_page() -> u32 {
    DEFAULT_PAGE
}

pub fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

/// Page count for a total, never dividing by zero
pub fn page_count(total_items: u64, per_page: u32) -> u64 {
    total_items.div_ceil(u64::from(per_page.max(1)))
}

/// List response: one page of records plus the number of pages
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub page_count: u64,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>, per_page: u32, total_items: u64) -> Self {
        Self {
            data,
            page_count: page_count(total_items, per_page),
        }
    }
}

/// Single-record response; `data` is null when the record does not exist
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse<T> {
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_validate_page() {
        assert!(validate_page(0).is_err());
        assert!(validate_page(1).is_ok());
        assert!(validate_page(MAX_PAGE).is_ok());
        assert!(validate_page(MAX_PAGE + 1).is_err());
    }

    #[test]
    fn test_validate_per_page() {
        assert!(validate_per_page(0).is_err());
        assert!(validate_per_page(1).is_ok());
        assert!(validate_per_page(100).is_ok());
        assert!(validate_per_page(101).is_err());
    }

    #[test]
    fn test_validate_filter_value() {
        assert!(validate_filter_value("Open.Closed~in").is_ok());
        assert!(validate_filter_value(&"x".repeat(MAX_FILTER_LENGTH)).is_ok());
        assert!(validate_filter_value(&"x".repeat(MAX_FILTER_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn test_list_response_shape() {
        let response = ListResponse::new(vec![1, 2], 2, 5);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"data": [1, 2], "pageCount": 3})
        );
    }

    #[test]
    fn test_item_response_null() {
        let response: ItemResponse<u32> = ItemResponse { data: None };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"data": null})
        );
    }

    #[tokio::test]
    async fn test_internal_error_response() {
        let response = ApiError::internal("disk I/O error").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "internal_error");
        assert_eq!(json["code"], "INTERNAL");
        assert_eq!(json["message"], "disk I/O error");
    }

    #[tokio::test]
    async fn test_data_error_response() {
        let err = crate::data::DataError::Filter(crate::data::filters::FilterError::UnknownField(
            "bogus".into(),
        ));
        let response = ApiError::from_data(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "INTERNAL");
        assert!(json["message"].as_str().unwrap().contains("bogus"));
    }
}

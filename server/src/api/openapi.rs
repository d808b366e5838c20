//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::cases::types::{
    ActionDto, AssigneeDto, CaseDto, LastActionDto, LookupDto,
};
use crate::api::routes::reimbursements::types::ReimbursementDto;
use crate::api::routes::{cases, health, reimbursements};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Docket API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Legal case management"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "cases", description = "Case queries"),
        (name = "reimbursements", description = "Reimbursement queries")
    ),
    paths(
        health::health,
        cases::list_cases,
        cases::get_case,
        reimbursements::list_reimbursements,
        reimbursements::get_reimbursement,
    ),
    components(schemas(
        health::HealthResponse,
        LookupDto,
        AssigneeDto,
        ActionDto,
        LastActionDto,
        CaseDto,
        ReimbursementDto,
    ))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Docket API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        html { box-sizing: border-box; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin: 0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/api/openapi.json",
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout",
                deepLinking: true,
                showExtensions: true,
                showCommonExtensions: true
            });
        };
    </script>
</body>
</html>"#;

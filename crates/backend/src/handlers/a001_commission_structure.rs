use axum::extract::Path;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_commission_structure::dto::{
    CategoryInfo, CommissionPreview, CommissionSubmitResponse, RevenueSplitRequest,
};
use contracts::domain::a001_commission_structure::{
    CommissionStructure, RevenueSplit, ValidationReport,
};
use contracts::enums::PropertyCategory;
use serde_json::json;

use crate::domain::a001_commission_structure::service::{self, CommissionServiceError};
use crate::shared::dcarbon_api::{self, RemoteApiError};

/// Преобразование ошибки сервиса в HTTP ответ
fn error_response(err: CommissionServiceError) -> Response {
    match err {
        CommissionServiceError::Validation(failures) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationReport::from(failures)),
        )
            .into_response(),
        e @ (CommissionServiceError::CategoryMismatch { .. }
        | CommissionServiceError::ScenarioMismatch { .. }) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
        CommissionServiceError::Remote(RemoteApiError::Config(msg)) => {
            tracing::error!("DCarbon API client unavailable: {}", msg);
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
        CommissionServiceError::Remote(e) => {
            tracing::error!("DCarbon API call failed: {}", e);
            (StatusCode::BAD_GATEWAY, Json(json!({"error": e.to_string()}))).into_response()
        }
    }
}

fn parse_category(path: &str) -> Result<PropertyCategory, Response> {
    PropertyCategory::from_path(path).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": format!("Unknown category: {}", path)})),
        )
            .into_response()
    })
}

/// Заголовок Authorization пробрасывается в удалённый API как есть
fn auth_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// GET /api/commission_structure/categories
pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(
        PropertyCategory::ALL
            .into_iter()
            .map(CategoryInfo::from)
            .collect(),
    )
}

/// POST /api/commission_structure/preview
pub async fn preview(Json(structure): Json<CommissionStructure>) -> Json<CommissionPreview> {
    Json(service::preview(&structure))
}

/// POST /api/commission_structure/validate
pub async fn validate(Json(structure): Json<CommissionStructure>) -> Json<ValidationReport> {
    Json(service::validate(&structure))
}

/// POST /api/commission_structure/split
pub async fn split(Json(req): Json<RevenueSplitRequest>) -> Result<Json<RevenueSplit>, Response> {
    service::split(&req.structure, &req.scenario, req.revenue)
        .map(Json)
        .map_err(error_response)
}

/// GET /api/commission_structure/:category
pub async fn get_by_category(
    Path(category): Path<String>,
    headers: HeaderMap,
) -> Result<Json<CommissionStructure>, Response> {
    let category = parse_category(&category)?;
    let api = dcarbon_api::client().map_err(|e| error_response(e.into()))?;
    let auth = auth_header(&headers);

    service::fetch(api, category, auth.as_deref())
        .await
        .map(Json)
        .map_err(error_response)
}

/// PUT /api/commission_structure/:category
pub async fn submit(
    Path(category): Path<String>,
    headers: HeaderMap,
    Json(structure): Json<CommissionStructure>,
) -> Result<Json<CommissionSubmitResponse>, Response> {
    let category = parse_category(&category)?;
    let api = dcarbon_api::client().map_err(|e| error_response(e.into()))?;
    let auth = auth_header(&headers);

    service::submit(api, category, &structure, auth.as_deref())
        .await
        .map(Json)
        .map_err(error_response)
}

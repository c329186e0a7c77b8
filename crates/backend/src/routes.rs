use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 COMMISSION STRUCTURE
        // ========================================
        // Чистые расчёты (без обращения к удалённому API)
        .route(
            "/api/commission_structure/categories",
            get(handlers::a001_commission_structure::list_categories),
        )
        .route(
            "/api/commission_structure/preview",
            post(handlers::a001_commission_structure::preview),
        )
        .route(
            "/api/commission_structure/validate",
            post(handlers::a001_commission_structure::validate),
        )
        .route(
            "/api/commission_structure/split",
            post(handlers::a001_commission_structure::split),
        )
        // Загрузка и отправка через удалённый API
        .route(
            "/api/commission_structure/:category",
            get(handlers::a001_commission_structure::get_by_category)
                .put(handlers::a001_commission_structure::submit),
        )
}

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
        // A001 Proposals
        // ========================================
        .route("/api/a001/proposals", get(handlers::a001_proposal::list_all))
        .route("/api/a001/proposals/query", get(handlers::a001_proposal::query))
        .route("/api/a001/proposals/export", get(handlers::a001_proposal::export))
        .route(
            "/api/a001/proposals/validate",
            post(handlers::a001_proposal::validate),
        )
        .route(
            "/api/a001/proposals/:id",
            get(handlers::a001_proposal::get_by_id),
        )
        // ========================================
        // A002 Questionnaires
        // ========================================
        .route(
            "/api/a002/questionnaires",
            get(handlers::a002_questionnaire::list_all),
        )
        .route(
            "/api/a002/questionnaires/query",
            get(handlers::a002_questionnaire::query),
        )
        .route(
            "/api/a002/questionnaires/export",
            get(handlers::a002_questionnaire::export),
        )
        .route(
            "/api/a002/questionnaires/validate",
            post(handlers::a002_questionnaire::validate),
        )
        .route(
            "/api/a002/questionnaires/:id",
            get(handlers::a002_questionnaire::get_by_id),
        )
        // ========================================
        // A003 Cost breakdown
        // ========================================
        .route(
            "/api/a003/cost-breakdowns",
            get(handlers::a003_cost_breakdown::list_all),
        )
        .route(
            "/api/a003/cost-breakdowns/query",
            get(handlers::a003_cost_breakdown::query),
        )
        .route(
            "/api/a003/cost-breakdowns/export",
            get(handlers::a003_cost_breakdown::export),
        )
        .route(
            "/api/a003/cost-breakdowns/:id",
            get(handlers::a003_cost_breakdown::get_by_id),
        )
        // ========================================
        // A004 Kanban
        // ========================================
        .route("/api/a004/kanban/board", get(handlers::a004_kanban_card::board))
        .route(
            "/api/a004/kanban/cards",
            get(handlers::a004_kanban_card::list_all),
        )
        .route(
            "/api/a004/kanban/cards/query",
            get(handlers::a004_kanban_card::query),
        )
        .route(
            "/api/a004/kanban/cards/export",
            get(handlers::a004_kanban_card::export),
        )
        .route(
            "/api/a004/kanban/cards/:id",
            get(handlers::a004_kanban_card::get_by_id),
        )
        // ========================================
        // A005 Contract employees
        // ========================================
        .route(
            "/api/a005/contract-employees",
            get(handlers::a005_contract_employee::list_all),
        )
        .route(
            "/api/a005/contract-employees/query",
            get(handlers::a005_contract_employee::query),
        )
        .route(
            "/api/a005/contract-employees/export",
            get(handlers::a005_contract_employee::export),
        )
        .route(
            "/api/a005/contract-employees/:id",
            get(handlers::a005_contract_employee::get_by_id),
        )
        // ========================================
        // A006 Projects (project management service)
        // ========================================
        .route("/api/a006/projects", get(handlers::a006_project::list_all))
        .route(
            "/api/a006/projects/:id",
            get(handlers::a006_project::get_by_id),
        )
        .route(
            "/api/a006/projects/:id/shutter-specs",
            get(handlers::a006_project::get_shutter_specs)
                .put(handlers::a006_project::update_shutter_specs),
        )
}

// Route exports
pub mod expenses;
pub mod schemes;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::catalog::SchemeCatalog;
use crate::core::Recommender;
use crate::models::HealthResponse;
use crate::services::ExpenseStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SchemeCatalog>,
    pub store: Arc<ExpenseStore>,
    pub recommender: Recommender,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api")
            .configure(expenses::configure)
            .configure(schemes::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, RecommendRequest, RecommendResponse};
use crate::routes::AppState;

/// Configure all scheme-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendCheck", web::post().to(recommend_check));
}

/// Rank eligible schemes for a user profile
///
/// POST /api/recommendCheck
///
/// Request body:
/// ```json
/// {
///   "income": 180000,
///   "occupation": "farmer",
///   "location": "punjab",
///   "gender": "male",
///   "age": 45
/// }
/// ```
async fn recommend_check(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendCheck request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let profile = req.into_inner().into_profile();

    tracing::info!(
        "Scoring schemes for profile: age={}, occupation={}",
        profile.age,
        profile.occupation
    );

    let recommendations = state.recommender.recommend(&state.catalog, &profile);

    tracing::info!(
        "Returning {} recommendations (from {} schemes)",
        recommendations.len(),
        state.catalog.len()
    );

    HttpResponse::Ok().json(RecommendResponse { recommendations })
}

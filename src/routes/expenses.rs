use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::extract_expense;
use crate::models::{ErrorResponse, LogExpenseRequest, LogExpenseResponse, ParseExpenseRequest};
use crate::routes::AppState;

/// Maximum number of logged expenses returned by the list endpoint
const LIST_LIMIT: usize = 100;

/// Configure all expense-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/parse-expense", web::post().to(parse_expense))
        .route("/expenses", web::post().to(log_expense))
        .route("/expenses", web::get().to(list_expenses));
}

/// Parse a natural-language expense sentence
///
/// POST /api/parse-expense
///
/// Request body:
/// ```json
/// { "text": "I spent 500 rupees on pizza" }
/// ```
async fn parse_expense(req: web::Json<ParseExpenseRequest>) -> impl Responder {
    let expense = extract_expense(&req.text);

    tracing::info!(
        "Parsed expense: amount={}, category={}",
        expense.amount,
        expense.category
    );

    HttpResponse::Ok().json(expense)
}

/// Log a structured expense
///
/// POST /api/expenses
///
/// Request body:
/// ```json
/// { "category": "Food", "amount": 500, "description": "Pizza" }
/// ```
async fn log_expense(
    state: web::Data<AppState>,
    req: web::Json<LogExpenseRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for log_expense request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let expense = state
        .store
        .insert(req.category, req.amount, req.description)
        .await;

    tracing::debug!("Logged expense {} ({})", expense.id, expense.category);

    HttpResponse::Ok().json(LogExpenseResponse {
        id: expense.id,
        status: "logged".to_string(),
    })
}

/// List logged expenses
///
/// GET /api/expenses
async fn list_expenses(state: web::Data<AppState>) -> impl Responder {
    let expenses = state.store.list(LIST_LIMIT).await;

    tracing::debug!("Listing {} logged expenses", expenses.len());

    HttpResponse::Ok().json(expenses)
}

// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ExtractedExpense, Scheme, ScoredScheme, ScoringParams, UserProfile};
pub use requests::{LogExpenseRequest, ParseExpenseRequest, RecommendRequest};
pub use responses::{ErrorResponse, HealthResponse, LogExpenseResponse, RecommendResponse};

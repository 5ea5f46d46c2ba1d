//! FinPath Engine - expense parsing and scheme recommendation service
//!
//! This library provides the two heuristic engines behind the FinPath app:
//! a natural-language expense extractor (amount, category, description from
//! a sentence) and a content-based scheme recommender (bag-of-words
//! vectorization, cosine similarity, hard eligibility filters, heuristic
//! score boosting). Both are pure, stateless functions invoked per request.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use catalog::SchemeCatalog;
pub use core::{cosine_similarity, extract_expense, resolve_amount, CountVectorizer, Recommender};
pub use models::{ExtractedExpense, Scheme, ScoredScheme, ScoringParams, UserProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let expense = extract_expense("spent 500 on coffee");
        assert_eq!(expense.amount, 500);
    }
}

// Core algorithm exports
pub mod extractor;
pub mod filters;
pub mod numbers;
pub mod recommender;
pub mod vectorizer;

pub use extractor::extract_expense;
pub use filters::is_eligible;
pub use numbers::resolve_amount;
pub use recommender::Recommender;
pub use vectorizer::{cosine_similarity, CountVectorizer};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::UserProfile;

/// Request to parse a natural-language expense sentence.
///
/// No validation rules: the extractor is a total function and empty text
/// degrades to documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseExpenseRequest {
    pub text: String,
}

/// Request to score the scheme catalog against a user profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(range(min = 0.0))]
    pub income: f64,
    pub occupation: String,
    pub location: String,
    pub gender: String,
    #[serde(default)]
    #[validate(range(max = 150))]
    pub age: u32,
}

impl RecommendRequest {
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            income: self.income,
            occupation: self.occupation,
            location: self.location,
            gender: self.gender,
            age: self.age,
        }
    }
}

/// Request to log a structured expense
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogExpenseRequest {
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

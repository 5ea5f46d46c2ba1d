use serde::{Deserialize, Serialize};

/// User profile supplied to the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub income: f64,
    pub occupation: String,
    pub location: String,
    pub gender: String,
    #[serde(default)]
    pub age: u32,
}

/// Structured expense extracted from a natural-language sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedExpense {
    pub amount: u64,
    pub category: String,
    pub description: String,
}

/// Government scheme record from the embedded catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scheme {
    pub id: u32,
    pub name: String,
    pub launched: String,
    pub category: String,
    pub about: String,
    pub target: String,
    #[serde(rename = "minAge", alias = "min_age")]
    pub min_age: u32,
    #[serde(rename = "maxAge", alias = "max_age")]
    pub max_age: u32,
    /// "all" or a specific gender value
    pub gender: String,
    pub benefits: String,
    pub documents: String,
    pub features: String,
    /// Descriptive keyword corpus used for vectorization
    pub text: String,
}

/// A scheme projection with its match score and explainability tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredScheme {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launched: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub benefit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub tags: Vec<String>,
}

impl ScoredScheme {
    pub fn from_scheme(scheme: &Scheme, match_score: u8, tags: Vec<String>) -> Self {
        Self {
            name: scheme.name.clone(),
            launched: Some(scheme.launched.clone()),
            category: Some(scheme.category.clone()),
            about: Some(scheme.about.clone()),
            target: Some(scheme.target.clone()),
            benefit: scheme.benefits.clone(),
            documents: Some(scheme.documents.clone()),
            features: Some(scheme.features.clone()),
            match_score,
            tags,
        }
    }

    /// Generic savings-account entry returned when no scheme qualifies
    pub fn fallback(match_score: u8) -> Self {
        Self {
            name: "General Savings Account".to_string(),
            launched: None,
            category: None,
            about: None,
            target: None,
            benefit: "Standard banking facilities for everyone.".to_string(),
            documents: None,
            features: None,
            match_score,
            tags: vec!["savings".to_string()],
        }
    }
}

/// Heuristic overlay parameters for the scoring function
#[derive(Debug, Clone, Copy)]
pub struct ScoringParams {
    /// Points added when the profile occupation appears in the scheme text
    pub occupation_boost: u8,
    /// Schemes scoring at or below this are dropped
    pub score_threshold: u8,
    /// Fixed score of the fallback savings-account entry
    pub fallback_score: u8,
    /// Maximum number of explainability tags per scheme
    pub max_tags: usize,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            occupation_boost: 20,
            score_threshold: 10,
            fallback_score: 50,
            max_tags: 3,
        }
    }
}

use crate::catalog::SchemeCatalog;
use crate::core::filters::is_eligible;
use crate::core::vectorizer::{cosine_similarity, CountVectorizer};
use crate::models::{ScoredScheme, ScoringParams, UserProfile};

/// Profiles older than this get retirement signal words appended
const SENIOR_AGE: u32 = 55;

/// Incomes below this get low-income signal words appended
const LOW_INCOME_THRESHOLD: f64 = 250_000.0;

/// Content-based recommendation engine over the scheme catalog.
///
/// # Pipeline stages
/// 1. Build a synthetic user document from the profile
/// 2. Fit a bag-of-words vectorizer on user text + scheme texts, per call
/// 3. Hard eligibility filtering (age range, gender)
/// 4. Cosine similarity scaled to 0-100, occupation boost, clamp
/// 5. Threshold cut, explainability tags, sort by score descending
///
/// Stateless across calls: the vocabulary and vectors are re-derived from
/// the current profile and catalog on every invocation.
#[derive(Debug, Clone, Copy)]
pub struct Recommender {
    params: ScoringParams,
}

impl Recommender {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }

    pub fn with_default_params() -> Self {
        Self {
            params: ScoringParams::default(),
        }
    }

    /// Rank eligible schemes for a user profile, descending by match score.
    ///
    /// Never returns an empty list: when no scheme qualifies, a single
    /// generic savings-account entry with a fixed score is returned.
    pub fn recommend(&self, catalog: &SchemeCatalog, profile: &UserProfile) -> Vec<ScoredScheme> {
        let user_text = build_user_text(profile);

        // Corpus = user document followed by scheme texts, in catalog order
        let corpus: Vec<&str> = std::iter::once(user_text.as_str())
            .chain(catalog.schemes().iter().map(|s| s.text.as_str()))
            .collect();

        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&corpus);
        let vectors = vectorizer.transform(&corpus);

        let occupation = profile.occupation.to_lowercase();
        let user_tokens: Vec<&str> = user_text.split_whitespace().collect();

        let mut scored: Vec<ScoredScheme> = Vec::new();
        for (i, scheme) in catalog.schemes().iter().enumerate() {
            if !is_eligible(scheme, profile) {
                continue;
            }

            let similarity = cosine_similarity(&vectors[0], &vectors[i + 1]);

            // Truncated percentage, not rounded
            let mut score = (similarity * 100.0) as u8;

            // Heuristic overlay: exact occupation mention beats pure
            // vector similarity
            if scheme.text.contains(&occupation) {
                score = score.saturating_add(self.params.occupation_boost);
            }
            let score = score.min(100);

            if score > self.params.score_threshold {
                let tags: Vec<String> = scheme
                    .text
                    .split_whitespace()
                    .filter(|word| user_tokens.contains(word))
                    .take(self.params.max_tags)
                    .map(String::from)
                    .collect();

                scored.push(ScoredScheme::from_scheme(scheme, score, tags));
            }
        }

        // Stable sort keeps catalog order as the tie-break
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        if scored.is_empty() {
            return vec![ScoredScheme::fallback(self.params.fallback_score)];
        }
        scored
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_params()
    }
}

/// Convert profile attributes into a search-query document, with heuristic
/// signal words for seniors, low incomes, and agricultural occupations.
fn build_user_text(profile: &UserProfile) -> String {
    let mut user_text = format!(
        "{} {} {}",
        profile.occupation, profile.gender, profile.location
    );

    if profile.age > SENIOR_AGE {
        user_text.push_str(" old retirement senior");
    }
    if profile.income < LOW_INCOME_THRESHOLD {
        user_text.push_str(" low income assistance support");
    }

    let occupation = profile.occupation.to_lowercase();
    if occupation == "farmer" || occupation == "agri" {
        user_text.push_str(" agriculture kisan cultivation");
    }

    user_text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SchemeCatalog;

    fn create_test_profile(age: u32, occupation: &str, income: f64) -> UserProfile {
        UserProfile {
            income,
            occupation: occupation.to_string(),
            location: "delhi".to_string(),
            gender: "male".to_string(),
            age,
        }
    }

    fn load_catalog() -> SchemeCatalog {
        SchemeCatalog::load().expect("embedded catalog parses")
    }

    #[test]
    fn test_underage_profile_gets_fallback_only() {
        let recommender = Recommender::with_default_params();
        let catalog = load_catalog();
        let profile = create_test_profile(5, "student", 0.0);

        let recommendations = recommender.recommend(&catalog, &profile);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].name, "General Savings Account");
        assert_eq!(recommendations[0].match_score, 50);
        assert_eq!(recommendations[0].tags, vec!["savings"]);
    }

    #[test]
    fn test_occupation_boost_promotes_matching_schemes() {
        let recommender = Recommender::with_default_params();
        let catalog = load_catalog();
        // "entrepreneur" appears in the MUDRA and Stand Up India texts
        let profile = create_test_profile(30, "entrepreneur", 100_000.0);

        let recommendations = recommender.recommend(&catalog, &profile);

        assert!(recommendations
            .iter()
            .any(|r| r.name.contains("MUDRA") || r.name.contains("Stand Up India")));
    }

    #[test]
    fn test_scores_sorted_descending() {
        let recommender = Recommender::with_default_params();
        let catalog = load_catalog();
        let profile = create_test_profile(30, "entrepreneur", 100_000.0);

        let recommendations = recommender.recommend(&catalog, &profile);

        for window in recommendations.windows(2) {
            assert!(window[0].match_score >= window[1].match_score);
        }
    }

    #[test]
    fn test_scores_within_range_and_above_threshold() {
        let recommender = Recommender::with_default_params();
        let catalog = load_catalog();
        let profile = create_test_profile(30, "entrepreneur", 100_000.0);

        let recommendations = recommender.recommend(&catalog, &profile);

        for r in &recommendations {
            assert!(r.match_score <= 100);
            assert!(r.match_score > 10);
        }
    }

    #[test]
    fn test_tags_capped_at_three() {
        let recommender = Recommender::with_default_params();
        let catalog = load_catalog();
        let profile = create_test_profile(30, "entrepreneur", 100_000.0);

        let recommendations = recommender.recommend(&catalog, &profile);

        assert!(recommendations.iter().any(|r| !r.tags.is_empty()));
        for r in &recommendations {
            assert!(r.tags.len() <= 3);
        }
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let recommender = Recommender::with_default_params();
        let catalog = load_catalog();
        let profile = create_test_profile(35, "entrepreneur", 180_000.0);

        let first = recommender.recommend(&catalog, &profile);
        let second = recommender.recommend(&catalog, &profile);

        assert_eq!(first, second);
    }

    #[test]
    fn test_user_text_signal_words() {
        let senior = create_test_profile(60, "farmer", 100_000.0);
        let text = build_user_text(&senior);

        assert!(text.contains("retirement"));
        assert!(text.contains("low income"));
        assert!(text.contains("kisan"));

        let young = create_test_profile(30, "engineer", 900_000.0);
        let text = build_user_text(&young);

        assert!(!text.contains("retirement"));
        assert!(!text.contains("low income"));
        assert!(!text.contains("kisan"));
    }
}

use std::collections::{BTreeSet, HashMap};

/// Minimal bag-of-words vectorizer with term-frequency counts.
///
/// The vocabulary is the union of all lowercased whitespace tokens seen
/// during `fit`, with `.` and `,` stripped before tokenizing. It is kept in
/// a `BTreeSet`, so vector positions follow lexicographic order and are
/// comparably indexed across documents within one call. No IDF weighting,
/// no normalization.
#[derive(Debug, Default)]
pub struct CountVectorizer {
    vocabulary: BTreeSet<String>,
}

impl CountVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the vocabulary from a set of documents.
    pub fn fit(&mut self, documents: &[&str]) {
        for document in documents {
            for token in tokenize(document) {
                self.vocabulary.insert(token);
            }
        }
    }

    /// Map each document to a fixed-length term-frequency vector over the
    /// sorted vocabulary.
    pub fn transform(&self, documents: &[&str]) -> Vec<Vec<u32>> {
        documents
            .iter()
            .map(|document| {
                let mut counts: HashMap<String, u32> = HashMap::new();
                for token in tokenize(document) {
                    *counts.entry(token).or_insert(0) += 1;
                }
                self.vocabulary
                    .iter()
                    .map(|word| counts.get(word).copied().unwrap_or(0))
                    .collect()
            })
            .collect()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace(['.', ','], "")
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Cosine similarity between two equal-length term-frequency vectors,
/// in [0, 1] for non-negative vectors. A zero-magnitude vector carries no
/// signal and yields exactly 0.0, which also avoids division by zero.
pub fn cosine_similarity(a: &[u32], b: &[u32]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| (*x as f64) * (*y as f64)).sum();
    let magnitude_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }
    dot / (magnitude_a * magnitude_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_transform_counts() {
        let mut vectorizer = CountVectorizer::new();
        let corpus = ["hello world", "hello hello"];
        vectorizer.fit(&corpus);
        let vectors = vectorizer.transform(&corpus);

        // Vocabulary is sorted: ["hello", "world"]
        assert_eq!(vectorizer.vocabulary_len(), 2);
        assert_eq!(vectors, vec![vec![1, 1], vec![2, 0]]);
    }

    #[test]
    fn test_punctuation_stripped_before_tokenizing() {
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&["savings, account."]);
        let vectors = vectorizer.transform(&["savings account"]);

        assert_eq!(vectorizer.vocabulary_len(), 2);
        assert_eq!(vectors[0], vec![1, 1]);
    }

    #[test]
    fn test_unknown_tokens_count_zero() {
        let mut vectorizer = CountVectorizer::new();
        vectorizer.fit(&["pension retirement"]);
        let vectors = vectorizer.transform(&["insurance cover"]);

        assert_eq!(vectors[0], vec![0, 0]);
    }

    #[test]
    fn test_cosine_self_similarity_is_one() {
        let v = vec![1, 2, 3];
        let similarity = cosine_similarity(&v, &v);
        assert!((similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0, 0, 0], &[1, 2, 3]), 0.0);
        assert_eq!(cosine_similarity(&[1, 2, 3], &[0, 0, 0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        assert_eq!(cosine_similarity(&[1, 0], &[0, 1]), 0.0);
    }
}

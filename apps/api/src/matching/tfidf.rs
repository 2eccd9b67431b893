//! TF-IDF vector-space model over a single request-scoped corpus.
//!
//! The corpus lives for one matching call: term statistics are computed over
//! the résumé plus the job documents handed in, used once, and discarded.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Sparse term-weight vector for one document. Only terms present in the
/// document appear; every stored weight is strictly positive. A sorted map
/// keeps float accumulation order (and therefore scores) identical across
/// calls with identical inputs.
pub type TermVector = BTreeMap<String, f64>;

/// Splits text into normalized terms: Unicode-lowercased, broken on any
/// non-alphanumeric character, empties dropped ("Node.js" → "node", "js").
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Computes one TF-IDF vector per document over the given corpus.
///
/// TF is the term count normalized by document length. IDF uses the smoothed
/// form `ln((1 + n_docs) / (1 + df)) + 1`, which keeps every present term at
/// a positive weight even when it occurs in all documents.
pub fn build_vectors(docs: &[Vec<String>]) -> Vec<TermVector> {
    let n_docs = docs.len() as f64;

    // Document frequency across the corpus.
    let mut df: HashMap<&str, usize> = HashMap::new();
    for doc in docs {
        let mut seen: HashSet<&str> = HashSet::new();
        for term in doc {
            if seen.insert(term) {
                *df.entry(term).or_insert(0) += 1;
            }
        }
    }

    docs.iter()
        .map(|doc| {
            if doc.is_empty() {
                return TermVector::new();
            }

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for term in doc {
                *counts.entry(term).or_insert(0) += 1;
            }

            let doc_len = doc.len() as f64;
            counts
                .into_iter()
                .map(|(term, count)| {
                    let tf = count as f64 / doc_len;
                    let idf = ((1.0 + n_docs) / (1.0 + df[term] as f64)).ln() + 1.0;
                    (term.to_string(), tf * idf)
                })
                .collect()
        })
        .collect()
}

/// Cosine similarity between two sparse term vectors: dot product over the
/// term intersection divided by the product of the full L2 norms.
///
/// Zero-norm policy: a vector with no terms has no defined direction, so the
/// similarity is 0.0 and the caller's threshold drops the pairing. NaN never
/// reaches sorting or filtering.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Iterate the smaller vector; terms unique to one side contribute 0.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|v| w * v))
        .sum();

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&str]) -> Vec<Vec<String>> {
        texts.iter().map(|t| tokenize(t)).collect()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        assert_eq!(tokenize("Node.js"), vec!["node", "js"]);
        assert_eq!(tokenize("React, TypeScript!"), vec!["react", "typescript"]);
    }

    #[test]
    fn test_tokenize_empty_and_symbol_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n").is_empty());
        assert!(tokenize("!!! --- ***").is_empty());
    }

    #[test]
    fn test_vectors_only_contain_present_terms() {
        let docs = corpus(&["rust tokio", "chef cooking"]);
        let vectors = build_vectors(&docs);
        assert!(vectors[0].contains_key("rust"));
        assert!(!vectors[0].contains_key("chef"));
        assert!(!vectors[1].contains_key("tokio"));
    }

    #[test]
    fn test_rare_term_outweighs_common_term() {
        // "common" appears in all three documents, "rare" only in the first;
        // both occur once in document 0, so IDF alone separates them.
        let docs = corpus(&["rare common", "common alpha", "common beta"]);
        let vectors = build_vectors(&docs);
        assert!(vectors[0]["rare"] > vectors[0]["common"]);
    }

    #[test]
    fn test_all_weights_are_positive() {
        let docs = corpus(&["shared term", "shared term", "shared term"]);
        for vector in build_vectors(&docs) {
            assert!(vector.values().all(|w| *w > 0.0));
        }
    }

    #[test]
    fn test_cosine_of_identical_vectors_is_one() {
        let docs = corpus(&["rust systems engineer", "rust systems engineer"]);
        let vectors = build_vectors(&docs);
        let score = cosine_similarity(&vectors[0], &vectors[1]);
        assert!((score - 1.0).abs() < 1e-9, "expected 1.0, got {score}");
    }

    #[test]
    fn test_cosine_of_disjoint_vectors_is_zero() {
        let docs = corpus(&["rust tokio async", "chef cooking knives"]);
        let vectors = build_vectors(&docs);
        assert_eq!(cosine_similarity(&vectors[0], &vectors[1]), 0.0);
    }

    #[test]
    fn test_cosine_with_empty_vector_is_zero_not_nan() {
        let docs = corpus(&["rust tokio", ""]);
        let vectors = build_vectors(&docs);
        let score = cosine_similarity(&vectors[0], &vectors[1]);
        assert_eq!(score, 0.0);
        assert!(!score.is_nan());
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let docs = corpus(&["rust grpc tokio", "rust developer"]);
        let vectors = build_vectors(&docs);
        let ab = cosine_similarity(&vectors[0], &vectors[1]);
        let ba = cosine_similarity(&vectors[1], &vectors[0]);
        assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn test_partial_overlap_scores_between_zero_and_one() {
        let docs = corpus(&["rust tokio async grpc", "rust developer"]);
        let vectors = build_vectors(&docs);
        let score = cosine_similarity(&vectors[0], &vectors[1]);
        assert!(score > 0.0 && score < 1.0, "got {score}");
    }
}

//! TF-IDF cosine similarity over two documents, boosted by shared
//! technical vocabulary.

use std::collections::{HashMap, HashSet};

use crate::text::technical::is_technical_keyword;
use crate::text::tokenizer::{tokenize, Tokens};

/// Boost added per shared technical token.
pub const TECH_BOOST_STEP: f64 = 0.02;
/// Ceiling on the total technical boost.
pub const TECH_BOOST_MAX: f64 = 0.15;

type Vector<'a> = HashMap<&'a str, f64>;

/// `count / len` for every distinct token.
pub fn term_frequencies<'a>(tokens: &'a Tokens) -> Vector<'a> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens.iter() {
        *counts.entry(token).or_default() += 1;
    }
    let total = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(token, count)| (token, count as f64 / total))
        .collect()
}

/// `ln(N / (1 + df))` over the given documents. With two documents a token
/// found in both weighs `ln(2/3)` and a token found in one weighs zero.
pub fn inverse_document_frequencies<'a>(documents: &[&'a Tokens]) -> Vector<'a> {
    let sets: Vec<HashSet<&str>> = documents.iter().map(|d| d.to_set()).collect();
    let n = documents.len() as f64;

    let mut idf = HashMap::new();
    for set in &sets {
        for &token in set {
            idf.entry(token).or_insert_with(|| {
                let df = sets.iter().filter(|s| s.contains(token)).count() as f64;
                (n / (1.0 + df)).ln()
            });
        }
    }
    idf
}

fn weigh<'a>(tf: Vector<'a>, idf: &Vector<'a>) -> Vector<'a> {
    tf.into_iter()
        .map(|(token, f)| (token, f * idf.get(token).copied().unwrap_or(0.0)))
        .collect()
}

/// Cosine of two sparse vectors; 0.0 when either has zero magnitude.
pub fn cosine_similarity(a: &Vector<'_>, b: &Vector<'_>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(token, x)| b.get(token).map(|y| x * y))
        .sum();
    let magnitude_a = a.values().map(|v| v * v).sum::<f64>().sqrt();
    let magnitude_b = b.values().map(|v| v * v).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }
    dot / (magnitude_a * magnitude_b)
}

/// `min(0.15, 0.02 × shared technical tokens)`.
pub fn technical_boost(a: &Tokens, b: &Tokens) -> f64 {
    let a = a.to_set();
    let b = b.to_set();
    let shared = a
        .intersection(&b)
        .filter(|token| is_technical_keyword(token))
        .count();
    (shared as f64 * TECH_BOOST_STEP).min(TECH_BOOST_MAX)
}

/// Plain TF-IDF cosine, before any boost.
fn tfidf_cosine(tokens1: &Tokens, tokens2: &Tokens) -> f64 {
    let idf = inverse_document_frequencies(&[tokens1, tokens2]);
    let v1 = weigh(term_frequencies(tokens1), &idf);
    let v2 = weigh(term_frequencies(tokens2), &idf);
    cosine_similarity(&v1, &v2)
}

/// Similarity in [0, 1]: TF-IDF cosine plus the technical boost, capped at 1.
pub fn enhanced_similarity(text1: &str, text2: &str) -> f64 {
    let tokens1 = tokenize(text1);
    let tokens2 = tokenize(text2);
    let base = tfidf_cosine(&tokens1, &tokens2);
    (base + technical_boost(&tokens1, &tokens2)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_self_similarity_is_one() {
        let text = "Rust engineer building distributed storage with tokio and postgres";
        assert!((tfidf_cosine(&tokenize(text), &tokenize(text)) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let (a, b) = (tokenize("kotlin android mobile"), tokenize("accounting ledger audit"));
        assert_eq!(tfidf_cosine(&a, &b), 0.0);
        assert_eq!(enhanced_similarity("kotlin android mobile", "accounting ledger audit"), 0.0);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(enhanced_similarity("", "python docker"), 0.0);
        assert_eq!(enhanced_similarity("python docker", ""), 0.0);
    }

    #[test]
    fn test_idf_weights_for_two_documents() {
        let a = tokenize("python docker");
        let b = tokenize("python kubernetes");
        let idf = inverse_document_frequencies(&[&a, &b]);
        assert!((idf["python"] - (2.0f64 / 3.0).ln()).abs() < EPS);
        assert_eq!(idf["docker"], 0.0);
        assert_eq!(idf["kubernetes"], 0.0);
    }

    #[test]
    fn test_term_frequencies_sum_to_one() {
        let tokens = tokenize("rust rust go tokio");
        let tf = term_frequencies(&tokens);
        assert!((tf.values().sum::<f64>() - 1.0).abs() < EPS);
        assert!((tf["rust"] - 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_boost_is_capped() {
        let text = "python java docker kubernetes terraform ansible redis mongodb mysql \
                    postgresql graphql jenkins pytest react angular";
        let a = tokenize(text);
        assert!((technical_boost(&a, &a) - TECH_BOOST_MAX).abs() < EPS);
        assert!(enhanced_similarity(text, text) <= 1.0);
    }

    #[test]
    fn test_boost_counts_shared_technical_tokens() {
        let a = tokenize("python docker meetings");
        let b = tokenize("python docker meetings kubernetes");
        assert!((technical_boost(&a, &b) - 2.0 * TECH_BOOST_STEP).abs() < EPS);
    }
}

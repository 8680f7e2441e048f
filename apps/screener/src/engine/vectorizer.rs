//! Vectorizer — smoothed TF-IDF fitted over a single job's corpus.
//!
//! Weights:
//! - TF(t, d)  = raw count of `t` in `d`
//! - IDF(t)    = ln((1 + N) / (1 + df(t))) + 1
//! - w(t, d)   = TF × IDF, then the vector is L2-normalized
//!
//! The vocabulary is sorted, so every vector of one fit lays its terms out in
//! the same order and lookups by term never depend on hash iteration order.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::debug;

use crate::engine::corpus::Corpus;
use crate::models::Document;

// ────────────────────────────────────────────────────────────────────────────
// Vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// Sorted distinct terms of one corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn from_documents<'a>(documents: impl IntoIterator<Item = &'a Document>) -> Self {
        let distinct: BTreeSet<&str> = documents
            .into_iter()
            .flat_map(|doc| doc.tokens().iter().map(String::as_str))
            .collect();

        let terms: Vec<String> = distinct.into_iter().map(String::from).collect();
        let positions = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Self { terms, positions }
    }

    pub fn position(&self, term: &str) -> Option<usize> {
        self.positions.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Term vectors
// ────────────────────────────────────────────────────────────────────────────

/// Non-negative weights over a vocabulary, one slot per term.
#[derive(Debug, Clone)]
pub struct TermVector {
    vocabulary: Arc<Vocabulary>,
    weights: Vec<f64>,
}

impl TermVector {
    /// All-zero vector over `vocabulary`.
    pub fn zeros(vocabulary: Arc<Vocabulary>) -> Self {
        let weights = vec![0.0; vocabulary.len()];
        Self {
            vocabulary,
            weights,
        }
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Always equals the vocabulary size.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Weight of `term`, 0.0 when the term is outside the vocabulary.
    pub fn weight(&self, term: &str) -> f64 {
        self.vocabulary
            .position(term)
            .map(|i| self.weights[i])
            .unwrap_or(0.0)
    }

    /// Non-zero entries in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.vocabulary
            .terms()
            .iter()
            .zip(self.weights.iter())
            .filter(|(_, w)| **w > 0.0)
            .map(|(term, &w)| (term.as_str(), w))
    }

    pub fn norm(&self) -> f64 {
        self.weights.iter().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }

    /// Divides by the Euclidean norm. A zero vector is left as is.
    fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for w in &mut self.weights {
                *w /= norm;
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Model
// ────────────────────────────────────────────────────────────────────────────

/// IDF table fitted over one corpus. Never reused across jobs.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocabulary: Arc<Vocabulary>,
    idf: Vec<f64>,
    doc_count: usize,
}

impl TfIdfModel {
    pub fn fit(corpus: &Corpus<'_>) -> Self {
        let vocabulary = Arc::new(Vocabulary::from_documents(corpus.documents()));

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for doc in corpus.documents() {
            let present: BTreeSet<usize> = doc
                .tokens()
                .iter()
                .filter_map(|t| vocabulary.position(t))
                .collect();
            for i in present {
                doc_freq[i] += 1;
            }
        }

        let n = corpus.size() as f64;
        let idf = doc_freq
            .into_iter()
            .map(|df| smoothed_idf(n, df as f64))
            .collect();

        Self {
            vocabulary,
            idf,
            doc_count: corpus.size(),
        }
    }

    /// TF × IDF for `doc`, L2-normalized. Tokens outside the vocabulary are ignored.
    pub fn transform(&self, doc: &Document) -> TermVector {
        let mut vector = TermVector::zeros(Arc::clone(&self.vocabulary));
        if self.vocabulary.is_empty() {
            return vector;
        }
        for token in doc.tokens() {
            if let Some(i) = self.vocabulary.position(token) {
                vector.weights[i] += 1.0;
            }
        }
        for (w, idf) in vector.weights.iter_mut().zip(&self.idf) {
            *w *= idf;
        }
        vector.l2_normalize();
        vector
    }

    #[cfg(test)]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.position(term).map(|i| self.idf[i])
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    pub fn doc_count(&self) -> usize {
        self.doc_count
    }
}

fn smoothed_idf(n: f64, df: f64) -> f64 {
    ((1.0 + n) / (1.0 + df)).ln() + 1.0
}

pub struct Vectorizer;

impl Vectorizer {
    /// One vector per corpus document, job first.
    pub fn fit_transform(corpus: &Corpus<'_>) -> Vec<TermVector> {
        let model = TfIdfModel::fit(corpus);
        debug!(
            "Fitted {} terms over {} documents",
            model.vocabulary().len(),
            model.doc_count()
        );
        corpus.documents().map(|doc| model.transform(doc)).collect()
    }
}

//! Extractive summarization via latent semantic analysis.
//!
//! Builds a term-sentence frequency matrix, finds the dominant latent
//! concepts through a power-iteration eigendecomposition of the sentence Gram
//! matrix, and keeps the sentences carrying the most concept weight.

use std::collections::HashMap;

use itertools::Itertools;

const DEFAULT_SENTENCE_COUNT: usize = 15;
const CONCEPTS: usize = 3;
const POWER_ITERATIONS: usize = 60;

#[derive(Debug, Clone)]
pub struct LsaSummarizer {
    sentence_count: usize,
}

impl LsaSummarizer {
    pub fn new() -> Self {
        Self {
            sentence_count: DEFAULT_SENTENCE_COUNT,
        }
    }

    pub fn with_sentence_count(mut self, sentence_count: usize) -> Self {
        self.sentence_count = sentence_count;
        self
    }

    /// Selects the highest-scoring sentences and emits them in original
    /// document order, joined by single spaces. Documents with no more
    /// sentences than the target come back whole.
    pub fn summarize(&self, text: &str) -> String {
        let sentences = split_sentences(text);
        if sentences.len() <= self.sentence_count {
            return sentences.join(" ");
        }

        let scores = sentence_scores(&sentences);
        let selected: Vec<usize> = scores
            .iter()
            .enumerate()
            .sorted_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal))
            .take(self.sentence_count)
            .map(|(idx, _)| idx)
            .sorted()
            .collect();

        selected
            .iter()
            .map(|&i| sentences[i].as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for LsaSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    sentences
}

fn tokenize(sentence: &str) -> impl Iterator<Item = String> + '_ {
    sentence
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 1)
        .map(|w| w.to_lowercase())
}

/// Per-sentence importance: sigma^2-weighted projection onto the dominant
/// concepts, as in the classic LSA ranking.
fn sentence_scores(sentences: &[String]) -> Vec<f64> {
    let n = sentences.len();

    let mut vocab: HashMap<String, usize> = HashMap::new();
    let mut columns: Vec<HashMap<usize, f64>> = Vec::with_capacity(n);
    for sentence in sentences {
        let mut column = HashMap::new();
        for word in tokenize(sentence) {
            let next = vocab.len();
            let term = *vocab.entry(word).or_insert(next);
            *column.entry(term).or_insert(0.0) += 1.0;
        }
        columns.push(column);
    }

    // Sentence Gram matrix G = AᵀA; its eigenvectors are the right singular
    // vectors of the term-sentence matrix A.
    let mut gram = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in i..n {
            let (small, large) = if columns[i].len() <= columns[j].len() {
                (&columns[i], &columns[j])
            } else {
                (&columns[j], &columns[i])
            };
            let dot: f64 = small
                .iter()
                .filter_map(|(term, v)| large.get(term).map(|w| v * w))
                .sum();
            gram[i][j] = dot;
            gram[j][i] = dot;
        }
    }

    let concepts = CONCEPTS.min(n);
    let mut scores = vec![0.0f64; n];
    for _ in 0..concepts {
        let (eigenvalue, vector) = dominant_eigenpair(&gram);
        if eigenvalue <= f64::EPSILON {
            break;
        }
        for (score, &v) in scores.iter_mut().zip(vector.iter()) {
            *score += eigenvalue * v * v;
        }
        deflate(&mut gram, eigenvalue, &vector);
    }

    scores.iter().map(|s| s.sqrt()).collect()
}

fn dominant_eigenpair(gram: &[Vec<f64>]) -> (f64, Vec<f64>) {
    let n = gram.len();
    let mut v = vec![1.0 / (n as f64).sqrt(); n];
    let mut eigenvalue = 0.0;

    for _ in 0..POWER_ITERATIONS {
        let mut next = vec![0.0f64; n];
        for (i, row) in gram.iter().enumerate() {
            for (j, &g) in row.iter().enumerate() {
                next[i] += g * v[j];
            }
        }
        let norm = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm <= f64::EPSILON {
            return (0.0, v);
        }
        for x in next.iter_mut() {
            *x /= norm;
        }
        eigenvalue = norm;
        v = next;
    }
    (eigenvalue, v)
}

fn deflate(gram: &mut [Vec<f64>], eigenvalue: f64, vector: &[f64]) {
    for i in 0..vector.len() {
        for j in 0..vector.len() {
            gram[i][j] -= eigenvalue * vector[i] * vector[j];
        }
    }
}

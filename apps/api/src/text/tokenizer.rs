//! Word tokenizer with stop word removal.
//!
//! Lowercases the input, treats every character outside `[a-z0-9]` as a
//! separator, and keeps tokens longer than two characters that are not stop
//! words. The lowercased buffer is owned once; tokens are byte spans into it,
//! so iteration is lazy and can be restarted any number of times.

use std::collections::HashSet;

use once_cell::sync::Lazy;

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "is",
        "are", "was", "were", "been", "be", "have", "has", "had", "do", "does", "did", "will",
        "would", "could", "should", "may", "might", "must", "can", "this", "that", "these",
        "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who", "when",
        "where", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other",
        "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
        "s", "t", "just", "don", "now",
    ]
    .into_iter()
    .collect()
});

/// Minimum token length is 3 characters; shorter runs are dropped.
const MIN_TOKEN_LEN: usize = 3;

/// Tokenized text: owns the lowercased buffer, hands out `&str` slices via byte spans.
#[derive(Debug, Clone, Default)]
pub struct Tokens {
    buffer: String,
    spans: Vec<(u32, u32)>,
}

impl Tokens {
    /// Returns an iterator over the token slices. Can be called repeatedly.
    pub fn iter(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.spans
            .iter()
            .map(|&(s, e)| &self.buffer[s as usize..e as usize])
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Distinct tokens, for membership tests.
    pub fn to_set(&self) -> HashSet<&str> {
        self.iter().collect()
    }
}

/// Returns true if `word` is in the tokenizer's stop word set.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Tokenize text: lowercase, split on anything that is not `[a-z0-9]`,
/// drop tokens of two characters or fewer and stop words.
pub fn tokenize(text: &str) -> Tokens {
    let buffer = text.to_lowercase();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in buffer.char_indices() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            push_span(&buffer, s, i, &mut spans);
        }
    }
    if let Some(s) = start {
        push_span(&buffer, s, buffer.len(), &mut spans);
    }

    Tokens { buffer, spans }
}

fn push_span(buffer: &str, start: usize, end: usize, spans: &mut Vec<(u32, u32)>) {
    // Tokens are ASCII, so byte length equals character length.
    let token = &buffer[start..end];
    if token.len() >= MIN_TOKEN_LEN && !is_stop_word(token) {
        spans.push((start as u32, end as u32));
    }
}

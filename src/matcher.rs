//! Literal-to-key matching against the flattened catalog.
//!
//! Matching runs two passes over the catalog: an exact case-insensitive
//! comparison, then an approximate pass that accepts the best similarity
//! ratio strictly above a fixed threshold.

use crate::catalog::FlatCatalog;

/// Similarity a catalog value must strictly exceed in the approximate pass.
const SIMILARITY_THRESHOLD: f64 = 0.9;

/// Find the catalog key whose value best matches `literal`.
///
/// The exact pass returns the first entry, in catalog document order, whose
/// value equals the literal case-insensitively. The approximate pass keeps
/// a running maximum that is only replaced on strict improvement, so ties
/// resolve to the earlier entry. Returns `None` when neither pass succeeds;
/// that is not an error, the candidate is simply not migratable.
pub fn find_best_match<'a>(literal: &str, catalog: &'a FlatCatalog) -> Option<&'a str> {
    let folded = literal.to_lowercase();

    for entry in catalog.iter() {
        if entry.value.to_lowercase() == folded {
            return Some(&entry.key);
        }
    }

    let mut best_ratio = 0.0;
    let mut best_key = None;

    for entry in catalog.iter() {
        let ratio = similarity_ratio(&folded, &entry.value.to_lowercase());
        if ratio > SIMILARITY_THRESHOLD && ratio > best_ratio {
            best_ratio = ratio;
            best_key = Some(entry.key.as_str());
        }
    }

    best_key
}

/// Symmetric similarity of two strings in `0.0..=1.0`.
///
/// Computed as `2 * lcs / (m + n)` over characters, where `lcs` is the
/// longest-common-subsequence length. Equal strings score 1.0, disjoint
/// strings 0.0.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Two-row LCS table.
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in &a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let lcs = prev[b.len()];
    (2.0 * lcs as f64) / ((a.len() + b.len()) as f64)
}

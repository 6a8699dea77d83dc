//! Vector similarity.

/// Cosine similarity between two equal-length dense vectors.
///
/// Returns exactly `0.0` when either vector has zero L2 norm; a zero vector
/// is a defined outcome for sentences whose tokens all fall outside the
/// fitted vocabulary.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

//! Similarity Ranker
//!
//! Blends the crop's averaged requirement with the measured soil values
//! into a single target NPK vector, then scores every fertilizer by cosine
//! similarity against that target and sorts best-first.

use crate::error::RecommendError;
use crate::types::{FertilizerRow, NutrientRecord, RankedCandidate};

/// Weight of the agronomic requirement in the blended target.
pub const REQUIREMENT_WEIGHT: f64 = 0.7;

/// Weight of the user's soil measurement in the blended target.
pub const SOIL_WEIGHT: f64 = 0.3;

/// Magnitudes below this are treated as the zero vector.
const MAGNITUDE_EPSILON: f64 = 1e-12;

/// Cosine of the angle between two NPK vectors.
///
/// Defined as 0.0 when either vector has (near-)zero magnitude, so an
/// all-zero composition scores 0 instead of producing NaN. The result is
/// clamped to [-1, 1] to absorb floating-point drift.
pub fn cosine_similarity(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if mag_a < MAGNITUDE_EPSILON || mag_b < MAGNITUDE_EPSILON {
        return 0.0;
    }

    (dot / (mag_a * mag_b)).clamp(-1.0, 1.0)
}

/// Rank every fertilizer against the 0.7/0.3 blend of requirement and
/// soil measurement.
///
/// Returns the full list sorted descending by similarity; rows with equal
/// scores keep their input order. Truncating to a top-N view is the
/// caller's concern. An empty fertilizer table yields an empty list, not
/// an error.
pub fn rank_fertilizers(
    rows: &[FertilizerRow],
    requirement: &NutrientRecord,
    soil: &NutrientRecord,
) -> Result<Vec<RankedCandidate>, RecommendError> {
    for (label, record) in [("requirement", requirement), ("soil", soil)] {
        if !record.is_complete() {
            return Err(RecommendError::InvalidInput {
                reason: format!("{} record has a missing or non-finite N/P/K value", label),
            });
        }
    }

    let target_n = REQUIREMENT_WEIGHT * requirement.n + SOIL_WEIGHT * soil.n;
    let target_p = REQUIREMENT_WEIGHT * requirement.p + SOIL_WEIGHT * soil.p;
    let target_k = REQUIREMENT_WEIGHT * requirement.k + SOIL_WEIGHT * soil.k;
    let target = [target_n, target_p, target_k];

    let mut candidates: Vec<RankedCandidate> = rows
        .iter()
        .map(|row| RankedCandidate {
            name: row.name.clone(),
            n: row.n,
            p: row.p,
            k: row.k,
            similarity: cosine_similarity(target, [row.n, row.p, row.k]),
            target_n,
            target_p,
            target_k,
        })
        .collect();

    // sort_by is stable: duplicate compositions produce exactly equal
    // scores and must keep their input order.
    candidates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    Ok(candidates)
}

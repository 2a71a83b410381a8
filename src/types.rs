//! Row and record types shared across the recommendation core
//!
//! All of these are plain value types: constructed once, never mutated.
//! The reference tables are extracted into `CropRow` / `FertilizerRow`
//! vectors at load time so the core never touches a DataFrame.

use serde::{Deserialize, Serialize};

/// A single NPK(+pH) nutrient profile.
///
/// Used for three things: a crop's averaged requirement, a user's soil
/// measurement, and (without pH) a fertilizer's composition percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientRecord {
    pub n: f64,
    pub p: f64,
    pub k: f64,
    /// Not every source carries pH (fertilizer compositions never do).
    pub ph: Option<f64>,
}

impl NutrientRecord {
    pub fn new(n: f64, p: f64, k: f64) -> Self {
        Self { n, p, k, ph: None }
    }

    /// True when N, P and K are all finite.
    pub(crate) fn is_complete(&self) -> bool {
        self.n.is_finite() && self.p.is_finite() && self.k.is_finite()
    }
}

/// One row of the crop requirement table.
///
/// Duplicate crop names are expected (the source data has one row per
/// region/season); the aggregator averages them. Nutrient cells are
/// `Option` because the CSV may carry nulls.
#[derive(Debug, Clone)]
pub struct CropRow {
    pub crop: String,
    pub n: Option<f64>,
    pub p: Option<f64>,
    pub k: Option<f64>,
    pub ph: Option<f64>,
}

/// One row of the fertilizer composition table (percent by weight).
///
/// `name` is a display label, not a key: duplicate names are ranked
/// independently.
#[derive(Debug, Clone)]
pub struct FertilizerRow {
    pub name: String,
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

/// One ranked fertilizer candidate.
///
/// Carries the blended target components alongside the raw composition so
/// downstream reporting can compute nutrient gaps without redoing the
/// blend.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub name: String,
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub similarity: f64,
    pub target_n: f64,
    pub target_p: f64,
    pub target_k: f64,
}

impl RankedCandidate {
    /// Nitrogen shortfall (positive) or excess (negative) vs the target.
    pub fn n_gap(&self) -> f64 {
        self.target_n - self.n
    }

    /// Phosphorus shortfall or excess vs the target.
    pub fn p_gap(&self) -> f64 {
        self.target_p - self.p
    }

    /// Potassium shortfall or excess vs the target.
    pub fn k_gap(&self) -> f64 {
        self.target_k - self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete_rejects_nan() {
        let good = NutrientRecord::new(50.0, 30.0, 40.0);
        assert!(good.is_complete());

        let bad = NutrientRecord::new(f64::NAN, 30.0, 40.0);
        assert!(!bad.is_complete());
    }

    #[test]
    fn test_gap_accessors() {
        let candidate = RankedCandidate {
            name: "Urea".to_string(),
            n: 46.0,
            p: 0.0,
            k: 0.0,
            similarity: 0.9,
            target_n: 78.0,
            target_p: 40.5,
            target_k: 40.0,
        };

        assert_eq!(candidate.n_gap(), 32.0);
        assert_eq!(candidate.p_gap(), 40.5);
        assert_eq!(candidate.k_gap(), 40.0);
    }
}

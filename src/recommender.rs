//! Recommender - coordinator for the aggregate-then-rank pipeline
//!
//! Owns the loaded reference tables and exposes the two operations the
//! presentation layer consumes: the crop list, and a full ranked
//! recommendation for one crop and one soil measurement. Every call
//! recomputes from scratch; there is no derived-result caching.

use crate::aggregator::aggregate_requirements;
use crate::data::ReferenceData;
use crate::error::RecommendError;
use crate::ranker::rank_fertilizers;
use crate::types::{CropRow, FertilizerRow, NutrientRecord, RankedCandidate};
use serde::Serialize;

/// Main recommender over the immutable reference tables.
pub struct Recommender {
    crops: Vec<CropRow>,
    fertilizers: Vec<FertilizerRow>,
}

/// Full result of one recommendation pass.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub crop: String,
    /// Averaged requirement for the crop (N, P, K, pH).
    pub requirement: NutrientRecord,
    /// Every fertilizer, best match first. Truncation is the caller's
    /// concern.
    pub candidates: Vec<RankedCandidate>,
}

impl Recommender {
    pub fn new(data: ReferenceData) -> Self {
        Self {
            crops: data.crops,
            fertilizers: data.fertilizers,
        }
    }

    /// Sorted, de-duplicated crop names (the selection list in a UI).
    pub fn crop_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.crops.iter().map(|r| r.crop.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Aggregate the crop's requirement, then rank every fertilizer
    /// against the blended requirement/soil target.
    ///
    /// `CropNotFound` suppresses ranking entirely: no candidate list is
    /// computed against an absent requirement.
    pub fn recommend(
        &self,
        crop: &str,
        soil: &NutrientRecord,
    ) -> Result<Recommendation, RecommendError> {
        let requirement = aggregate_requirements(&self.crops, crop)?;
        let candidates = rank_fertilizers(&self.fertilizers, &requirement, soil)?;

        Ok(Recommendation {
            crop: crop.to_string(),
            requirement,
            candidates,
        })
    }
}

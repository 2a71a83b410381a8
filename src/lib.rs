//! Fertilizer Recommendation Engine
//!
//! Ranks candidate fertilizers for a crop by comparing the crop's averaged
//! NPK requirements against user-measured soil values.
//!
//! - `data`: Reference table loading with Polars
//! - `aggregator`: Per-crop requirement averaging
//! - `ranker`: Blended-target cosine similarity ranking
//! - `recommender`: Coordinator tying aggregation and ranking together
//!
//! Every operation is a pure, synchronous computation over small in-memory
//! tables; the reference data is loaded once and never mutated.

pub mod aggregator;
pub mod data;
pub mod error;
pub mod ranker;
pub mod recommender;
pub mod types;

// Re-export commonly used types
pub use aggregator::aggregate_requirements;
pub use data::ReferenceData;
pub use error::RecommendError;
pub use ranker::{cosine_similarity, rank_fertilizers, REQUIREMENT_WEIGHT, SOIL_WEIGHT};
pub use recommender::{Recommendation, Recommender};
pub use types::{CropRow, FertilizerRow, NutrientRecord, RankedCandidate};

//! Requirement Aggregator
//!
//! Collapses the crop requirement table down to a single NPK(+pH) record
//! for one crop. Matching is exact and case-sensitive. A crop that appears
//! on several rows is averaged, never rejected.

use crate::error::RecommendError;
use crate::types::{CropRow, NutrientRecord};

/// Average N, P, K and pH over every row matching `crop`.
///
/// Fails with `CropNotFound` when no row matches, and with `InvalidInput`
/// when a matching row is missing one of its N/P/K cells (no partial
/// averaging is attempted). pH is averaged over the rows that carry it and
/// is `None` when none do.
pub fn aggregate_requirements(
    rows: &[CropRow],
    crop: &str,
) -> Result<NutrientRecord, RecommendError> {
    let matched: Vec<&CropRow> = rows.iter().filter(|r| r.crop == crop).collect();

    if matched.is_empty() {
        return Err(RecommendError::CropNotFound {
            crop: crop.to_string(),
        });
    }

    let count = matched.len() as f64;
    let mut sum_n = 0.0;
    let mut sum_p = 0.0;
    let mut sum_k = 0.0;
    let mut sum_ph = 0.0;
    let mut ph_count = 0usize;

    for row in &matched {
        let (n, p, k) = match (row.n, row.p, row.k) {
            (Some(n), Some(p), Some(k)) => (n, p, k),
            _ => {
                return Err(RecommendError::InvalidInput {
                    reason: format!("crop '{}' has a row with missing N/P/K data", crop),
                })
            }
        };

        sum_n += n;
        sum_p += p;
        sum_k += k;

        if let Some(ph) = row.ph {
            sum_ph += ph;
            ph_count += 1;
        }
    }

    Ok(NutrientRecord {
        n: sum_n / count,
        p: sum_p / count,
        k: sum_k / count,
        ph: (ph_count > 0).then(|| sum_ph / ph_count as f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(crop: &str, n: f64, p: f64, k: f64, ph: f64) -> CropRow {
        CropRow {
            crop: crop.to_string(),
            n: Some(n),
            p: Some(p),
            k: Some(k),
            ph: Some(ph),
        }
    }

    #[test]
    fn test_averages_duplicate_rows() {
        let rows = vec![
            row("Rice", 80.0, 40.0, 40.0, 5.5),
            row("Wheat", 120.0, 60.0, 40.0, 6.5),
            row("Rice", 100.0, 50.0, 40.0, 6.5),
        ];

        let req = aggregate_requirements(&rows, "Rice").unwrap();
        assert_relative_eq!(req.n, 90.0);
        assert_relative_eq!(req.p, 45.0);
        assert_relative_eq!(req.k, 40.0);
        assert_relative_eq!(req.ph.unwrap(), 6.0);
    }

    #[test]
    fn test_unknown_crop_is_not_found() {
        let rows = vec![row("Rice", 80.0, 40.0, 40.0, 5.5)];

        let err = aggregate_requirements(&rows, "Quinoa").unwrap_err();
        assert_eq!(
            err,
            RecommendError::CropNotFound {
                crop: "Quinoa".to_string()
            }
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let rows = vec![row("Rice", 80.0, 40.0, 40.0, 5.5)];

        assert!(aggregate_requirements(&rows, "rice").is_err());
    }

    #[test]
    fn test_missing_npk_cell_is_invalid_input() {
        let mut broken = row("Rice", 80.0, 40.0, 40.0, 5.5);
        broken.p = None;
        let rows = vec![broken];

        let err = aggregate_requirements(&rows, "Rice").unwrap_err();
        assert!(matches!(err, RecommendError::InvalidInput { .. }));
    }

    #[test]
    fn test_ph_averages_only_present_cells() {
        let mut no_ph = row("Rice", 80.0, 40.0, 40.0, 0.0);
        no_ph.ph = None;
        let rows = vec![no_ph, row("Rice", 100.0, 50.0, 40.0, 6.0)];

        let req = aggregate_requirements(&rows, "Rice").unwrap();
        assert_relative_eq!(req.ph.unwrap(), 6.0);
    }

    #[test]
    fn test_ph_is_none_when_absent_everywhere() {
        let mut no_ph = row("Rice", 80.0, 40.0, 40.0, 0.0);
        no_ph.ph = None;
        let rows = vec![no_ph];

        let req = aggregate_requirements(&rows, "Rice").unwrap();
        assert!(req.ph.is_none());
    }

    #[test]
    fn test_deterministic_over_repeated_calls() {
        let rows = vec![
            row("Rice", 80.0, 40.0, 40.0, 5.5),
            row("Rice", 100.0, 50.0, 40.0, 6.5),
        ];

        let first = aggregate_requirements(&rows, "Rice").unwrap();
        let second = aggregate_requirements(&rows, "Rice").unwrap();
        assert_eq!(first, second);
    }
}

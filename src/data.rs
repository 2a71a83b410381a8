//! Reference Table Loading
//!
//! Loads the two flat reference tables (crop requirements and fertilizer
//! compositions) with Polars and extracts them into plain row structs.
//! The recommendation core only ever sees the typed rows; both tables are
//! read once at startup and never mutated afterwards.

use crate::types::{CropRow, FertilizerRow};
use anyhow::{Context, Result};
use polars::prelude::*;

/// Sample crop requirement data shipped with the crate.
pub const DEFAULT_CROP_CSV: &str = "data/crop_requirements.csv";

/// Sample fertilizer composition data shipped with the crate.
pub const DEFAULT_FERTILIZER_CSV: &str = "data/fertilizer_compositions.csv";

/// The loaded reference tables. Read-only after construction.
#[derive(Debug)]
pub struct ReferenceData {
    /// Per-crop requirement rows (one row per region/season, crops repeat).
    pub crops: Vec<CropRow>,

    /// Fertilizer composition rows (percent by weight).
    pub fertilizers: Vec<FertilizerRow>,
}

impl ReferenceData {
    /// Load both reference tables from CSV.
    pub fn load(crop_path: &str, fertilizer_path: &str) -> Result<Self> {
        let crops = load_crop_rows(crop_path)?;
        let fertilizers = load_fertilizer_rows(fertilizer_path)?;

        println!("  Crop requirement rows: {}", crops.len());
        println!("  Fertilizers: {}", fertilizers.len());

        Ok(Self { crops, fertilizers })
    }
}

fn read_csv(path: &str) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))
        .with_context(|| format!("Failed to create CSV reader: {}", path))?
        .finish()
        .with_context(|| format!("Failed to load CSV: {}", path))
}

/// Numeric column as per-row `Option<f64>`, accepting integer-typed
/// columns (CSV inference turns whole-number columns into Int64).
fn float_values(df: &DataFrame, name: &str, path: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found in {}", name, path))?
        .cast(&DataType::Float64)
        .with_context(|| format!("Column '{}' in {} is not numeric", name, path))?;

    let values = column
        .f64()
        .with_context(|| format!("Column '{}' in {} is not numeric", name, path))?;

    Ok(values.into_iter().collect())
}

/// Load the crop requirement table.
///
/// Expects columns `Crop`, `N`, `P`, `K`, `pH`. Extra columns (such as a
/// leading pandas-style `Unnamed: 0` index) are ignored. Null nutrient
/// cells are preserved as `None`; the aggregator decides how to treat
/// them per crop.
fn load_crop_rows(path: &str) -> Result<Vec<CropRow>> {
    let df = read_csv(path)?;

    let names = df
        .column("Crop")
        .with_context(|| format!("Column 'Crop' not found in {}", path))?
        .str()
        .with_context(|| format!("Column 'Crop' in {} is not string type", path))?;

    let n = float_values(&df, "N", path)?;
    let p = float_values(&df, "P", path)?;
    let k = float_values(&df, "K", path)?;
    let ph = float_values(&df, "pH", path)?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let crop = names
            .get(i)
            .with_context(|| format!("Row {} of {} has an empty Crop cell", i, path))?
            .to_string();

        rows.push(CropRow {
            crop,
            n: n[i],
            p: p[i],
            k: k[i],
            ph: ph[i],
        });
    }

    Ok(rows)
}

/// Load the fertilizer composition table.
///
/// Expects columns `Fertilizer_Name`, `N (%)`, `P (%)`, `K (%)`. A row
/// with a null composition cell is rejected here: a fertilizer with an
/// unknown composition cannot be ranked at all.
fn load_fertilizer_rows(path: &str) -> Result<Vec<FertilizerRow>> {
    let df = read_csv(path)?;

    let names = df
        .column("Fertilizer_Name")
        .with_context(|| format!("Column 'Fertilizer_Name' not found in {}", path))?
        .str()
        .with_context(|| format!("Column 'Fertilizer_Name' in {} is not string type", path))?;

    let n = float_values(&df, "N (%)", path)?;
    let p = float_values(&df, "P (%)", path)?;
    let k = float_values(&df, "K (%)", path)?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let name = names
            .get(i)
            .with_context(|| format!("Row {} of {} has an empty Fertilizer_Name cell", i, path))?
            .to_string();

        let (Some(n), Some(p), Some(k)) = (n[i], p[i], k[i]) else {
            anyhow::bail!(
                "Fertilizer '{}' in {} has a missing composition value",
                name,
                path
            );
        };

        rows.push(FertilizerRow { name, n, p, k });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sample_data() {
        let data = ReferenceData::load(DEFAULT_CROP_CSV, DEFAULT_FERTILIZER_CSV)
            .expect("Failed to load sample data");

        assert!(!data.crops.is_empty());
        assert!(!data.fertilizers.is_empty());

        // Rice appears twice in the sample data (two regional rows).
        let rice_rows = data.crops.iter().filter(|r| r.crop == "Rice").count();
        assert_eq!(rice_rows, 2);

        let urea = data
            .fertilizers
            .iter()
            .find(|f| f.name == "Urea")
            .expect("Urea missing from sample data");
        assert_eq!(urea.n, 46.0);
        assert_eq!(urea.p, 0.0);
        assert_eq!(urea.k, 0.0);
    }

    #[test]
    fn test_load_missing_file_fails_with_path_context() {
        let err =
            ReferenceData::load("data/no_such_file.csv", DEFAULT_FERTILIZER_CSV).unwrap_err();
        assert!(format!("{:#}", err).contains("no_such_file.csv"));
    }
}

//! Fertilizer recommendation CLI
//!
//! Aggregates the selected crop's NPK requirement, ranks every fertilizer
//! against the 0.7/0.3 blend of requirement and measured soil values, and
//! prints the top matches with a gap analysis for the best one.
//!
//! Run with: cargo run --bin recommend -- Rice --n 50 --p 30 --k 40

use anyhow::{bail, Context, Result};
use fert_recommender_rust::data::{DEFAULT_CROP_CSV, DEFAULT_FERTILIZER_CSV};
use fert_recommender_rust::{NutrientRecord, Recommender, ReferenceData};
use std::env;
use std::process::ExitCode;

struct Args {
    crop: Option<String>,
    soil_n: f64,
    soil_p: f64,
    soil_k: f64,
    top: usize,
    json: bool,
    list_crops: bool,
    crop_csv: String,
    fertilizer_csv: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            crop: None,
            // Mid-range soil defaults (kg/ha)
            soil_n: 50.0,
            soil_p: 30.0,
            soil_k: 40.0,
            top: 5,
            json: false,
            list_crops: false,
            crop_csv: DEFAULT_CROP_CSV.to_string(),
            fertilizer_csv: DEFAULT_FERTILIZER_CSV.to_string(),
        }
    }
}

const USAGE: &str = "Usage: recommend <crop> [options]

Options:
  --n VALUE          Soil nitrogen, kg/ha (default 50)
  --p VALUE          Soil phosphorus, kg/ha (default 30)
  --k VALUE          Soil potassium, kg/ha (default 40)
  --top N            Number of fertilizers to print (default 5)
  --json             Emit the full recommendation as JSON
  --list-crops       Print the available crop names and exit
  --crop-csv PATH    Crop requirement table (default data/crop_requirements.csv)
  --fert-csv PATH    Fertilizer composition table (default data/fertilizer_compositions.csv)";

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--n" => args.soil_n = next_value(&mut iter, "--n")?,
            "--p" => args.soil_p = next_value(&mut iter, "--p")?,
            "--k" => args.soil_k = next_value(&mut iter, "--k")?,
            "--top" => {
                let raw = iter
                    .next()
                    .with_context(|| "--top requires a value".to_string())?;
                args.top = raw
                    .parse()
                    .with_context(|| format!("--top expects an integer, got '{}'", raw))?;
            }
            "--json" => args.json = true,
            "--list-crops" => args.list_crops = true,
            "--crop-csv" => {
                args.crop_csv = iter
                    .next()
                    .with_context(|| "--crop-csv requires a path".to_string())?;
            }
            "--fert-csv" => {
                args.fertilizer_csv = iter
                    .next()
                    .with_context(|| "--fert-csv requires a path".to_string())?;
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other if other.starts_with("--") => bail!("Unknown option '{}'\n\n{}", other, USAGE),
            other => {
                if args.crop.is_some() {
                    bail!("Unexpected extra argument '{}'\n\n{}", other, USAGE);
                }
                args.crop = Some(other.to_string());
            }
        }
    }

    Ok(args)
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<f64> {
    let raw = iter
        .next()
        .with_context(|| format!("{} requires a value", flag))?;
    raw.parse()
        .with_context(|| format!("{} expects a number, got '{}'", flag, raw))
}

fn run() -> Result<()> {
    let args = parse_args()?;

    println!("Loading reference data...");
    let data = ReferenceData::load(&args.crop_csv, &args.fertilizer_csv)?;
    let recommender = Recommender::new(data);

    if args.list_crops {
        for crop in recommender.crop_names() {
            println!("{}", crop);
        }
        return Ok(());
    }

    let crop = match args.crop {
        Some(crop) => crop,
        None => bail!("No crop given\n\n{}", USAGE),
    };

    let soil = NutrientRecord::new(args.soil_n, args.soil_p, args.soil_k);
    let recommendation = recommender.recommend(&crop, &soil)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
        return Ok(());
    }

    let req = &recommendation.requirement;
    println!();
    println!("Crop requirements for {}:", recommendation.crop);
    match req.ph {
        Some(ph) => println!(
            "  N {:.1}  P {:.1}  K {:.1} kg/ha   pH {:.2}",
            req.n, req.p, req.k, ph
        ),
        None => println!("  N {:.1}  P {:.1}  K {:.1} kg/ha", req.n, req.p, req.k),
    }
    println!(
        "Soil input: N {:.1}  P {:.1}  K {:.1} kg/ha",
        soil.n, soil.p, soil.k
    );

    if recommendation.candidates.is_empty() {
        println!("\nNo fertilizers in the reference table.");
        return Ok(());
    }

    let target = &recommendation.candidates[0];
    println!(
        "Blended target: N {:.1}  P {:.1}  K {:.1}",
        target.target_n, target.target_p, target.target_k
    );

    println!("\nTop {} fertilizers:", args.top.min(recommendation.candidates.len()));
    for (i, candidate) in recommendation.candidates.iter().take(args.top).enumerate() {
        println!(
            "  {}. {:<28} score {:.3}   N {:>5.1}  P {:>5.1}  K {:>5.1}",
            i + 1,
            candidate.name,
            candidate.similarity,
            candidate.n,
            candidate.p,
            candidate.k
        );
    }

    let best = &recommendation.candidates[0];
    println!("\nGap analysis for best match '{}':", best.name);
    println!(
        "  N gap {:+.1}   P gap {:+.1}   K gap {:+.1}",
        best.n_gap(),
        best.p_gap(),
        best.k_gap()
    );

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

// ABOUTME: Command-line interface for the Lishe nutrition recommendation engine
// ABOUTME: Takes patient measurements and a location, prints or saves the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Command-line entry point.
//!
//! Usage:
//! ```bash
//! # Generate a recommendation for a patient
//! cargo run --bin lishe -- recommend --age 45 --weight-kg 78 --height-m 1.68 \
//!     --blood-sugar 135 --blood-pressure 140/85 --diabetes prediabetes \
//!     --location nairobi
//!
//! # Run the builtin demo patient
//! cargo run --bin lishe -- demo
//!
//! # Save the full report as JSON next to the working directory
//! cargo run --bin lishe -- demo --save
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use lishe::intelligence::RecommendationEngine;
use lishe::models::{
    BloodPressure, DiabetesStatus, MealSlot, Measurement, RecommendationReport,
};
use std::fs;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "lishe",
    about = "Region-aware nutrition recommendations for Kenya",
    version
)]
struct LisheArgs {
    #[command(subcommand)]
    command: LisheCommand,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum LisheCommand {
    /// Generate a recommendation report for a patient
    Recommend {
        /// Age in years
        #[arg(long)]
        age: u32,

        /// Weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Height in meters
        #[arg(long)]
        height_m: f64,

        /// Fasting blood sugar in mg/dL
        #[arg(long)]
        blood_sugar: Option<f64>,

        /// Blood pressure as systolic/diastolic, e.g. 120/80
        #[arg(long)]
        blood_pressure: Option<String>,

        /// Diabetes status: none, type1, type2, or prediabetes
        #[arg(long, default_value = "none")]
        diabetes: String,

        /// County, town, or region in Kenya
        #[arg(long)]
        location: String,

        /// Write the full report to a JSON file in the current directory
        #[arg(long)]
        save: bool,
    },

    /// Generate a report for the builtin demo patient
    Demo {
        /// Write the full report to a JSON file in the current directory
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let args = LisheArgs::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let (measurement, save) = match args.command {
        LisheCommand::Recommend {
            age,
            weight_kg,
            height_m,
            blood_sugar,
            blood_pressure,
            diabetes,
            location,
            save,
        } => {
            let blood_pressure = blood_pressure.map(|s| parse_blood_pressure(&s)).transpose()?;
            let diabetes_status: DiabetesStatus = diabetes
                .parse()
                .map_err(|e| anyhow!("invalid --diabetes value: {e}"))?;
            (
                Measurement {
                    age,
                    weight_kg,
                    height_m,
                    blood_sugar_mg_dl: blood_sugar,
                    blood_pressure,
                    diabetes_status,
                    location,
                },
                save,
            )
        }
        LisheCommand::Demo { save } => (demo_measurement(), save),
    };

    let engine = RecommendationEngine::with_builtin_data()
        .map_err(|e| anyhow!("failed to initialize engine: {e}"))?;
    let report = engine
        .recommend(&measurement)
        .map_err(|e| anyhow!("recommendation failed: {e}"))?;

    print_report(&report);

    if save {
        let path = report.file_name(&measurement.location);
        let json = serde_json::to_string_pretty(&report)
            .context("failed to serialize report")?;
        fs::write(&path, json).with_context(|| format!("failed to write {path}"))?;
        info!(path = %path, "report saved");
    }

    Ok(())
}

/// Builtin demo patient: a 45-year-old prediabetic Nairobi resident with
/// stage 2 hypertension and an overweight BMI.
fn demo_measurement() -> Measurement {
    Measurement {
        age: 45,
        weight_kg: 78.0,
        height_m: 1.68,
        blood_sugar_mg_dl: Some(135.0),
        blood_pressure: Some(BloodPressure {
            systolic: 140,
            diastolic: 85,
        }),
        diabetes_status: DiabetesStatus::Prediabetes,
        location: "nairobi".to_owned(),
    }
}

fn parse_blood_pressure(raw: &str) -> Result<BloodPressure> {
    let (systolic, diastolic) = raw
        .split_once('/')
        .ok_or_else(|| anyhow!("expected systolic/diastolic, e.g. 120/80, got '{raw}'"))?;
    Ok(BloodPressure {
        systolic: systolic
            .trim()
            .parse()
            .with_context(|| format!("invalid systolic value '{systolic}'"))?,
        diastolic: diastolic
            .trim()
            .parse()
            .with_context(|| format!("invalid diastolic value '{diastolic}'"))?,
    })
}

fn print_report(report: &RecommendationReport) {
    let profile = &report.profile;
    println!("=== Health Profile ===");
    println!(
        "BMI: {} ({})",
        profile.bmi_display,
        profile.bmi_category.as_str()
    );
    println!(
        "Risk level: {} ({} risk factors)",
        profile.risk_level.as_str(),
        profile.risk_factors
    );
    println!("Daily calorie target: {} kcal", profile.daily_calories);

    println!();
    println!(
        "=== Region: {}{} ===",
        report.region.display_name(),
        if report.region_fallback {
            " (default, location not recognized)"
        } else {
            ""
        }
    );

    println!();
    println!("=== Daily Meal Plan ===");
    for slot in MealSlot::ALL {
        let Some(plan) = report.meal_plan.slot(slot) else {
            continue;
        };
        println!("{}:", slot.as_str());
        for (group, foods) in &plan.selections {
            if foods.is_empty() {
                println!("  {}: (none available in region)", group.as_str());
            } else {
                println!("  {}: {}", group.as_str(), foods.join(", "));
            }
        }
    }

    println!();
    println!("=== Guidance ===");
    println!("{}", report.narrative.summary);
    println!("Focus areas: {}", report.narrative.focus_areas.join(", "));
    for restriction in &report.narrative.restrictions {
        println!("- {restriction}");
    }
    println!();
    println!("Meal timing: {}", report.narrative.meal_timing.timing);
}

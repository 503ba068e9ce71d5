// ABOUTME: Lishe nutrition recommendation engine for region-aware Kenyan diets
// ABOUTME: Health measurements plus a location in, a complete dietary report out

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! # Lishe
//!
//! A nutrition recommendation engine for Kenya. One measurement in, one
//! report out: basic health readings and a free-text location produce a
//! derived health profile, a regional food catalog, a deterministic daily
//! meal plan, and narrative dietary guidance.
//!
//! ```no_run
//! use lishe::intelligence::RecommendationEngine;
//! use lishe::models::{DiabetesStatus, Measurement};
//!
//! # fn main() -> lishe::errors::AppResult<()> {
//! let engine = RecommendationEngine::with_builtin_data()?;
//! let report = engine.recommend(&Measurement {
//!     age: 45,
//!     weight_kg: 78.0,
//!     height_m: 1.68,
//!     blood_sugar_mg_dl: Some(135.0),
//!     blood_pressure: None,
//!     diabetes_status: DiabetesStatus::Prediabetes,
//!     location: "nairobi".to_owned(),
//! })?;
//! println!("{}", report.profile.risk_level.as_str());
//! # Ok(())
//! # }
//! ```
//!
//! The same measurement and location always produce the same plan; only the
//! report timestamp varies between runs.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intelligence;
pub mod models;
pub mod reference;

pub use errors::{AppError, AppResult, ErrorCode};
pub use intelligence::RecommendationEngine;
pub use models::{Measurement, RecommendationReport};

// ABOUTME: Recommendation engine orchestrating the resolver and composer pipeline
// ABOUTME: Measurement in, complete recommendation report out, in one pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Recommendation engine.
//!
//! The engine owns the validated reference data and the configuration and
//! runs the full pipeline per request: profile resolution, regional food
//! resolution, meal plan composition, and report assembly. The two resolvers
//! never see each other's output; only the composer reads both. Reference
//! data is validated once at construction, so requests can only fail on
//! invalid measurements.

use crate::config::NutritionEngineConfig;
use crate::errors::AppResult;
use crate::intelligence::composer::MealPlanComposer;
use crate::intelligence::profile::ProfileResolver;
use crate::intelligence::regions::RegionalFoodResolver;
use crate::models::{Measurement, RecommendationReport};
use crate::reference::{NutritionFacts, RegionalTable};
use chrono::Utc;
use tracing::info;

/// Stateless recommendation pipeline over validated reference data
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    table: RegionalTable,
    facts: NutritionFacts,
    config: NutritionEngineConfig,
}

impl RecommendationEngine {
    /// Create an engine over pre-built reference data
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the engine configuration fails
    /// validation. The reference data carries its own invariants from
    /// construction.
    pub fn new(
        table: RegionalTable,
        facts: NutritionFacts,
        config: NutritionEngineConfig,
    ) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            table,
            facts,
            config,
        })
    }

    /// Create an engine over the builtin Kenya reference data and the
    /// global configuration
    ///
    /// # Errors
    ///
    /// Returns a data integrity error if the builtin dataset violates its
    /// invariants.
    pub fn with_builtin_data() -> AppResult<Self> {
        Self::new(
            RegionalTable::builtin()?,
            NutritionFacts::builtin()?,
            NutritionEngineConfig::global().clone(),
        )
    }

    /// Run the full pipeline for one measurement
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::InvalidMeasurement`] when the
    /// measurement fails validation. Unknown locations do not fail; they
    /// fall back to the default region with the report's `region_fallback`
    /// flag set.
    pub fn recommend(&self, measurement: &Measurement) -> AppResult<RecommendationReport> {
        let profile = ProfileResolver::new(&self.config).resolve(measurement)?;
        let resolved = RegionalFoodResolver::new(&self.table).resolve(&measurement.location);

        let composer = MealPlanComposer::new(&self.facts, self.config.selection.clone());
        let (meal_plan, narrative) = composer.compose(&profile, &resolved.catalog);

        info!(
            risk_level = profile.risk_level.as_str(),
            region = resolved.region.as_str(),
            region_fallback = resolved.fallback,
            daily_calories = profile.daily_calories,
            "recommendation generated"
        );

        Ok(RecommendationReport {
            profile,
            region: resolved.region,
            region_fallback: resolved.fallback,
            catalog: resolved.catalog,
            meal_plan,
            narrative,
            generated_at: Utc::now(),
        })
    }
}

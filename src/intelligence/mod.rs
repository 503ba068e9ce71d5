// ABOUTME: Intelligence layer with the resolvers, composer, and engine pipeline
// ABOUTME: Measurement to health profile to regional meal plan to report

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Decision logic: profile resolution, regional food resolution, meal plan
//! composition, and the engine that pipelines them.

pub mod composer;
pub mod engine;
pub mod profile;
pub mod regions;

pub use composer::MealPlanComposer;
pub use engine::RecommendationEngine;
pub use profile::ProfileResolver;
pub use regions::{RegionalFoodResolver, ResolvedRegion};

// ABOUTME: Read-only reference datasets consumed by the engine
// ABOUTME: Regional tables (counties, catalogs) and the nutrition facts lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Read-only reference data.
//!
//! Both datasets are loaded once at process start and passed into the engine
//! as immutable values; nothing in the engine ever mutates them, so they can
//! be shared freely across concurrent requests.

/// Regional tables: county aliases and per-region food catalogs
pub mod regions;

/// Nutrition facts lookup keyed by food name
pub mod nutrition;

pub use nutrition::{FoodNutrition, NutritionFacts};
pub use regions::{Region, RegionalTable, DEFAULT_REGION};

// ABOUTME: Configuration module for the Lishe engine
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

/// Engine configuration (formula coefficients, adjustments, selection limits)
pub mod engine;

pub use engine::{
    AdjustmentConfig, BmrConfig, NutritionEngineConfig, SelectionConfig, SlotSelectionLimits,
};

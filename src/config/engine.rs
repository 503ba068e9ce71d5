// ABOUTME: Nutrition engine configuration with table-driven formula coefficients
// ABOUTME: BMR coefficients, activity factor, risk adjustment, and per-slot selection limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Nutrition Engine Configuration
//!
//! All numeric knobs of the engine live here rather than inline in the
//! decision logic: the Mifflin-St Jeor coefficients, the activity factor,
//! the portion-control calorie reduction, and the per-slot item counts used
//! by the meal plan composer. Defaults hold the documented values; a small
//! set of environment overrides is supported for deployment tuning.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;
use tracing::warn;

static ENGINE_CONFIG: OnceLock<NutritionEngineConfig> = OnceLock::new();

/// Basal metabolic rate formula coefficients
///
/// Defaults are the Mifflin-St Jeor equation (1990) with the male constant
/// as baseline, matching the documented calorie model:
/// BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age + 5.
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. *American Journal of Clinical Nutrition*,
/// 51(2), 241-247.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Coefficient applied to weight in kilograms
    pub weight_coef: f64,
    /// Coefficient applied to height in centimeters
    pub height_coef: f64,
    /// Coefficient applied to age in years (negative: BMR falls with age)
    pub age_coef: f64,
    /// Additive constant
    pub constant: f64,
    /// Safety floor for the daily estimate (kcal)
    pub min_daily_kcal: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            constant: 5.0,
            min_daily_kcal: 1000.0,
        }
    }
}

/// Energy expenditure adjustments applied on top of BMR
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentConfig {
    /// Fixed activity factor multiplying BMR (light-to-moderate activity)
    pub activity_factor: f64,
    /// Fractional calorie reduction for high-risk or diagnosed-diabetic
    /// profiles, supporting portion control
    pub portion_control_reduction: f64,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            activity_factor: 1.4,
            portion_control_reduction: 0.10,
        }
    }
}

/// Item counts drawn per food group for each meal slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotSelectionLimits {
    /// Grain items at breakfast
    pub breakfast_grains: usize,
    /// Protein items at breakfast (breakfast staples only)
    pub breakfast_proteins: usize,
    /// Fruit items at breakfast
    pub breakfast_fruits: usize,
    /// Grain items at lunch
    pub lunch_grains: usize,
    /// Protein items at lunch
    pub lunch_proteins: usize,
    /// Vegetable items at lunch
    pub lunch_vegetables: usize,
    /// Legume items at lunch
    pub lunch_legumes: usize,
    /// Grain items at dinner
    pub dinner_grains: usize,
    /// Protein items at dinner
    pub dinner_proteins: usize,
    /// Vegetable items at dinner
    pub dinner_vegetables: usize,
    /// Fruit items for snacks
    pub snack_fruits: usize,
    /// Nut-type legume items for snacks
    pub snack_nuts: usize,
}

impl Default for SlotSelectionLimits {
    fn default() -> Self {
        Self {
            breakfast_grains: 2,
            breakfast_proteins: 1,
            breakfast_fruits: 2,
            lunch_grains: 1,
            lunch_proteins: 1,
            lunch_vegetables: 3,
            lunch_legumes: 1,
            dinner_grains: 1,
            dinner_proteins: 1,
            dinner_vegetables: 2,
            snack_fruits: 2,
            snack_nuts: 1,
        }
    }
}

impl SlotSelectionLimits {
    /// Vegetable-forward limits applied to high-risk or obese profiles:
    /// more vegetable and legume picks per slot relative to grains and
    /// proteins.
    #[must_use]
    pub fn vegetable_forward() -> Self {
        Self {
            breakfast_grains: 1,
            lunch_vegetables: 4,
            lunch_legumes: 2,
            dinner_vegetables: 3,
            ..Self::default()
        }
    }
}

/// Meal plan selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Limits for low and moderate risk profiles
    pub standard: SlotSelectionLimits,
    /// Limits for high-risk or obese profiles
    pub vegetable_forward: SlotSelectionLimits,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            standard: SlotSelectionLimits::default(),
            vegetable_forward: SlotSelectionLimits::vegetable_forward(),
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionEngineConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor and risk adjustment
    pub adjustment: AdjustmentConfig,
    /// Per-slot selection limits
    pub selection: SelectionConfig,
}

impl NutritionEngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override contains an invalid value or the
    /// final configuration fails validation.
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();
        config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(mut self) -> AppResult<Self> {
        if let Ok(raw) = env::var("LISHE_ACTIVITY_FACTOR") {
            self.adjustment.activity_factor = raw.parse().map_err(|e| {
                AppError::config(format!("LISHE_ACTIVITY_FACTOR '{raw}' is not a number"))
                    .with_source(e)
            })?;
        }
        if let Ok(raw) = env::var("LISHE_PORTION_CONTROL_REDUCTION") {
            self.adjustment.portion_control_reduction = raw.parse().map_err(|e| {
                AppError::config(format!(
                    "LISHE_PORTION_CONTROL_REDUCTION '{raw}' is not a number"
                ))
                .with_source(e)
            })?;
        }
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a coefficient or factor is outside its valid
    /// range.
    pub fn validate(&self) -> AppResult<()> {
        if self.bmr.weight_coef <= 0.0 || self.bmr.height_coef <= 0.0 {
            return Err(AppError::config(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.bmr.age_coef >= 0.0 {
            return Err(AppError::config(
                "BMR age coefficient must be negative (calorie need falls with age)",
            ));
        }
        if self.adjustment.activity_factor < 1.0 {
            return Err(AppError::config("activity factor must be at least 1.0"));
        }
        if !(0.0..1.0).contains(&self.adjustment.portion_control_reduction) {
            return Err(AppError::config(
                "portion control reduction must be in [0, 1)",
            ));
        }
        Ok(())
    }
}

// ABOUTME: Core data models for the Lishe nutrition engine
// ABOUTME: Measurement input, derived health profile, meal plan, and report types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Core data models.
//!
//! [`Measurement`] is the immutable per-request input. [`HealthProfile`] is
//! derived once by the profile resolver and never mutated afterwards.
//! [`MealPlan`], [`Narrative`], and [`RecommendationReport`] are the composer
//! and engine outputs. All public types serialize with stable snake_case
//! field names; report JSON is the machine-readable output boundary.

use crate::constants::clinical::{blood_pressure, bmi, risk};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A systolic/diastolic blood pressure reading in mmHg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    /// Systolic pressure (mmHg)
    pub systolic: u16,
    /// Diastolic pressure (mmHg)
    pub diastolic: u16,
}

/// Diabetes status reported for the patient
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiabetesStatus {
    /// No diabetes diagnosis
    #[default]
    None,
    /// Type 1 diabetes
    Type1,
    /// Type 2 diabetes
    Type2,
    /// Prediabetes
    Prediabetes,
}

impl DiabetesStatus {
    /// Whether any diabetes-related condition is present (including prediabetes)
    #[must_use]
    pub const fn is_present(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether the status is a confirmed diabetes diagnosis (type 1 or 2)
    #[must_use]
    pub const fn is_diagnosed(self) -> bool {
        matches!(self, Self::Type1 | Self::Type2)
    }

    /// Canonical lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Type1 => "type1",
            Self::Type2 => "type2",
            Self::Prediabetes => "prediabetes",
        }
    }
}

impl FromStr for DiabetesStatus {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "type1" => Ok(Self::Type1),
            "type2" => Ok(Self::Type2),
            "prediabetes" => Ok(Self::Prediabetes),
            other => Err(AppError::invalid_measurement(format!(
                "unrecognized diabetes status '{other}' (expected none, type1, type2, or prediabetes)"
            ))),
        }
    }
}

impl fmt::Display for DiabetesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw patient measurements, created once per request and never mutated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    /// Age in years (must be positive)
    pub age: u32,
    /// Weight in kilograms (must be positive)
    pub weight_kg: f64,
    /// Height in meters (must be positive)
    pub height_m: f64,
    /// Fasting blood sugar in mg/dL, if measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_sugar_mg_dl: Option<f64>,
    /// Blood pressure reading, if measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<BloodPressure>,
    /// Reported diabetes status
    pub diabetes_status: DiabetesStatus,
    /// Free-text county or region name in Kenya
    pub location: String,
}

/// BMI category with fixed breakpoints, inclusive on each lower bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or above
    Obese,
}

impl BmiCategory {
    /// Canonical lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }

    /// Classify a full-precision BMI value
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value >= bmi::OBESE_MIN {
            Self::Obese
        } else if value >= bmi::OVERWEIGHT_MIN {
            Self::Overweight
        } else if value >= bmi::NORMAL_MIN {
            Self::Normal
        } else {
            Self::Underweight
        }
    }
}

/// Blood pressure category, ordered by severity
///
/// `Unknown` (no reading supplied) sorts lowest and contributes zero risk
/// factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BpCategory {
    /// No blood pressure reading supplied
    Unknown,
    /// Below 120 systolic and below 80 diastolic
    Normal,
    /// Systolic in [120, 130) with diastolic below 80
    Elevated,
    /// Systolic in [130, 140) or diastolic in [80, 90)
    HypertensiveStage1,
    /// Systolic of 140+ or diastolic of 90+
    HypertensiveStage2,
}

impl BpCategory {
    /// Classify a reading, taking the worse of the systolic-derived and
    /// diastolic-derived categories when they disagree.
    #[must_use]
    pub fn from_reading(reading: BloodPressure) -> Self {
        let from_systolic = if reading.systolic >= blood_pressure::STAGE2_SYSTOLIC_MIN {
            Self::HypertensiveStage2
        } else if reading.systolic >= blood_pressure::STAGE1_SYSTOLIC_MIN {
            Self::HypertensiveStage1
        } else if reading.systolic >= blood_pressure::ELEVATED_SYSTOLIC_MIN {
            Self::Elevated
        } else {
            Self::Normal
        };

        let from_diastolic = if reading.diastolic >= blood_pressure::STAGE2_DIASTOLIC_MIN {
            Self::HypertensiveStage2
        } else if reading.diastolic >= blood_pressure::STAGE1_DIASTOLIC_MIN {
            Self::HypertensiveStage1
        } else {
            Self::Normal
        };

        from_systolic.max(from_diastolic)
    }

    /// Whether the category counts as a blood pressure risk factor
    #[must_use]
    pub fn is_elevated_or_worse(self) -> bool {
        self >= Self::Elevated
    }
}

/// Overall risk level derived from the binary risk-factor count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Zero risk factors
    Low,
    /// One or two risk factors
    Moderate,
    /// Three risk factors
    High,
}

impl RiskLevel {
    /// Map a risk-factor count to a level
    #[must_use]
    pub const fn from_factor_count(count: u8) -> Self {
        if count >= risk::HIGH_RISK_FACTOR_COUNT {
            Self::High
        } else if count >= risk::MODERATE_RISK_FACTOR_COUNT {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Canonical lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// Active dietary constraint flags derived from the health profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryRestrictions {
    /// Limit refined sugar and high-GI staples (any diabetes-related status)
    pub limit_sugar: bool,
    /// Reduce sodium intake (moderate or high risk)
    pub limit_sodium: bool,
    /// Apply portion control (moderate or high risk)
    pub portion_control: bool,
    /// Increase fiber intake (type 2 diabetes or prediabetes)
    pub increase_fiber: bool,
    /// Limit saturated fat (moderate or high risk)
    pub limit_saturated_fat: bool,
}

/// Derived health profile, never mutated after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Age in years
    pub age: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
    /// BMI at full precision, used for categorization
    pub bmi: f64,
    /// BMI rounded to two decimal places for display
    pub bmi_display: f64,
    /// BMI category
    pub bmi_category: BmiCategory,
    /// Fasting blood sugar passed through from the measurement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_sugar_mg_dl: Option<f64>,
    /// Blood pressure passed through from the measurement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<BloodPressure>,
    /// Blood pressure category
    pub bp_category: BpCategory,
    /// Diabetes status passed through from the measurement
    pub diabetes_status: DiabetesStatus,
    /// Number of active risk factors (0 to 3)
    pub risk_factors: u8,
    /// Overall risk level
    pub risk_level: RiskLevel,
    /// Active dietary constraint flags
    pub restrictions: DietaryRestrictions,
    /// Daily calorie need in kcal, adjusted for risk and diabetes
    pub daily_calories: u32,
}

/// Food group partition of a regional catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodGroup {
    /// Grains and starches
    Grains,
    /// Animal and other protein sources
    Proteins,
    /// Vegetables
    Vegetables,
    /// Fruits
    Fruits,
    /// Legumes and pulses
    Legumes,
    /// Dairy products
    Dairy,
    /// Anything that fits no other group
    Other,
}

impl FoodGroup {
    /// All groups in canonical order
    pub const ALL: [Self; 7] = [
        Self::Grains,
        Self::Proteins,
        Self::Vegetables,
        Self::Fruits,
        Self::Legumes,
        Self::Dairy,
        Self::Other,
    ];

    /// Canonical lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grains => "grains",
            Self::Proteins => "proteins",
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Legumes => "legumes",
            Self::Dairy => "dairy",
            Self::Other => "other",
        }
    }
}

/// A region's food catalog partitioned by food group
///
/// Each group holds food names in canonical catalog order; selection logic
/// takes the first N items of a group, which makes composition deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCatalog {
    /// Food names per group, in canonical order
    pub groups: BTreeMap<FoodGroup, Vec<String>>,
}

impl FoodCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group's food list, replacing any previous list for that group
    #[must_use]
    pub fn with_group<I, S>(mut self, group: FoodGroup, foods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .insert(group, foods.into_iter().map(Into::into).collect());
        self
    }

    /// Foods in a group, or an empty slice when the group is absent
    #[must_use]
    pub fn group(&self, group: FoodGroup) -> &[String] {
        self.groups.get(&group).map_or(&[], Vec::as_slice)
    }

    /// Total number of food items across all groups
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Whether a food name appears in any group
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.groups.values().any(|foods| foods.iter().any(|f| f == name))
    }
}

/// Daily eating occasion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snacks
    Snacks,
}

impl MealSlot {
    /// All slots in daily order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Canonical lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

/// Food selections for a single meal slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlotPlan {
    /// The slot this plan fills
    pub slot: MealSlot,
    /// Selected food names per group; empty sequences mark catalog gaps
    pub selections: BTreeMap<FoodGroup, Vec<String>>,
}

/// A full day's meal plan in slot order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Meal slots in daily order
    pub slots: Vec<MealSlotPlan>,
}

impl MealPlan {
    /// The plan for a given slot, if present
    #[must_use]
    pub fn slot(&self, slot: MealSlot) -> Option<&MealSlotPlan> {
        self.slots.iter().find(|s| s.slot == slot)
    }
}

/// Meal-timing advice keyed off diabetes status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTimingAdvice {
    /// How many meals and snacks per day
    pub frequency: String,
    /// Spacing guidance between meals
    pub timing: String,
    /// Breakfast-specific advice
    pub breakfast: String,
    /// Dinner-specific advice
    pub dinner: String,
}

/// Foods in the regional catalog that are particularly beneficial
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredFoods {
    /// High-fiber foods, relevant for diabetes and weight management
    pub high_fiber: Vec<String>,
    /// Lean protein sources
    pub lean_proteins: Vec<String>,
    /// Complex carbohydrate staples
    pub complex_carbs: Vec<String>,
}

/// Foods in the regional catalog that should be limited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodsToLimit {
    /// High glycemic index foods
    pub high_gi: Vec<String>,
    /// High saturated fat foods
    pub high_saturated_fat: Vec<String>,
}

/// Narrative guidance attached to the meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    /// One-sentence health overview
    pub summary: String,
    /// Key dietary focus areas mapped from active restriction flags
    pub focus_areas: Vec<String>,
    /// Human-readable restriction list
    pub restrictions: Vec<String>,
    /// Portion guidance per food group
    pub portion_guidelines: BTreeMap<FoodGroup, String>,
    /// Meal-timing advice
    pub meal_timing: MealTimingAdvice,
    /// Beneficial foods available in the region
    pub preferred_foods: PreferredFoods,
    /// Regional foods to limit
    pub foods_to_limit: FoodsToLimit,
}

/// Top-level recommendation report, the engine's sole output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Derived health profile
    pub profile: HealthProfile,
    /// Resolved region name
    pub region: crate::reference::Region,
    /// Whether the location fell back to the default region
    pub region_fallback: bool,
    /// The resolved region's food catalog
    pub catalog: FoodCatalog,
    /// The composed daily meal plan
    pub meal_plan: MealPlan,
    /// Narrative guidance
    pub narrative: Narrative,
    /// Report generation timestamp
    pub generated_at: DateTime<Utc>,
}

impl RecommendationReport {
    /// File name for persisted reports, following the documented
    /// `nutrition_report_<location>_<age>y` convention. The location is the
    /// patient's input location, lowercased with whitespace collapsed to
    /// underscores.
    #[must_use]
    pub fn file_name(&self, location: &str) -> String {
        let slug: String = location
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("nutrition_report_{slug}_{}y.json", self.profile.age)
    }
}

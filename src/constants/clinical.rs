// ABOUTME: Clinical category thresholds for BMI, blood pressure, risk, and glycemic index
// ABOUTME: Table-driven constants so boundary values can be tested independently of composition logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Clinical constants used by the profile resolver and meal plan composer.
//!
//! These values are fixed category breakpoints from widely published clinical
//! guidelines. They are grouped per concern so each table can be unit-tested
//! against its boundary values in isolation.

/// BMI category breakpoints (kg/m²)
///
/// Reference: WHO classification of body mass index.
/// Each band is inclusive on its lower bound.
pub mod bmi {
    /// Lower bound of the normal band; below this is underweight
    pub const NORMAL_MIN: f64 = 18.5;

    /// Lower bound of the overweight band
    pub const OVERWEIGHT_MIN: f64 = 25.0;

    /// Lower bound of the obese band
    pub const OBESE_MIN: f64 = 30.0;
}

/// Blood pressure category breakpoints (mmHg)
///
/// Reference: ACC/AHA 2017 hypertension guideline categories.
/// A reading is classified by the worse of its systolic-derived and
/// diastolic-derived categories.
pub mod blood_pressure {
    /// Systolic lower bound of the elevated band
    pub const ELEVATED_SYSTOLIC_MIN: u16 = 120;

    /// Systolic lower bound of hypertension stage 1
    pub const STAGE1_SYSTOLIC_MIN: u16 = 130;

    /// Systolic lower bound of hypertension stage 2
    pub const STAGE2_SYSTOLIC_MIN: u16 = 140;

    /// Diastolic lower bound of hypertension stage 1
    pub const STAGE1_DIASTOLIC_MIN: u16 = 80;

    /// Diastolic lower bound of hypertension stage 2
    pub const STAGE2_DIASTOLIC_MIN: u16 = 90;
}

/// Risk level derivation from binary risk-factor counts
///
/// Exactly three independent factors are counted: BMI at or above the
/// overweight band, blood pressure at or above the elevated band, and a
/// diabetes status other than none.
pub mod risk {
    /// Factor count at or above which the profile is high risk
    pub const HIGH_RISK_FACTOR_COUNT: u8 = 3;

    /// Factor count at or above which the profile is moderate risk
    pub const MODERATE_RISK_FACTOR_COUNT: u8 = 1;
}

/// Glycemic index thresholds for the low-GI staple preference
///
/// Reference: Atkinson, F.S., et al. (2008). International tables of glycemic
/// index and glycemic load values. *Diabetes Care*, 31(12), 2281-2283.
pub mod glycemic {
    /// Foods strictly below this glycemic index count as low-GI
    pub const LOW_GI_MAX: f64 = 55.0;

    /// Assumed glycemic index for foods absent from the nutrition reference
    /// data. Sits below `LOW_GI_MAX` so unknown foods survive the filter
    /// rather than being silently excluded.
    pub const DEFAULT_GI: f64 = 50.0;

    /// Items retained when the GI filter would otherwise empty a group
    pub const GI_FALLBACK_TAKE: usize = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_bands_are_ordered() {
        assert!(bmi::NORMAL_MIN < bmi::OVERWEIGHT_MIN);
        assert!(bmi::OVERWEIGHT_MIN < bmi::OBESE_MIN);
    }

    #[test]
    fn bp_bands_are_ordered() {
        assert!(blood_pressure::ELEVATED_SYSTOLIC_MIN < blood_pressure::STAGE1_SYSTOLIC_MIN);
        assert!(blood_pressure::STAGE1_SYSTOLIC_MIN < blood_pressure::STAGE2_SYSTOLIC_MIN);
        assert!(blood_pressure::STAGE1_DIASTOLIC_MIN < blood_pressure::STAGE2_DIASTOLIC_MIN);
    }

    #[test]
    fn default_gi_counts_as_low() {
        assert!(glycemic::DEFAULT_GI < glycemic::LOW_GI_MAX);
    }
}

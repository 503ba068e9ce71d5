// ABOUTME: Patient profile resolver deriving BMI, risk level, and calorie needs
// ABOUTME: Pure function of the measurement input; never reads regional data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Patient profile resolution.
//!
//! Converts raw measurements into an immutable [`HealthProfile`]: BMI and its
//! category, blood pressure category, the three binary risk factors, the
//! overall risk level, dietary restriction flags, and the adjusted daily
//! calorie need. The resolver is a total function over valid inputs and has
//! no side effects beyond tracing.

use crate::config::{AdjustmentConfig, BmrConfig, NutritionEngineConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{
    BmiCategory, BpCategory, DietaryRestrictions, HealthProfile, Measurement, RiskLevel,
};
use tracing::debug;

/// Resolves raw measurements into a derived health profile
#[derive(Debug, Clone)]
pub struct ProfileResolver {
    bmr: BmrConfig,
    adjustment: AdjustmentConfig,
}

impl ProfileResolver {
    /// Create a resolver from engine configuration
    #[must_use]
    pub fn new(config: &NutritionEngineConfig) -> Self {
        Self {
            bmr: config.bmr.clone(),
            adjustment: config.adjustment.clone(),
        }
    }

    /// Derive a health profile from a measurement
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::ErrorCode::InvalidMeasurement`] when age is
    /// zero or weight/height are not positive finite numbers.
    pub fn resolve(&self, measurement: &Measurement) -> AppResult<HealthProfile> {
        Self::validate(measurement)?;

        let bmi = measurement.weight_kg / (measurement.height_m * measurement.height_m);
        let bmi_display = (bmi * 100.0).round() / 100.0;
        let bmi_category = BmiCategory::from_bmi(bmi);

        let bp_category = measurement
            .blood_pressure
            .map_or(BpCategory::Unknown, BpCategory::from_reading);

        let risk_factors = u8::from(bmi_category >= BmiCategory::Overweight)
            + u8::from(bp_category.is_elevated_or_worse())
            + u8::from(measurement.diabetes_status.is_present());
        let risk_level = RiskLevel::from_factor_count(risk_factors);

        let restrictions = Self::restrictions(measurement, risk_level);
        let daily_calories =
            self.daily_calories(measurement, risk_level, measurement.diabetes_status.is_diagnosed());

        debug!(
            bmi = bmi_display,
            risk_factors,
            risk_level = risk_level.as_str(),
            "resolved patient profile"
        );

        Ok(HealthProfile {
            age: measurement.age,
            weight_kg: measurement.weight_kg,
            height_m: measurement.height_m,
            bmi,
            bmi_display,
            bmi_category,
            blood_sugar_mg_dl: measurement.blood_sugar_mg_dl,
            blood_pressure: measurement.blood_pressure,
            bp_category,
            diabetes_status: measurement.diabetes_status,
            risk_factors,
            risk_level,
            restrictions,
            daily_calories,
        })
    }

    fn validate(measurement: &Measurement) -> AppResult<()> {
        if measurement.age == 0 {
            return Err(AppError::invalid_measurement("age must be positive"));
        }
        if !(measurement.weight_kg.is_finite() && measurement.weight_kg > 0.0) {
            return Err(AppError::invalid_measurement(
                "weight must be a positive number of kilograms",
            ));
        }
        if !(measurement.height_m.is_finite() && measurement.height_m > 0.0) {
            return Err(AppError::invalid_measurement(
                "height must be a positive number of meters",
            ));
        }
        Ok(())
    }

    fn restrictions(measurement: &Measurement, risk_level: RiskLevel) -> DietaryRestrictions {
        let diabetes = measurement.diabetes_status;
        let at_risk = risk_level >= RiskLevel::Moderate;
        DietaryRestrictions {
            limit_sugar: diabetes.is_present(),
            limit_sodium: at_risk,
            portion_control: at_risk,
            increase_fiber: matches!(
                diabetes,
                crate::models::DiabetesStatus::Type2 | crate::models::DiabetesStatus::Prediabetes
            ),
            limit_saturated_fat: at_risk,
        }
    }

    /// Daily calorie need: Mifflin-St Jeor baseline, multiplied by the fixed
    /// activity factor, reduced for high-risk or diagnosed-diabetic profiles
    /// to support portion control.
    fn daily_calories(
        &self,
        measurement: &Measurement,
        risk_level: RiskLevel,
        diagnosed_diabetes: bool,
    ) -> u32 {
        let height_cm = measurement.height_m * 100.0;
        let bmr = self.bmr.weight_coef * measurement.weight_kg
            + self.bmr.height_coef * height_cm
            + self.bmr.age_coef * f64::from(measurement.age)
            + self.bmr.constant;
        let bmr = bmr.max(self.bmr.min_daily_kcal);

        let mut calories = bmr * self.adjustment.activity_factor;
        if risk_level == RiskLevel::High || diagnosed_diabetes {
            calories *= 1.0 - self.adjustment.portion_control_reduction;
        }

        // Safe: calorie needs are bounded well below u32::MAX
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            calories.round() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;
    use crate::models::{BloodPressure, DiabetesStatus};

    fn resolver() -> ProfileResolver {
        ProfileResolver::new(&NutritionEngineConfig::default())
    }

    fn measurement() -> Measurement {
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

    #[test]
    fn bmi_is_weight_over_height_squared() {
        let profile = resolver().resolve(&measurement()).unwrap();
        assert!((profile.bmi - 78.0 / (1.68 * 1.68)).abs() < 1e-12);
        assert_eq!(profile.bmi_display, 27.64);
        assert_eq!(profile.bmi_category, BmiCategory::Overweight);
    }

    #[test]
    fn three_factors_yield_high_risk() {
        let profile = resolver().resolve(&measurement()).unwrap();
        assert_eq!(profile.risk_factors, 3);
        assert_eq!(profile.risk_level, RiskLevel::High);
    }

    #[test]
    fn risk_never_decreases_when_a_factor_is_added() {
        let mut m = Measurement {
            blood_pressure: None,
            diabetes_status: DiabetesStatus::None,
            weight_kg: 60.0,
            ..measurement()
        };
        let base = resolver().resolve(&m).unwrap();
        assert_eq!(base.risk_level, RiskLevel::Low);

        m.diabetes_status = DiabetesStatus::Type2;
        let one = resolver().resolve(&m).unwrap();
        assert!(one.risk_level >= base.risk_level);

        m.blood_pressure = Some(BloodPressure {
            systolic: 132,
            diastolic: 80,
        });
        let two = resolver().resolve(&m).unwrap();
        assert!(two.risk_level >= one.risk_level);

        m.weight_kg = 78.0;
        let three = resolver().resolve(&m).unwrap();
        assert!(three.risk_level >= two.risk_level);
        assert_eq!(three.risk_level, RiskLevel::High);
    }

    #[test]
    fn absent_blood_pressure_contributes_no_risk() {
        let m = Measurement {
            blood_pressure: None,
            ..measurement()
        };
        let profile = resolver().resolve(&m).unwrap();
        assert_eq!(profile.bp_category, BpCategory::Unknown);
        assert_eq!(profile.risk_factors, 2);
        assert_eq!(profile.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn non_positive_weight_or_height_is_rejected() {
        let zero_weight = Measurement {
            weight_kg: 0.0,
            ..measurement()
        };
        assert!(resolver().resolve(&zero_weight).is_err());

        let negative_height = Measurement {
            height_m: -1.68,
            ..measurement()
        };
        assert!(resolver().resolve(&negative_height).is_err());

        let zero_age = Measurement {
            age: 0,
            ..measurement()
        };
        assert!(resolver().resolve(&zero_age).is_err());
    }

    #[test]
    fn calorie_need_matches_documented_formula() {
        // Mifflin-St Jeor: 10*78 + 6.25*168 - 5*45 + 5 = 1610 kcal BMR.
        // Activity factor 1.4 then the 10% high-risk reduction.
        let profile = resolver().resolve(&measurement()).unwrap();
        assert_eq!(profile.daily_calories, 2029);
    }

    #[test]
    fn calorie_need_is_monotonic_in_age_weight_and_height() {
        let r = resolver();
        let base = r.resolve(&measurement()).unwrap();

        let older = r
            .resolve(&Measurement {
                age: 60,
                ..measurement()
            })
            .unwrap();
        assert!(older.daily_calories < base.daily_calories);

        let heavier = r
            .resolve(&Measurement {
                weight_kg: 90.0,
                ..measurement()
            })
            .unwrap();
        assert!(heavier.daily_calories > base.daily_calories);

        let taller = r
            .resolve(&Measurement {
                height_m: 1.80,
                ..measurement()
            })
            .unwrap();
        assert!(taller.daily_calories > base.daily_calories);
    }

    #[test]
    fn low_risk_profile_keeps_unreduced_calories() {
        let m = Measurement {
            age: 30,
            weight_kg: 60.0,
            height_m: 1.70,
            blood_sugar_mg_dl: None,
            blood_pressure: Some(BloodPressure {
                systolic: 110,
                diastolic: 70,
            }),
            diabetes_status: DiabetesStatus::None,
            location: "nairobi".to_owned(),
        };
        let profile = resolver().resolve(&m).unwrap();
        assert_eq!(profile.risk_level, RiskLevel::Low);
        // 10*60 + 6.25*170 - 5*30 + 5 = 1517.5; * 1.4 = 2124.5
        assert_eq!(profile.daily_calories, 2125);
    }

    #[test]
    fn restriction_flags_follow_status_and_risk() {
        let profile = resolver().resolve(&measurement()).unwrap();
        assert!(profile.restrictions.limit_sugar);
        assert!(profile.restrictions.increase_fiber);
        assert!(profile.restrictions.portion_control);
        assert!(profile.restrictions.limit_sodium);
        assert!(profile.restrictions.limit_saturated_fat);

        let healthy = Measurement {
            weight_kg: 60.0,
            blood_pressure: Some(BloodPressure {
                systolic: 110,
                diastolic: 70,
            }),
            diabetes_status: DiabetesStatus::None,
            ..measurement()
        };
        let profile = resolver().resolve(&healthy).unwrap();
        assert_eq!(profile.restrictions, DietaryRestrictions::default());
    }
}

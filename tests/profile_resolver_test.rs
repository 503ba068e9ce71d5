// ABOUTME: Integration tests for the patient profile resolver
// ABOUTME: Covers BMI and BP categorization, risk counting, and calorie derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lishe::config::NutritionEngineConfig;
use lishe::errors::ErrorCode;
use lishe::intelligence::ProfileResolver;
use lishe::models::{
    BloodPressure, BmiCategory, BpCategory, DiabetesStatus, Measurement, RiskLevel,
};

fn resolver() -> ProfileResolver {
    ProfileResolver::new(&NutritionEngineConfig::default())
}

fn base_measurement() -> Measurement {
    Measurement {
        age: 30,
        weight_kg: 60.0,
        height_m: 1.70,
        blood_sugar_mg_dl: None,
        blood_pressure: None,
        diabetes_status: DiabetesStatus::None,
        location: "nairobi".to_owned(),
    }
}

#[test]
fn healthy_adult_has_zero_risk_factors() {
    let profile = resolver().resolve(&base_measurement()).unwrap();
    assert_eq!(profile.bmi_category, BmiCategory::Normal);
    assert_eq!(profile.bp_category, BpCategory::Unknown);
    assert_eq!(profile.risk_factors, 0);
    assert_eq!(profile.risk_level, RiskLevel::Low);
    assert_eq!(profile.daily_calories, 2125);
    assert!(!profile.restrictions.limit_sugar);
    assert!(!profile.restrictions.portion_control);
}

#[test]
fn overweight_hypertensive_prediabetic_is_high_risk() {
    let profile = resolver()
        .resolve(&Measurement {
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
        })
        .unwrap();

    assert!((profile.bmi_display - 27.64).abs() < f64::EPSILON);
    assert_eq!(profile.bmi_category, BmiCategory::Overweight);
    assert_eq!(profile.bp_category, BpCategory::HypertensiveStage2);
    assert_eq!(profile.risk_factors, 3);
    assert_eq!(profile.risk_level, RiskLevel::High);

    // BMR 1610 x 1.4 activity = 2254, reduced 10% for the high-risk profile
    assert_eq!(profile.daily_calories, 2029);

    assert!(profile.restrictions.limit_sugar);
    assert!(profile.restrictions.limit_sodium);
    assert!(profile.restrictions.portion_control);
    assert!(profile.restrictions.increase_fiber);
    assert!(profile.restrictions.limit_saturated_fat);
}

#[test]
fn missing_blood_pressure_contributes_no_risk_factor() {
    let profile = resolver()
        .resolve(&Measurement {
            weight_kg: 85.0,
            diabetes_status: DiabetesStatus::Type2,
            ..base_measurement()
        })
        .unwrap();
    // Obese BMI and diabetes, but no BP reading: two factors, not three
    assert_eq!(profile.bp_category, BpCategory::Unknown);
    assert_eq!(profile.risk_factors, 2);
    assert_eq!(profile.risk_level, RiskLevel::Moderate);
}

#[test]
fn risk_level_never_decreases_as_factors_accumulate() {
    let r = resolver();
    let none = r.resolve(&base_measurement()).unwrap();
    let one = r
        .resolve(&Measurement {
            diabetes_status: DiabetesStatus::Type1,
            ..base_measurement()
        })
        .unwrap();
    let two = r
        .resolve(&Measurement {
            diabetes_status: DiabetesStatus::Type1,
            weight_kg: 80.0,
            ..base_measurement()
        })
        .unwrap();
    let three = r
        .resolve(&Measurement {
            diabetes_status: DiabetesStatus::Type1,
            weight_kg: 80.0,
            blood_pressure: Some(BloodPressure {
                systolic: 150,
                diastolic: 95,
            }),
            ..base_measurement()
        })
        .unwrap();

    assert!(none.risk_level <= one.risk_level);
    assert!(one.risk_level <= two.risk_level);
    assert!(two.risk_level <= three.risk_level);
    assert_eq!(three.risk_level, RiskLevel::High);
}

#[test]
fn calorie_need_rises_with_weight_and_falls_with_age() {
    let r = resolver();
    let base = r.resolve(&base_measurement()).unwrap();
    let heavier = r
        .resolve(&Measurement {
            weight_kg: 70.0,
            ..base_measurement()
        })
        .unwrap();
    let older = r
        .resolve(&Measurement {
            age: 60,
            ..base_measurement()
        })
        .unwrap();

    assert!(heavier.daily_calories > base.daily_calories);
    assert!(older.daily_calories < base.daily_calories);
}

#[test]
fn zero_or_negative_measurements_are_rejected() {
    let r = resolver();
    for bad in [
        Measurement {
            age: 0,
            ..base_measurement()
        },
        Measurement {
            weight_kg: 0.0,
            ..base_measurement()
        },
        Measurement {
            weight_kg: -55.0,
            ..base_measurement()
        },
        Measurement {
            height_m: 0.0,
            ..base_measurement()
        },
        Measurement {
            height_m: f64::NAN,
            ..base_measurement()
        },
    ] {
        let err = r.resolve(&bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidMeasurement, "input: {bad:?}");
    }
}

#[test]
fn resolution_is_deterministic() {
    let r = resolver();
    let m = base_measurement();
    let a = serde_json::to_string(&r.resolve(&m).unwrap()).unwrap();
    let b = serde_json::to_string(&r.resolve(&m).unwrap()).unwrap();
    assert_eq!(a, b);
}

// ABOUTME: Integration tests for meal plan composition
// ABOUTME: Covers determinism, GI filtering, catalog gaps, and narrative content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lishe::config::{NutritionEngineConfig, SelectionConfig};
use lishe::constants::clinical::glycemic;
use lishe::intelligence::{MealPlanComposer, ProfileResolver};
use lishe::models::{
    BloodPressure, DiabetesStatus, FoodCatalog, FoodGroup, HealthProfile, MealSlot, Measurement,
};
use lishe::reference::{NutritionFacts, Region, RegionalTable};

fn high_risk_profile() -> HealthProfile {
    ProfileResolver::new(&NutritionEngineConfig::default())
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
        .unwrap()
}

fn low_risk_profile() -> HealthProfile {
    ProfileResolver::new(&NutritionEngineConfig::default())
        .resolve(&Measurement {
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
        })
        .unwrap()
}

fn catalog_for(region: Region) -> FoodCatalog {
    RegionalTable::builtin()
        .unwrap()
        .catalog(region)
        .unwrap()
        .clone()
}

#[test]
fn identical_inputs_produce_byte_identical_plans() {
    let facts = NutritionFacts::builtin().unwrap();
    let composer = MealPlanComposer::new(&facts, SelectionConfig::default());
    let profile = high_risk_profile();
    let catalog = catalog_for(Region::Central);

    let (plan_a, narrative_a) = composer.compose(&profile, &catalog);
    let (plan_b, narrative_b) = composer.compose(&profile, &catalog);

    assert_eq!(
        serde_json::to_string(&plan_a).unwrap(),
        serde_json::to_string(&plan_b).unwrap()
    );
    assert_eq!(
        serde_json::to_string(&narrative_a).unwrap(),
        serde_json::to_string(&narrative_b).unwrap()
    );
}

#[test]
fn plan_always_covers_all_four_meal_slots() {
    let facts = NutritionFacts::builtin().unwrap();
    let composer = MealPlanComposer::new(&facts, SelectionConfig::default());

    for region in Region::ALL {
        let (plan, _) = composer.compose(&low_risk_profile(), &catalog_for(region));
        for slot in MealSlot::ALL {
            assert!(plan.slot(slot).is_some(), "{region} plan is missing a slot");
        }
    }
}

#[test]
fn sugar_restricted_grains_and_fruits_are_low_gi() {
    let facts = NutritionFacts::builtin().unwrap();
    let composer = MealPlanComposer::new(&facts, SelectionConfig::default());
    let (plan, _) = composer.compose(&high_risk_profile(), &catalog_for(Region::Central));

    for slot in MealSlot::ALL {
        let selections = &plan.slot(slot).unwrap().selections;
        for group in [FoodGroup::Grains, FoodGroup::Fruits] {
            let Some(foods) = selections.get(&group) else {
                continue;
            };
            for food in foods {
                assert!(
                    facts.glycemic_index(food) < glycemic::LOW_GI_MAX,
                    "{food} in {} is not low-GI",
                    slot.as_str()
                );
            }
        }
    }
}

#[test]
fn gi_preference_degrades_to_leading_items_when_nothing_qualifies() {
    let facts = NutritionFacts::builtin().unwrap();
    let composer = MealPlanComposer::new(&facts, SelectionConfig::default());

    // No Northern grain is below the low-GI threshold
    let catalog = catalog_for(Region::Northern);
    let all_high = catalog
        .group(FoodGroup::Grains)
        .iter()
        .all(|f| facts.glycemic_index(f) >= glycemic::LOW_GI_MAX);
    assert!(all_high, "precondition: Northern grains are all high-GI");

    let (plan, _) = composer.compose(&high_risk_profile(), &catalog);
    let lunch = plan.slot(MealSlot::Lunch).unwrap();
    assert_eq!(lunch.selections[&FoodGroup::Grains], vec!["sorghum"]);
}

#[test]
fn catalog_gaps_yield_empty_selections_not_failures() {
    let facts = NutritionFacts::builtin().unwrap();
    let composer = MealPlanComposer::new(&facts, SelectionConfig::default());
    let catalog = catalog_for(Region::Central).with_group(FoodGroup::Legumes, Vec::<String>::new());

    let (plan, _) = composer.compose(&low_risk_profile(), &catalog);
    assert_eq!(plan.slots.len(), 4);
    assert!(plan.slot(MealSlot::Lunch).unwrap().selections[&FoodGroup::Legumes].is_empty());
    assert!(plan.slot(MealSlot::Snacks).unwrap().selections[&FoodGroup::Legumes].is_empty());
}

#[test]
fn high_risk_plans_carry_more_vegetables_than_low_risk_plans() {
    let facts = NutritionFacts::builtin().unwrap();
    let composer = MealPlanComposer::new(&facts, SelectionConfig::default());
    let catalog = catalog_for(Region::Central);

    let (high, _) = composer.compose(&high_risk_profile(), &catalog);
    let (low, _) = composer.compose(&low_risk_profile(), &catalog);

    let veg = |plan: &lishe::models::MealPlan, slot| {
        plan.slot(slot).unwrap().selections[&FoodGroup::Vegetables].len()
    };
    assert!(veg(&high, MealSlot::Lunch) > veg(&low, MealSlot::Lunch));
    assert!(veg(&high, MealSlot::Dinner) > veg(&low, MealSlot::Dinner));
}

#[test]
fn narrative_reflects_the_profile_and_the_regional_catalog() {
    let facts = NutritionFacts::builtin().unwrap();
    let composer = MealPlanComposer::new(&facts, SelectionConfig::default());

    let (_, narrative) = composer.compose(&high_risk_profile(), &catalog_for(Region::Central));
    assert!(narrative.summary.contains("high risk"));
    assert!(narrative
        .focus_areas
        .contains(&"blood sugar control".to_owned()));
    assert!(!narrative.restrictions.is_empty());
    // Portion guidance covers every group the plan draws from
    for group in [
        FoodGroup::Grains,
        FoodGroup::Vegetables,
        FoodGroup::Fruits,
        FoodGroup::Proteins,
        FoodGroup::Legumes,
    ] {
        assert!(narrative.portion_guidelines.contains_key(&group));
    }
    // Regional grounding: Central has rice to limit, no sorghum to prefer
    assert!(narrative.foods_to_limit.high_gi.contains(&"rice".to_owned()));
    assert!(!narrative
        .preferred_foods
        .complex_carbs
        .contains(&"sorghum".to_owned()));
}

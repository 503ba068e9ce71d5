// ABOUTME: Meal plan composer merging the health profile with the regional catalog
// ABOUTME: Deterministic first-N selection with low-GI preference and narrative guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Meal plan composition.
//!
//! The composer is the only component that reads both resolver outputs. For
//! each meal slot it draws a bounded number of items per food group from the
//! regional catalog, filtered by the profile's active dietary constraints:
//!
//! - any diabetes-related status prefers low-GI staples in the grains and
//!   fruits groups, degrading to the first available items when the catalog
//!   has no low-GI options;
//! - high-risk or obese profiles get the vegetable-forward selection limits;
//! - the hypertension sodium filter is a documented no-op because the
//!   nutrition reference data carries no sodium field; the restriction still
//!   surfaces in the narrative.
//!
//! Selection is first-N in catalog canonical order, so identical inputs
//! always produce identical plans. An empty catalog group yields an empty
//! selection, never an error.

use crate::config::{SelectionConfig, SlotSelectionLimits};
use crate::constants::clinical::glycemic;
use crate::models::{
    BmiCategory, FoodCatalog, FoodGroup, FoodsToLimit, HealthProfile, MealPlan, MealSlot,
    MealSlotPlan, MealTimingAdvice, Narrative, PreferredFoods, RiskLevel,
};
use crate::reference::NutritionFacts;
use std::collections::BTreeMap;

/// Protein staples considered appropriate at breakfast
const BREAKFAST_PROTEINS: [&str; 2] = ["eggs", "milk"];

/// Substring marking nut-type legumes for the snack slot
const NUT_MARKER: &str = "nut";

/// High-fiber foods worth calling out when fiber intake should increase
const HIGH_FIBER_CANDIDATES: [&str; 5] = ["kale", "spinach", "beans", "sweet_potatoes", "avocados"];

/// Lean protein sources
const LEAN_PROTEIN_CANDIDATES: [&str; 3] = ["fish", "chicken", "eggs"];

/// Complex carbohydrate staples
const COMPLEX_CARB_CANDIDATES: [&str; 3] = ["millet", "sorghum", "sweet_potatoes"];

/// Common high-GI foods to limit under sugar restriction
const HIGH_GI_CANDIDATES: [&str; 3] = ["rice", "watermelon", "dates"];

/// Common high-saturated-fat foods to limit
const HIGH_SAT_FAT_CANDIDATES: [&str; 2] = ["coconut_milk", "groundnuts"];

/// Composes a daily meal plan and narrative from profile and catalog
#[derive(Debug, Clone)]
pub struct MealPlanComposer<'a> {
    facts: &'a NutritionFacts,
    selection: SelectionConfig,
}

impl<'a> MealPlanComposer<'a> {
    /// Create a composer over the nutrition facts table
    #[must_use]
    pub const fn new(facts: &'a NutritionFacts, selection: SelectionConfig) -> Self {
        Self { facts, selection }
    }

    /// Compose the meal plan and narrative. Total function: catalog gaps
    /// produce empty selections, never failures.
    #[must_use]
    pub fn compose(&self, profile: &HealthProfile, catalog: &FoodCatalog) -> (MealPlan, Narrative) {
        let limits = if profile.risk_level == RiskLevel::High
            || profile.bmi_category == BmiCategory::Obese
        {
            &self.selection.vegetable_forward
        } else {
            &self.selection.standard
        };

        let plan = self.build_plan(profile, catalog, limits);
        let narrative = self.build_narrative(profile, catalog);
        (plan, narrative)
    }

    fn build_plan(
        &self,
        profile: &HealthProfile,
        catalog: &FoodCatalog,
        limits: &SlotSelectionLimits,
    ) -> MealPlan {
        let limit_sugar = profile.restrictions.limit_sugar;
        let grains = self.gi_preferred(catalog.group(FoodGroup::Grains), limit_sugar);
        let fruits = self.gi_preferred(catalog.group(FoodGroup::Fruits), limit_sugar);
        let vegetables = catalog.group(FoodGroup::Vegetables);
        let proteins = catalog.group(FoodGroup::Proteins);
        let legumes = catalog.group(FoodGroup::Legumes);

        let breakfast_proteins: Vec<String> = proteins
            .iter()
            .filter(|f| BREAKFAST_PROTEINS.contains(&f.as_str()))
            .take(limits.breakfast_proteins)
            .cloned()
            .collect();
        let snack_nuts: Vec<String> = legumes
            .iter()
            .filter(|f| f.contains(NUT_MARKER))
            .take(limits.snack_nuts)
            .cloned()
            .collect();

        let breakfast = MealSlotPlan {
            slot: MealSlot::Breakfast,
            selections: BTreeMap::from([
                (FoodGroup::Grains, take(&grains, limits.breakfast_grains)),
                (FoodGroup::Proteins, breakfast_proteins),
                (FoodGroup::Fruits, take(&fruits, limits.breakfast_fruits)),
            ]),
        };
        let lunch = MealSlotPlan {
            slot: MealSlot::Lunch,
            selections: BTreeMap::from([
                (FoodGroup::Grains, take(&grains, limits.lunch_grains)),
                (FoodGroup::Proteins, take(proteins, limits.lunch_proteins)),
                (FoodGroup::Vegetables, take(vegetables, limits.lunch_vegetables)),
                (FoodGroup::Legumes, take(legumes, limits.lunch_legumes)),
            ]),
        };
        let dinner = MealSlotPlan {
            slot: MealSlot::Dinner,
            selections: BTreeMap::from([
                (FoodGroup::Grains, take(&grains, limits.dinner_grains)),
                (FoodGroup::Proteins, take(proteins, limits.dinner_proteins)),
                (FoodGroup::Vegetables, take(vegetables, limits.dinner_vegetables)),
            ]),
        };
        let snacks = MealSlotPlan {
            slot: MealSlot::Snacks,
            selections: BTreeMap::from([
                (FoodGroup::Fruits, take(&fruits, limits.snack_fruits)),
                (FoodGroup::Legumes, snack_nuts),
            ]),
        };

        MealPlan {
            slots: vec![breakfast, lunch, dinner, snacks],
        }
    }

    /// Apply the low-GI staple preference to a group. When no item passes
    /// the filter the selection degrades to the first available items
    /// instead of emptying the group.
    fn gi_preferred(&self, foods: &[String], limit_sugar: bool) -> Vec<String> {
        if !limit_sugar {
            return foods.to_vec();
        }
        let low_gi: Vec<String> = foods
            .iter()
            .filter(|f| self.facts.glycemic_index(f) < glycemic::LOW_GI_MAX)
            .cloned()
            .collect();
        if low_gi.is_empty() {
            foods.iter().take(glycemic::GI_FALLBACK_TAKE).cloned().collect()
        } else {
            low_gi
        }
    }

    fn build_narrative(&self, profile: &HealthProfile, catalog: &FoodCatalog) -> Narrative {
        Narrative {
            summary: format!(
                "Patient is {} risk with {} BMI ({}) and diabetes status {}",
                profile.risk_level.as_str(),
                profile.bmi_category.as_str(),
                profile.bmi_display,
                profile.diabetes_status
            ),
            focus_areas: Self::focus_areas(profile),
            restrictions: Self::restriction_notes(profile),
            portion_guidelines: Self::portion_guidelines(profile),
            meal_timing: Self::meal_timing(profile),
            preferred_foods: Self::preferred_foods(profile, catalog),
            foods_to_limit: Self::foods_to_limit(profile, catalog),
        }
    }

    fn focus_areas(profile: &HealthProfile) -> Vec<String> {
        let r = profile.restrictions;
        let mut areas = Vec::new();
        if r.limit_sugar {
            areas.push("blood sugar control".to_owned());
        }
        if r.portion_control {
            areas.push("portion management".to_owned());
        }
        if r.limit_sodium {
            areas.push("sodium reduction".to_owned());
        }
        if r.increase_fiber {
            areas.push("fiber intake".to_owned());
        }
        if areas.is_empty() {
            areas.push("general balanced nutrition".to_owned());
        }
        areas
    }

    fn restriction_notes(profile: &HealthProfile) -> Vec<String> {
        let r = profile.restrictions;
        let mut notes = Vec::new();
        if r.limit_sugar {
            notes.push("Limit refined sugar and prefer low glycemic index staples".to_owned());
        }
        if r.limit_sodium {
            notes.push("Reduce added salt and salty processed foods".to_owned());
        }
        if r.portion_control {
            notes.push("Keep portions small and avoid second servings".to_owned());
        }
        if r.increase_fiber {
            notes.push("Increase fiber through vegetables, legumes, and whole grains".to_owned());
        }
        if r.limit_saturated_fat {
            notes.push("Limit saturated fats such as fatty meats and coconut milk".to_owned());
        }
        notes
    }

    fn portion_guidelines(profile: &HealthProfile) -> BTreeMap<FoodGroup, String> {
        let base = [
            (FoodGroup::Grains, "1/2 cup cooked"),
            (FoodGroup::Vegetables, "1 cup raw or 1/2 cup cooked"),
            (FoodGroup::Fruits, "1 medium fruit or 1/2 cup"),
            (FoodGroup::Proteins, "palm-sized portion (90-120 g)"),
            (FoodGroup::Legumes, "1/2 cup cooked"),
        ];
        let prefix = if profile.risk_level == RiskLevel::High {
            "Small "
        } else if profile.bmi_category == BmiCategory::Obese {
            "Moderate "
        } else {
            ""
        };
        base.into_iter()
            .map(|(group, text)| (group, format!("{prefix}{text}")))
            .collect()
    }

    fn meal_timing(profile: &HealthProfile) -> MealTimingAdvice {
        if profile.diabetes_status.is_diagnosed() {
            MealTimingAdvice {
                frequency: "Eat 3 main meals and 2-3 small snacks".to_owned(),
                timing: "Eat every 3-4 hours to maintain stable blood sugar".to_owned(),
                breakfast: "Within 1 hour of waking up".to_owned(),
                dinner: "At least 2-3 hours before bedtime".to_owned(),
            }
        } else {
            MealTimingAdvice {
                frequency: "3 main meals with optional healthy snacks".to_owned(),
                timing: "Regular meal times help maintain energy levels".to_owned(),
                breakfast: "Start your day with a balanced meal".to_owned(),
                dinner: "Light dinner 2-3 hours before bedtime".to_owned(),
            }
        }
    }

    fn preferred_foods(profile: &HealthProfile, catalog: &FoodCatalog) -> PreferredFoods {
        let in_catalog = |candidates: &[&str]| -> Vec<String> {
            candidates
                .iter()
                .filter(|c| catalog.contains(c))
                .map(|&c| c.to_owned())
                .collect()
        };
        PreferredFoods {
            high_fiber: if profile.restrictions.increase_fiber {
                in_catalog(&HIGH_FIBER_CANDIDATES)
            } else {
                Vec::new()
            },
            lean_proteins: LEAN_PROTEIN_CANDIDATES
                .iter()
                .filter(|c| catalog.group(FoodGroup::Proteins).iter().any(|f| f == *c))
                .map(|&c| c.to_owned())
                .collect(),
            complex_carbs: in_catalog(&COMPLEX_CARB_CANDIDATES),
        }
    }

    fn foods_to_limit(profile: &HealthProfile, catalog: &FoodCatalog) -> FoodsToLimit {
        let in_catalog = |candidates: &[&str]| -> Vec<String> {
            candidates
                .iter()
                .filter(|c| catalog.contains(c))
                .map(|&c| c.to_owned())
                .collect()
        };
        FoodsToLimit {
            high_gi: if profile.restrictions.limit_sugar {
                in_catalog(&HIGH_GI_CANDIDATES)
            } else {
                Vec::new()
            },
            high_saturated_fat: if profile.restrictions.limit_saturated_fat {
                in_catalog(&HIGH_SAT_FAT_CANDIDATES)
            } else {
                Vec::new()
            },
        }
    }
}

fn take(foods: &[String], n: usize) -> Vec<String> {
    foods.iter().take(n).cloned().collect()
}

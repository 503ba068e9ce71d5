// ABOUTME: Nutrition facts reference table keyed by food name
// ABOUTME: Per-100g calories, macronutrients, fiber, and glycemic index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Nutrition facts reference data.
//!
//! A read-only lookup from food name to per-100g nutrition values. The engine
//! only consults the glycemic index for the low-GI staple preference; the
//! remaining fields exist for report consumers. Foods absent from the table
//! degrade to a documented default glycemic index instead of failing. The
//! table carries no sodium data, which is why the hypertension sodium filter
//! is a documented no-op.

use crate::constants::clinical::glycemic;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-100g nutrition values for one food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodNutrition {
    /// Energy (kcal per 100g)
    pub calories_per_100g: f64,
    /// Carbohydrates (g per 100g)
    pub carbs_g: f64,
    /// Protein (g per 100g)
    pub protein_g: f64,
    /// Fat (g per 100g)
    pub fat_g: f64,
    /// Dietary fiber (g per 100g)
    pub fiber_g: f64,
    /// Glycemic index (0 for pure proteins)
    pub glycemic_index: f64,
}

/// (name, kcal/100g, carbs, protein, fat, fiber, glycemic index)
const FACTS: &[(&str, f64, f64, f64, f64, f64, f64)] = &[
    // Grains
    ("maize", 365.0, 74.0, 9.0, 4.7, 7.3, 60.0),
    ("rice", 365.0, 80.0, 7.0, 0.7, 1.3, 73.0),
    ("millet", 378.0, 73.0, 11.0, 4.2, 8.5, 71.0),
    ("wheat", 340.0, 72.0, 13.0, 2.5, 12.2, 30.0),
    ("barley", 354.0, 73.0, 12.0, 2.3, 17.3, 25.0),
    ("sorghum", 339.0, 75.0, 11.0, 3.3, 6.3, 62.0),
    ("finger_millet", 336.0, 72.0, 7.3, 1.3, 3.6, 104.0),
    ("pearl_millet", 361.0, 67.0, 11.0, 5.0, 8.5, 67.0),
    ("cassava", 160.0, 38.0, 1.4, 0.3, 1.8, 46.0),
    ("oats", 389.0, 66.0, 17.0, 7.0, 10.6, 55.0),
    // Vegetables
    ("kale", 35.0, 4.4, 2.9, 0.4, 4.1, 15.0),
    ("spinach", 23.0, 3.6, 2.9, 0.4, 2.2, 15.0),
    ("sweet_potatoes", 86.0, 20.0, 1.6, 0.1, 3.0, 70.0),
    ("cabbage", 25.0, 6.0, 1.3, 0.1, 2.5, 10.0),
    ("carrots", 41.0, 10.0, 0.9, 0.2, 2.8, 47.0),
    ("onions", 40.0, 9.0, 1.1, 0.1, 1.7, 15.0),
    ("tomatoes", 18.0, 3.9, 0.9, 0.2, 1.2, 15.0),
    ("irish_potatoes", 77.0, 17.0, 2.0, 0.1, 2.2, 78.0),
    ("beans_leaves", 45.0, 9.0, 4.2, 0.5, 4.8, 15.0),
    ("okra", 33.0, 7.0, 1.9, 0.2, 3.2, 20.0),
    ("eggplant", 25.0, 6.0, 1.0, 0.2, 3.0, 15.0),
    ("amaranth", 23.0, 4.6, 2.5, 0.3, 2.1, 15.0),
    ("cassava_leaves", 37.0, 7.0, 3.7, 0.6, 3.7, 15.0),
    ("pumpkin_leaves", 19.0, 3.9, 3.0, 0.2, 2.2, 15.0),
    ("pumpkin", 26.0, 7.0, 1.0, 0.1, 0.5, 75.0),
    ("spider_plant", 30.0, 5.5, 3.5, 0.4, 3.2, 15.0),
    ("nightshade", 28.0, 5.8, 2.5, 0.3, 2.8, 15.0),
    // Fruits
    ("bananas", 89.0, 23.0, 1.1, 0.3, 2.6, 62.0),
    ("mangoes", 60.0, 15.0, 0.8, 0.4, 1.6, 51.0),
    ("avocados", 160.0, 9.0, 2.0, 15.0, 7.0, 15.0),
    ("oranges", 47.0, 12.0, 0.9, 0.1, 2.4, 45.0),
    ("passion_fruit", 97.0, 23.0, 2.2, 0.7, 10.4, 30.0),
    ("tree_tomatoes", 31.0, 6.0, 2.0, 0.4, 3.3, 25.0),
    ("macadamia", 718.0, 14.0, 8.0, 76.0, 8.6, 15.0),
    ("coconut", 354.0, 15.0, 3.3, 33.0, 9.0, 45.0),
    ("jackfruit", 95.0, 23.0, 1.7, 0.6, 1.5, 75.0),
    ("baobab_fruit", 162.0, 38.0, 2.3, 0.2, 44.5, 35.0),
    ("cashew_fruit", 46.0, 10.0, 0.8, 0.5, 1.7, 25.0),
    ("tamarind", 239.0, 63.0, 2.8, 0.6, 5.1, 23.0),
    ("sugarcane", 58.0, 13.0, 0.4, 0.5, 0.6, 43.0),
    ("pineapples", 50.0, 13.0, 0.5, 0.1, 1.4, 66.0),
    ("guavas", 68.0, 14.0, 2.6, 1.0, 5.4, 12.0),
    ("dates", 282.0, 75.0, 2.5, 0.4, 8.0, 55.0),
    ("watermelon", 30.0, 8.0, 0.6, 0.2, 0.4, 72.0),
    ("doum_palm", 120.0, 30.0, 1.5, 0.5, 4.2, 45.0),
    ("apples", 52.0, 14.0, 0.3, 0.2, 2.4, 36.0),
    ("strawberries", 32.0, 8.0, 0.7, 0.3, 2.0, 40.0),
    // Legumes
    ("beans", 245.0, 45.0, 15.0, 1.0, 15.0, 29.0),
    ("groundnuts", 567.0, 16.0, 26.0, 49.0, 8.5, 14.0),
    ("peas", 81.0, 14.0, 5.0, 0.4, 5.7, 22.0),
    ("green_grams", 347.0, 63.0, 24.0, 1.2, 16.3, 25.0),
    ("cowpeas", 336.0, 60.0, 24.0, 1.3, 10.6, 33.0),
    ("pigeon_peas", 343.0, 63.0, 22.0, 1.5, 15.0, 22.0),
    ("bambara_nuts", 367.0, 57.0, 19.0, 6.5, 5.6, 30.0),
    ("soya_beans", 446.0, 30.0, 36.0, 20.0, 9.3, 25.0),
    ("black_eyed_peas", 336.0, 60.0, 24.0, 1.3, 10.6, 33.0),
    // Proteins
    ("chicken", 165.0, 0.0, 31.0, 3.6, 0.0, 0.0),
    ("fish", 206.0, 0.0, 22.0, 12.0, 0.0, 0.0),
    ("eggs", 155.0, 1.1, 13.0, 11.0, 0.0, 0.0),
    ("beef", 250.0, 0.0, 26.0, 17.0, 0.0, 0.0),
    ("goat_meat", 143.0, 0.0, 27.0, 3.0, 0.0, 0.0),
    ("camel_meat", 217.0, 0.0, 19.0, 16.0, 0.0, 0.0),
    ("lamb", 294.0, 0.0, 25.0, 21.0, 0.0, 0.0),
    ("milk", 61.0, 4.8, 3.2, 3.3, 0.0, 15.0),
    ("camel_milk", 46.0, 4.4, 3.0, 2.4, 0.0, 15.0),
    ("coconut_milk", 230.0, 6.0, 2.3, 24.0, 2.2, 25.0),
    ("dairy_products", 113.0, 4.7, 3.4, 9.0, 0.0, 15.0),
    ("seafood", 85.0, 0.0, 18.0, 1.2, 0.0, 0.0),
    ("prawns", 71.0, 0.9, 13.0, 1.4, 0.0, 0.0),
    ("crabs", 97.0, 0.0, 20.0, 1.5, 0.0, 0.0),
    ("tilapia", 129.0, 0.0, 26.0, 2.6, 0.0, 0.0),
];

/// Read-only nutrition facts lookup keyed by food name
#[derive(Debug, Clone)]
pub struct NutritionFacts {
    per_food: HashMap<String, FoodNutrition>,
}

impl NutritionFacts {
    /// Build a facts table from entries.
    ///
    /// # Errors
    ///
    /// Returns a data integrity error when a food name appears twice.
    pub fn from_entries<I>(entries: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, FoodNutrition)>,
    {
        let mut per_food = HashMap::new();
        for (name, nutrition) in entries {
            let key = name.trim().to_lowercase();
            if per_food.insert(key.clone(), nutrition).is_some() {
                return Err(AppError::data_integrity(format!(
                    "duplicate nutrition facts entry for '{key}'"
                )));
            }
        }
        Ok(Self { per_food })
    }

    /// Build the builtin facts table
    ///
    /// # Errors
    ///
    /// Returns a data integrity error if the builtin dataset contains
    /// duplicates; checked once at load time.
    pub fn builtin() -> AppResult<Self> {
        Self::from_entries(FACTS.iter().map(
            |&(name, calories_per_100g, carbs_g, protein_g, fat_g, fiber_g, glycemic_index)| {
                (
                    name.to_owned(),
                    FoodNutrition {
                        calories_per_100g,
                        carbs_g,
                        protein_g,
                        fat_g,
                        fiber_g,
                        glycemic_index,
                    },
                )
            },
        ))
    }

    /// Nutrition values for a food, if known
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FoodNutrition> {
        self.per_food.get(name)
    }

    /// Glycemic index for a food, falling back to the documented default for
    /// foods absent from the table.
    #[must_use]
    pub fn glycemic_index(&self, name: &str) -> f64 {
        self.get(name)
            .map_or(glycemic::DEFAULT_GI, |n| n.glycemic_index)
    }

    /// Number of foods in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.per_food.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_food.is_empty()
    }
}

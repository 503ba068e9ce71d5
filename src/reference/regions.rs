// ABOUTME: Regional reference data for Kenya with county aliases and food catalogs
// ABOUTME: Seven fixed regions, each owning a county set and a food catalog by group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Regional reference data.
//!
//! Kenya is partitioned into seven fixed regions. Each region owns a set of
//! county (and major town) aliases and a food catalog partitioned by food
//! group. The tables are immutable for the lifetime of the process: they are
//! built once through [`RegionalTable::from_entries`], which enforces the
//! dataset invariants (no county alias may map to two regions, no duplicate
//! food names within a group) and fails with a data integrity error at load
//! time rather than per request.

use crate::errors::{AppError, AppResult};
use crate::models::{FoodCatalog, FoodGroup};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// One of the seven fixed Kenyan regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Central Kenya, including Nairobi
    Central,
    /// The coastal strip around Mombasa
    Coastal,
    /// Western Kenya around Kisumu
    Western,
    /// Arid northern counties
    Northern,
    /// Eastern Kenya around Machakos
    Eastern,
    /// The Nyanza basin around Kisii
    Nyanza,
    /// The Rift Valley around Nakuru
    RiftValley,
}

impl Region {
    /// All regions in canonical order
    pub const ALL: [Self; 7] = [
        Self::Central,
        Self::Coastal,
        Self::Western,
        Self::Northern,
        Self::Eastern,
        Self::Nyanza,
        Self::RiftValley,
    ];

    /// Canonical lowercase name, matching the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Central => "central",
            Self::Coastal => "coastal",
            Self::Western => "western",
            Self::Northern => "northern",
            Self::Eastern => "eastern",
            Self::Nyanza => "nyanza",
            Self::RiftValley => "rift_valley",
        }
    }

    /// Human-readable name for display output
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Central => "Central",
            Self::Coastal => "Coastal",
            Self::Western => "Western",
            Self::Northern => "Northern",
            Self::Eastern => "Eastern",
            Self::Nyanza => "Nyanza",
            Self::RiftValley => "Rift Valley",
        }
    }

    /// Match a normalized (trimmed, lowercased) name against region names.
    /// Accepts both `rift_valley` and `rift valley` spellings.
    #[must_use]
    pub fn from_normalized_name(name: &str) -> Option<Self> {
        match name {
            "central" => Some(Self::Central),
            "coastal" => Some(Self::Coastal),
            "western" => Some(Self::Western),
            "northern" => Some(Self::Northern),
            "eastern" => Some(Self::Eastern),
            "nyanza" => Some(Self::Nyanza),
            "rift_valley" | "rift valley" => Some(Self::RiftValley),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The documented fallback for unresolved locations
pub const DEFAULT_REGION: Region = Region::Central;

/// County and town aliases mapped to their region (many-to-one)
const COUNTY_ALIASES: &[(&str, Region)] = &[
    // Central Kenya
    ("nairobi", Region::Central),
    ("kiambu", Region::Central),
    ("murang'a", Region::Central),
    ("nyeri", Region::Central),
    ("kirinyaga", Region::Central),
    ("nyandarua", Region::Central),
    ("meru", Region::Central),
    ("tharaka-nithi", Region::Central),
    // Coastal region
    ("mombasa", Region::Coastal),
    ("kilifi", Region::Coastal),
    ("kwale", Region::Coastal),
    ("lamu", Region::Coastal),
    ("tana river", Region::Coastal),
    ("taita-taveta", Region::Coastal),
    // Western Kenya
    ("kisumu", Region::Western),
    ("kakamega", Region::Western),
    ("bungoma", Region::Western),
    ("vihiga", Region::Western),
    ("siaya", Region::Western),
    ("busia", Region::Western),
    ("trans-nzoia", Region::Western),
    // Eastern Kenya
    ("machakos", Region::Eastern),
    ("kitui", Region::Eastern),
    ("makueni", Region::Eastern),
    ("embu", Region::Eastern),
    ("isiolo", Region::Eastern),
    ("marsabit", Region::Eastern),
    ("moyale", Region::Eastern),
    // Northern Kenya
    ("garissa", Region::Northern),
    ("mandera", Region::Northern),
    ("wajir", Region::Northern),
    ("turkana", Region::Northern),
    ("west pokot", Region::Northern),
    ("samburu", Region::Northern),
    // Nyanza region
    ("kisii", Region::Nyanza),
    ("nyamira", Region::Nyanza),
    ("homa bay", Region::Nyanza),
    ("migori", Region::Nyanza),
    ("kericho", Region::Nyanza),
    ("bomet", Region::Nyanza),
    // Rift Valley
    ("nakuru", Region::RiftValley),
    ("eldoret", Region::RiftValley),
    ("narok", Region::RiftValley),
    ("kajiado", Region::RiftValley),
    ("laikipia", Region::RiftValley),
    ("nandi", Region::RiftValley),
    ("uasin gishu", Region::RiftValley),
    ("elgeyo-marakwet", Region::RiftValley),
    ("baringo", Region::RiftValley),
];

fn builtin_catalog(region: Region) -> FoodCatalog {
    match region {
        Region::Central => FoodCatalog::new()
            .with_group(FoodGroup::Grains, ["maize", "wheat", "barley", "millet", "rice"])
            .with_group(
                FoodGroup::Vegetables,
                [
                    "kale",
                    "spinach",
                    "cabbage",
                    "carrots",
                    "onions",
                    "tomatoes",
                    "sweet_potatoes",
                    "irish_potatoes",
                    "beans_leaves",
                ],
            )
            .with_group(
                FoodGroup::Fruits,
                [
                    "bananas",
                    "oranges",
                    "mangoes",
                    "avocados",
                    "passion_fruit",
                    "tree_tomatoes",
                    "macadamia",
                ],
            )
            .with_group(FoodGroup::Legumes, ["beans", "peas", "groundnuts", "green_grams"])
            .with_group(
                FoodGroup::Proteins,
                ["chicken", "beef", "goat_meat", "fish", "eggs", "milk", "dairy_products"],
            ),
        Region::Coastal => FoodCatalog::new()
            .with_group(FoodGroup::Grains, ["rice", "maize", "cassava", "millet", "sorghum"])
            .with_group(
                FoodGroup::Vegetables,
                [
                    "okra",
                    "eggplant",
                    "amaranth",
                    "sweet_potatoes",
                    "cassava_leaves",
                    "pumpkin_leaves",
                    "spinach",
                ],
            )
            .with_group(
                FoodGroup::Fruits,
                [
                    "coconut",
                    "mangoes",
                    "jackfruit",
                    "baobab_fruit",
                    "oranges",
                    "bananas",
                    "cashew_fruit",
                    "tamarind",
                ],
            )
            .with_group(
                FoodGroup::Legumes,
                ["cowpeas", "pigeon_peas", "green_grams", "bambara_nuts"],
            )
            .with_group(
                FoodGroup::Proteins,
                ["fish", "seafood", "prawns", "crabs", "chicken", "goat_meat", "coconut_milk"],
            ),
        Region::Western => FoodCatalog::new()
            .with_group(
                FoodGroup::Grains,
                ["maize", "millet", "sorghum", "finger_millet", "rice"],
            )
            .with_group(
                FoodGroup::Vegetables,
                [
                    "kale",
                    "spinach",
                    "pumpkin",
                    "sweet_potatoes",
                    "irish_potatoes",
                    "onions",
                    "tomatoes",
                    "cabbage",
                ],
            )
            .with_group(
                FoodGroup::Fruits,
                [
                    "bananas",
                    "sugarcane",
                    "pineapples",
                    "passion_fruit",
                    "oranges",
                    "mangoes",
                    "guavas",
                ],
            )
            .with_group(FoodGroup::Legumes, ["beans", "groundnuts", "soya_beans", "cowpeas"])
            .with_group(
                FoodGroup::Proteins,
                ["fish", "chicken", "beef", "milk", "eggs", "tilapia"],
            ),
        Region::Northern => FoodCatalog::new()
            .with_group(FoodGroup::Grains, ["sorghum", "millet", "maize", "pearl_millet"])
            .with_group(
                FoodGroup::Vegetables,
                ["kale", "onions", "tomatoes", "sweet_potatoes", "pumpkin", "amaranth"],
            )
            .with_group(FoodGroup::Fruits, ["dates", "mangoes", "watermelon", "doum_palm"])
            .with_group(FoodGroup::Legumes, ["cowpeas", "pigeon_peas", "black_eyed_peas"])
            .with_group(
                FoodGroup::Proteins,
                ["goat_meat", "camel_meat", "beef", "milk", "camel_milk"],
            ),
        Region::Eastern => FoodCatalog::new()
            .with_group(FoodGroup::Grains, ["maize", "millet", "sorghum", "finger_millet"])
            .with_group(
                FoodGroup::Vegetables,
                [
                    "kale",
                    "spinach",
                    "pumpkin",
                    "sweet_potatoes",
                    "cassava",
                    "onions",
                    "tomatoes",
                ],
            )
            .with_group(
                FoodGroup::Fruits,
                ["mangoes", "oranges", "bananas", "watermelon", "baobab_fruit", "passion_fruit"],
            )
            .with_group(
                FoodGroup::Legumes,
                ["cowpeas", "green_grams", "pigeon_peas", "beans"],
            )
            .with_group(FoodGroup::Proteins, ["goat_meat", "beef", "chicken", "milk", "eggs"]),
        Region::Nyanza => FoodCatalog::new()
            .with_group(
                FoodGroup::Grains,
                ["maize", "millet", "sorghum", "finger_millet", "rice"],
            )
            .with_group(
                FoodGroup::Vegetables,
                [
                    "kale",
                    "spinach",
                    "sweet_potatoes",
                    "pumpkin",
                    "amaranth",
                    "spider_plant",
                    "nightshade",
                ],
            )
            .with_group(
                FoodGroup::Fruits,
                ["bananas", "oranges", "mangoes", "sugarcane", "passion_fruit", "guavas"],
            )
            .with_group(
                FoodGroup::Legumes,
                ["beans", "groundnuts", "soya_beans", "cowpeas", "green_grams"],
            )
            .with_group(
                FoodGroup::Proteins,
                ["fish", "tilapia", "chicken", "beef", "milk", "eggs"],
            ),
        Region::RiftValley => FoodCatalog::new()
            .with_group(FoodGroup::Grains, ["maize", "wheat", "barley", "millet", "oats"])
            .with_group(
                FoodGroup::Vegetables,
                [
                    "kale",
                    "cabbage",
                    "carrots",
                    "onions",
                    "irish_potatoes",
                    "sweet_potatoes",
                    "spinach",
                ],
            )
            .with_group(
                FoodGroup::Fruits,
                ["bananas", "oranges", "mangoes", "apples", "passion_fruit", "strawberries"],
            )
            .with_group(FoodGroup::Legumes, ["beans", "peas", "groundnuts", "green_grams"])
            .with_group(
                FoodGroup::Proteins,
                ["beef", "lamb", "chicken", "milk", "eggs", "dairy_products"],
            ),
    }
}

/// Immutable lookup table mapping counties to regions and regions to catalogs
#[derive(Debug, Clone)]
pub struct RegionalTable {
    aliases: HashMap<String, Region>,
    catalogs: BTreeMap<Region, FoodCatalog>,
}

impl RegionalTable {
    /// Build a table from alias and catalog entries, enforcing the dataset
    /// invariants.
    ///
    /// # Errors
    ///
    /// Returns a data integrity error when a county alias maps to more than
    /// one region, when a food name repeats within a group, or when a region
    /// has no catalog.
    pub fn from_entries<A, C>(aliases: A, catalogs: C) -> AppResult<Self>
    where
        A: IntoIterator<Item = (String, Region)>,
        C: IntoIterator<Item = (Region, FoodCatalog)>,
    {
        let mut alias_map: HashMap<String, Region> = HashMap::new();
        for (raw, region) in aliases {
            let key = raw.trim().to_lowercase();
            if key.is_empty() {
                return Err(AppError::data_integrity("empty county alias"));
            }
            if let Some(existing) = alias_map.insert(key.clone(), region) {
                if existing != region {
                    return Err(AppError::data_integrity(format!(
                        "county '{key}' is mapped to both {existing} and {region}"
                    )));
                }
            }
        }

        let catalog_map: BTreeMap<Region, FoodCatalog> = catalogs.into_iter().collect();
        for region in Region::ALL {
            let Some(catalog) = catalog_map.get(&region) else {
                return Err(AppError::data_integrity(format!(
                    "region {region} has no food catalog"
                )));
            };
            for (group, foods) in &catalog.groups {
                let mut seen = std::collections::HashSet::new();
                for food in foods {
                    if !seen.insert(food.as_str()) {
                        return Err(AppError::data_integrity(format!(
                            "duplicate food '{food}' in {region} {}",
                            group.as_str()
                        )));
                    }
                }
            }
        }

        Ok(Self {
            aliases: alias_map,
            catalogs: catalog_map,
        })
    }

    /// Build the builtin Kenya table
    ///
    /// # Errors
    ///
    /// Returns a data integrity error if the builtin dataset violates its
    /// invariants; this is checked at load time, never per request.
    pub fn builtin() -> AppResult<Self> {
        Self::from_entries(
            COUNTY_ALIASES
                .iter()
                .map(|&(name, region)| (name.to_owned(), region)),
            Region::ALL
                .into_iter()
                .map(|region| (region, builtin_catalog(region))),
        )
    }

    /// Resolve a normalized location against county aliases first, then
    /// region names.
    #[must_use]
    pub fn resolve_region(&self, location: &str) -> Option<Region> {
        let normalized = location.trim().to_lowercase();
        self.aliases
            .get(normalized.as_str())
            .copied()
            .or_else(|| Region::from_normalized_name(&normalized))
    }

    /// The catalog for a region
    #[must_use]
    pub fn catalog(&self, region: Region) -> Option<&FoodCatalog> {
        self.catalogs.get(&region)
    }

    /// Number of county aliases in the table
    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

// ABOUTME: Regional food resolver mapping free-text locations to a region and catalog
// ABOUTME: County aliases match first, then region names; unknown input falls back flagged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lishe Health

//! Regional food resolution.
//!
//! Location input is free text typed by patients and community health
//! workers, so resolution is forgiving: matching is case-insensitive with
//! surrounding whitespace stripped, county aliases take precedence over
//! region names, and anything unrecognized falls back to the default region
//! with an observable flag instead of failing the request.

use crate::models::FoodCatalog;
use crate::reference::{Region, RegionalTable, DEFAULT_REGION};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Outcome of resolving a location string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRegion {
    /// The resolved (or fallback) region
    pub region: Region,
    /// True when the location did not match and the default region was used
    pub fallback: bool,
    /// The region's food catalog
    pub catalog: FoodCatalog,
}

/// Resolves locations against the regional reference table
#[derive(Debug, Clone)]
pub struct RegionalFoodResolver<'a> {
    table: &'a RegionalTable,
}

impl<'a> RegionalFoodResolver<'a> {
    /// Create a resolver over a validated regional table
    #[must_use]
    pub const fn new(table: &'a RegionalTable) -> Self {
        Self { table }
    }

    /// Resolve a free-text location to a region and its food catalog.
    /// Never fails: unknown locations fall back to [`DEFAULT_REGION`] with
    /// the `fallback` flag set.
    #[must_use]
    pub fn resolve(&self, location: &str) -> ResolvedRegion {
        let (region, fallback) = match self.table.resolve_region(location) {
            Some(region) => (region, false),
            None => {
                warn!(
                    location = location.trim(),
                    default = DEFAULT_REGION.as_str(),
                    "location not recognized, using default region"
                );
                (DEFAULT_REGION, true)
            }
        };

        let catalog = self
            .table
            .catalog(region)
            .cloned()
            .unwrap_or_default();

        ResolvedRegion {
            region,
            fallback,
            catalog,
        }
    }
}

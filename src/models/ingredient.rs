// ABOUTME: Canonical ingredient reference records and pairwise interaction rows
// ABOUTME: IngredientMaster, IngredientInteraction, and InteractionType definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical reference record for one nutrient/ingredient
///
/// Read-only reference data. Either daily bound may be absent; absence
/// changes the classification rules (see
/// [`classify`](crate::intelligence::aggregator::classify)).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientMaster {
    /// Numeric reference id
    pub id: i64,
    /// Stable ingredient code (e.g. `VIT_D`), independent of product names
    pub code: String,
    /// Display name shown to users
    pub name: String,
    /// Unit of measure (e.g. "mg", "IU")
    pub unit: String,
    /// Minimum recommended daily amount, if established
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    /// Maximum recommended daily amount, if established
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
}

/// Direction-tagged relationship between two ingredients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    /// The two ingredients work well together
    Positive,
    /// The two ingredients should be avoided together
    Negative,
}

impl InteractionType {
    /// Parse an interaction type from a row's string column
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "positive" => Self::Positive,
            _ => Self::Negative,
        }
    }
}

/// Directed pairwise relationship between two [`IngredientMaster`] records
///
/// Read-only reference data. Source/target display names are pre-joined by
/// the caller so the recommender can match against the user's current
/// ingredient names without a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientInteraction {
    /// Reference id of the source ingredient
    pub source_ingredient_id: i64,
    /// Reference id of the target ingredient
    pub target_ingredient_id: i64,
    /// Display name of the source ingredient
    pub source_name: String,
    /// Display name of the target ingredient
    pub target_name: String,
    /// Whether the pairing is a synergy or a conflict
    pub interaction_type: InteractionType,
    /// Free-text description of the relationship
    pub description: String,
}

/// Code-keyed view over the ingredient master list
///
/// Built once per analysis request so the detector and aggregator can
/// resolve codes without rescanning the list.
pub struct MasterIndex<'a> {
    by_code: HashMap<&'a str, &'a IngredientMaster>,
}

impl<'a> MasterIndex<'a> {
    /// Index the master list by ingredient code
    #[must_use]
    pub fn new(masters: &'a [IngredientMaster]) -> Self {
        Self {
            by_code: masters.iter().map(|m| (m.code.as_str(), m)).collect(),
        }
    }

    /// Look up a master record by code
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&'a IngredientMaster> {
        self.by_code.get(code).copied()
    }

    /// Whether a master record exists for this code
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }
}

// ABOUTME: Derived analysis result types produced by the supplement pipeline
// ABOUTME: IngredientAnalysisResult, status enum, recommendations, and report envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

use serde::{Deserialize, Serialize};

/// Classification of a summed intake against the reference bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IngredientStatus {
    /// Intake below the minimum recommended amount
    Deficient,
    /// Intake within (or without) the reference bounds
    Adequate,
    /// Intake above the maximum recommended amount
    Excessive,
}

/// Per-ingredient rollup for one user at one point in time
///
/// Computed fresh on every analysis request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientAnalysisResult {
    /// Result id: `ingredient-{code}` in the main list, `duplicate-{code}`
    /// in the duplicates list
    pub id: String,
    /// Ingredient display name from the reference record
    pub ingredient_name: String,
    /// Classification against the reference bounds
    pub status: IngredientStatus,
    /// Summed daily intake, rounded to one decimal place
    pub current_amount: f64,
    /// Minimum reference bound carried through, if established
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    /// Maximum reference bound carried through, if established
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
    /// Unit of measure carried through from the reference record
    pub unit: String,
    /// Display names of the routines that contributed this ingredient
    pub source_supplements: Vec<String>,
    /// Human-readable reference range (e.g. "500~2000mg", "400IU 이상")
    pub recommended_range: String,
}

/// One suggested ingredient with its supporting synergy descriptions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRecommendation {
    /// Display name of the suggested ingredient
    pub ingredient_name: String,
    /// De-duplicated synergy descriptions that motivated the suggestion
    pub interactions: Vec<String>,
}

/// Name/dosage summary of one analyzed routine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementSummary {
    /// Routine display name
    pub name: String,
    /// Overall dosage description
    pub dosage: String,
}

/// Complete analysis output for one user
///
/// `ingredients` and `duplicates` are two independently consumable views
/// of overlapping data: an ingredient contributed by two or more routines
/// appears in both lists, re-tagged with a distinct id prefix in
/// `duplicates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementAnalysisReport {
    /// One rollup per distinct detected ingredient
    pub ingredients: Vec<IngredientAnalysisResult>,
    /// Rollups for ingredients sourced from two or more routines
    pub duplicates: Vec<IngredientAnalysisResult>,
    /// Up to five suggested ingredients with positive synergy
    pub recommendations: Vec<IngredientRecommendation>,
    /// Name/dosage summaries of the analyzed routines
    pub supplements: Vec<SupplementSummary>,
    /// True iff any duplicate exists or any ingredient is excessive
    pub has_warning: bool,
}

impl SupplementAnalysisReport {
    /// Empty report for a user with nothing to analyze
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ingredients: Vec::new(),
            duplicates: Vec::new(),
            recommendations: Vec::new(),
            supplements: Vec::new(),
            has_warning: false,
        }
    }
}

// ABOUTME: Pipeline orchestration for supplement analysis requests
// ABOUTME: Runs detection, aggregation, and recommendation and assembles the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

//! Supplement Analyzer Module
//!
//! The main entry point combining the three pipeline stages. Invoked
//! synchronously within one inbound request; fully stateless and
//! side-effect-free - it performs only reads and returns a computed
//! structure, so running it twice on identical inputs yields identical
//! output.

use crate::config::AnalysisConfig;
use crate::intelligence::aggregator::{aggregate, dose_count, RoutineContribution};
use crate::intelligence::detector::IngredientDetector;
use crate::intelligence::recommender::recommend;
use crate::models::{
    IngredientInteraction, IngredientMaster, IngredientStatus, MasterIndex,
    SupplementAnalysisReport, SupplementRoutine, SupplementSummary,
};
use tracing::debug;

/// Stateless analyzer running the full pipeline per request
pub struct SupplementAnalyzer;

impl SupplementAnalyzer {
    /// Analyze a user's supplement routines
    ///
    /// Inactive routines are skipped. An empty routine list is a valid
    /// "nothing to analyze" input and produces an empty report, not an
    /// error; this function is total for well-formed input.
    #[must_use]
    pub fn analyze(
        routines: &[SupplementRoutine],
        masters: &[IngredientMaster],
        interactions: &[IngredientInteraction],
        config: &AnalysisConfig,
    ) -> SupplementAnalysisReport {
        let master_index = MasterIndex::new(masters);

        let active: Vec<&SupplementRoutine> =
            routines.iter().filter(|routine| routine.is_active).collect();

        // Stage 1: per-routine ingredient detection
        let contributions: Vec<RoutineContribution> = active
            .iter()
            .map(|routine| RoutineContribution {
                routine_name: routine.name.clone(),
                dose_count: dose_count(routine),
                detected: IngredientDetector::detect(
                    &routine.name,
                    &master_index,
                    &config.detector,
                ),
            })
            .collect();

        // Stage 2: aggregation, classification, duplicate detection
        let (ingredients, duplicates) = aggregate(&contributions, &master_index);

        // Stage 3: synergy recommendations against the current set
        let current_names: Vec<String> = ingredients
            .iter()
            .map(|ingredient| ingredient.ingredient_name.clone())
            .collect();
        let recommendations = recommend(&current_names, interactions, &config.recommender);

        let supplements: Vec<SupplementSummary> = active
            .iter()
            .map(|routine| SupplementSummary {
                name: routine.name.clone(),
                dosage: routine.dosage.clone(),
            })
            .collect();

        let has_warning = !duplicates.is_empty()
            || ingredients
                .iter()
                .any(|ingredient| ingredient.status == IngredientStatus::Excessive);

        debug!(
            analysis.routines = active.len(),
            analysis.ingredients = ingredients.len(),
            analysis.duplicates = duplicates.len(),
            analysis.recommendations = recommendations.len(),
            analysis.has_warning = has_warning,
            "supplement analysis complete"
        );

        SupplementAnalysisReport {
            ingredients,
            duplicates,
            recommendations,
            supplements,
            has_warning,
        }
    }
}

// ABOUTME: Intake aggregation and classification across a user's routines
// ABOUTME: Dose-count parsing, per-ingredient summation, bounds classification, duplicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

//! Aggregator / Classifier Module
//!
//! Sums detected per-dose amounts across all of a user's routines, joins
//! the totals against the ingredient master list, classifies each total
//! into deficient/adequate/excessive, and flags ingredients sourced from
//! two or more routines as duplicates.
//!
//! Missing reference data is handled by omission: a detected code with no
//! master record is silently dropped. Every function here is total.

use crate::intelligence::detector::DetectedIngredient;
use crate::models::{
    IngredientAnalysisResult, IngredientStatus, MasterIndex, SupplementRoutine,
};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// Reference-range text when neither bound is established
pub const NO_REFERENCE_TEXT: &str = "권장 섭취 기준 정보 없음";

static DOSE_COUNT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches the first digit sequence in "1정", "하루 2회", "10ml"
    Regex::new(r"\d+").ok()
});

/// One routine's detected ingredients plus its dose-count multiplier
#[derive(Debug, Clone)]
pub struct RoutineContribution {
    /// Routine display name, tracked per ingredient for duplicate detection
    pub routine_name: String,
    /// Doses per day, parsed from the first scheduled dose slot
    pub dose_count: u32,
    /// Ingredients detected in the routine name
    pub detected: Vec<DetectedIngredient>,
}

/// Derive a routine's dose-count multiplier
///
/// Parses the first digit sequence out of the first scheduled dose slot's
/// dosage string; a missing schedule, no digits, or an unparseable number
/// all default to 1.
#[must_use]
pub fn dose_count(routine: &SupplementRoutine) -> u32 {
    let Some(first) = routine
        .scheduled_doses
        .as_ref()
        .and_then(|doses| doses.first())
    else {
        return 1;
    };

    DOSE_COUNT_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.find(&first.dosage))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
        .unwrap_or(1)
}

/// Classify a summed intake against the reference bounds
///
/// Boundary-inclusive: with both bounds present, `adequate` iff
/// `min <= amount <= max`. A missing bound removes the corresponding
/// status from the decision table; with neither bound the intake is
/// always `adequate`.
#[must_use]
pub fn classify(amount: f64, min_amount: Option<f64>, max_amount: Option<f64>) -> IngredientStatus {
    match (min_amount, max_amount) {
        (Some(min), Some(max)) => {
            if amount < min {
                IngredientStatus::Deficient
            } else if amount > max {
                IngredientStatus::Excessive
            } else {
                IngredientStatus::Adequate
            }
        }
        (Some(min), None) => {
            if amount < min {
                IngredientStatus::Deficient
            } else {
                IngredientStatus::Adequate
            }
        }
        (None, Some(max)) => {
            if amount > max {
                IngredientStatus::Excessive
            } else {
                IngredientStatus::Adequate
            }
        }
        (None, None) => IngredientStatus::Adequate,
    }
}

/// Round to one decimal place, half-up
///
/// `f64::round` rounds half away from zero, which equals half-up for the
/// non-negative amounts in this domain. Not banker's rounding.
#[must_use]
pub fn round_half_up(amount: f64) -> f64 {
    (amount * 10.0).round() / 10.0
}

/// Human-readable reference range for the given bounds
#[must_use]
pub fn reference_range_text(
    min_amount: Option<f64>,
    max_amount: Option<f64>,
    unit: &str,
) -> String {
    match (min_amount, max_amount) {
        (Some(min), Some(max)) => format!("{min}~{max}{unit}"),
        (Some(min), None) => format!("{min}{unit} 이상"),
        (None, Some(max)) => format!("{max}{unit} 미만"),
        (None, None) => NO_REFERENCE_TEXT.to_owned(),
    }
}

/// Aggregate routine contributions into per-ingredient analysis results
///
/// Returns `(ingredients, duplicates)`. Result order is the order codes
/// were first contributed; per-ingredient source names keep routine
/// iteration order. An ingredient contributed by two or more routines is
/// re-emitted in `duplicates` with its id re-tagged.
#[must_use]
pub fn aggregate(
    contributions: &[RoutineContribution],
    masters: &MasterIndex<'_>,
) -> (Vec<IngredientAnalysisResult>, Vec<IngredientAnalysisResult>) {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();
    let mut sources: HashMap<String, Vec<String>> = HashMap::new();

    for contribution in contributions {
        let multiplier = f64::from(contribution.dose_count);
        for detected in &contribution.detected {
            if !masters.contains(&detected.code) {
                debug!(
                    ingredient.code = %detected.code,
                    routine.name = %contribution.routine_name,
                    "dropping detected ingredient with no master record"
                );
                continue;
            }
            if !totals.contains_key(&detected.code) {
                order.push(detected.code.clone());
            }
            *totals.entry(detected.code.clone()).or_insert(0.0) +=
                detected.per_dose_amount * multiplier;
            sources
                .entry(detected.code.clone())
                .or_default()
                .push(contribution.routine_name.clone());
        }
    }

    let mut ingredients = Vec::with_capacity(order.len());
    let mut duplicates = Vec::new();

    for code in &order {
        let Some(master) = masters.get(code) else {
            continue;
        };
        let total = totals.get(code).copied().unwrap_or(0.0);
        let source_supplements = sources.remove(code).unwrap_or_default();

        let result = IngredientAnalysisResult {
            id: format!("ingredient-{code}"),
            ingredient_name: master.name.clone(),
            status: classify(total, master.min_amount, master.max_amount),
            current_amount: round_half_up(total),
            min_amount: master.min_amount,
            max_amount: master.max_amount,
            unit: master.unit.clone(),
            source_supplements,
            recommended_range: reference_range_text(
                master.min_amount,
                master.max_amount,
                &master.unit,
            ),
        };

        if result.source_supplements.len() >= 2 {
            let mut duplicate = result.clone();
            duplicate.id = format!("duplicate-{code}");
            duplicates.push(duplicate);
        }
        ingredients.push(result);
    }

    (ingredients, duplicates)
}

// ABOUTME: Keyword-based ingredient detection from free-text supplement names
// ABOUTME: Ordered substring matching with first-match-wins dedup and a fallback ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

//! Ingredient Detector Module
//!
//! Maps a routine's free-text display name to canonical ingredient codes
//! and per-dose amounts. Matching is pure substring containment against an
//! ordered keyword table - no fuzzy matching, no tokenization. Detection is
//! total: a name matching zero keywords falls back to a designated
//! ingredient rather than returning an empty list.

use crate::config::DetectorConfig;
use crate::models::MasterIndex;
use std::collections::HashSet;
use tracing::trace;

/// One ingredient detected in a routine name
#[derive(Debug, Clone)]
pub struct DetectedIngredient {
    /// Canonical ingredient code
    pub code: String,
    /// Amount contributed per dose, in the ingredient's master unit
    pub per_dose_amount: f64,
}

/// Stateless detector over the configured keyword table
pub struct IngredientDetector;

impl IngredientDetector {
    /// Detect the ingredients a routine name refers to
    ///
    /// Every keyword is tested independently against the lower-cased name,
    /// in the table's fixed iteration order; the first rule that
    /// contributes a given code wins and later matches for the same code
    /// are skipped. Zero matches emit the fallback ingredient at its
    /// master-defined minimum amount (or the configured fallback amount
    /// when the master has no minimum), so every routine contributes at
    /// least one row downstream.
    #[must_use]
    pub fn detect(
        name: &str,
        masters: &MasterIndex<'_>,
        config: &DetectorConfig,
    ) -> Vec<DetectedIngredient> {
        let lowered = name.to_lowercase();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut detected = Vec::new();

        for rule in &config.keyword_rules {
            if !lowered.contains(rule.pattern.as_str()) {
                continue;
            }
            for dose in &rule.ingredients {
                // First match wins per code within one detection call
                if seen.insert(dose.code.as_str()) {
                    detected.push(DetectedIngredient {
                        code: dose.code.clone(),
                        per_dose_amount: dose.amount,
                    });
                }
            }
        }

        if detected.is_empty() {
            let amount = masters
                .get(&config.fallback_code)
                .and_then(|master| master.min_amount)
                .unwrap_or(config.fallback_amount);
            trace!(
                routine.name = %name,
                fallback.code = %config.fallback_code,
                fallback.amount = amount,
                "no keyword matched, emitting fallback ingredient"
            );
            detected.push(DetectedIngredient {
                code: config.fallback_code.clone(),
                per_dose_amount: amount,
            });
        }

        detected
    }
}

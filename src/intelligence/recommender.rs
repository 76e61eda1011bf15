// ABOUTME: Synergy-based ingredient recommendation from the pairwise interaction table
// ABOUTME: Positive-interaction scan with a global negative-target safety filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

//! Recommender Module
//!
//! Suggests ingredients with positive synergy to something the user
//! already takes. A candidate is suppressed if its id is ever the target
//! of a negative interaction anywhere in the table - a global filter, not
//! scoped to the user's current ingredient set (see DESIGN.md).

use crate::config::RecommenderConfig;
use crate::models::{IngredientInteraction, IngredientRecommendation, InteractionType};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Suggest up to `max_recommendations` ingredients for the current set
///
/// Scans positive interactions in table order. The target of an
/// interaction is a candidate iff its source is in the user's current set,
/// the target is not, and the target is never flagged as a negative-
/// interaction target globally. Descriptions are grouped per candidate and
/// de-duplicated; the candidate list keeps first-encounter order.
#[must_use]
pub fn recommend(
    current_names: &[String],
    interactions: &[IngredientInteraction],
    config: &RecommenderConfig,
) -> Vec<IngredientRecommendation> {
    let current: HashSet<&str> = current_names.iter().map(String::as_str).collect();

    let negative_targets: HashSet<i64> = interactions
        .iter()
        .filter(|i| i.interaction_type == InteractionType::Negative)
        .map(|i| i.target_ingredient_id)
        .collect();

    let mut order: Vec<String> = Vec::new();
    let mut grouped: HashMap<String, Vec<String>> = HashMap::new();

    for interaction in interactions
        .iter()
        .filter(|i| i.interaction_type == InteractionType::Positive)
    {
        if !current.contains(interaction.source_name.as_str()) {
            continue;
        }
        if current.contains(interaction.target_name.as_str()) {
            continue;
        }
        if negative_targets.contains(&interaction.target_ingredient_id) {
            trace!(
                candidate = %interaction.target_name,
                "suppressing candidate flagged as a negative-interaction target"
            );
            continue;
        }

        let descriptions = match grouped.entry(interaction.target_name.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                order.push(interaction.target_name.clone());
                entry.insert(Vec::new())
            }
        };
        if !descriptions.contains(&interaction.description) {
            descriptions.push(interaction.description.clone());
        }
    }

    order
        .into_iter()
        .take(config.max_recommendations)
        .map(|ingredient_name| {
            let interactions = grouped.remove(&ingredient_name).unwrap_or_default();
            IngredientRecommendation {
                ingredient_name,
                interactions,
            }
        })
        .collect()
}

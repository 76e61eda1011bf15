// ABOUTME: Shared test fixtures for supplement analysis integration tests
// ABOUTME: Builders for routines, ingredient masters, and interaction rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `supplement_intelligence`
//!
//! Builders for the three pipeline inputs, plus quiet logging setup,
//! to reduce duplication across integration tests.

use std::sync::Once;
use supplement_intelligence::models::{
    IngredientInteraction, IngredientMaster, InteractionType, ScheduledDose, SupplementRoutine,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Ingredient master record with both bounds
pub fn master(
    id: i64,
    code: &str,
    name: &str,
    unit: &str,
    min_amount: Option<f64>,
    max_amount: Option<f64>,
) -> IngredientMaster {
    IngredientMaster {
        id,
        code: code.to_owned(),
        name: name.to_owned(),
        unit: unit.to_owned(),
        min_amount,
        max_amount,
    }
}

/// Routine with a single scheduled dose slot
pub fn routine_with_dose(id: &str, name: &str, dosage: &str, slot_dosage: &str) -> SupplementRoutine {
    SupplementRoutine::new(id, name, dosage)
        .with_scheduled_doses(vec![ScheduledDose::new(slot_dosage)])
}

/// Interaction row with pre-joined display names
pub fn interaction(
    source_id: i64,
    target_id: i64,
    source_name: &str,
    target_name: &str,
    interaction_type: InteractionType,
    description: &str,
) -> IngredientInteraction {
    IngredientInteraction {
        source_ingredient_id: source_id,
        target_ingredient_id: target_id,
        source_name: source_name.to_owned(),
        target_name: target_name.to_owned(),
        interaction_type,
        description: description.to_owned(),
    }
}

/// Reference list covering the ingredients exercised by the scenarios
pub fn default_masters() -> Vec<IngredientMaster> {
    vec![
        master(1, "OMEGA3", "오메가3", "mg", Some(500.0), Some(2000.0)),
        master(2, "VIT_C", "비타민C", "mg", Some(100.0), Some(1000.0)),
        master(3, "VIT_D", "비타민D", "IU", Some(400.0), Some(4000.0)),
        master(4, "CALCIUM", "칼슘", "mg", Some(200.0), Some(2500.0)),
        master(5, "IRON", "철분", "mg", Some(8.0), Some(45.0)),
        master(6, "LUTEIN", "루테인", "mg", None, None),
        master(7, "ZINC", "아연", "mg", None, Some(40.0)),
        master(8, "MAGNESIUM", "마그네슘", "mg", Some(50.0), None),
    ]
}

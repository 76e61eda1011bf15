// ABOUTME: End-to-end tests for the supplement analysis pipeline
// ABOUTME: Detection, aggregation, classification, duplicates, recommendations, envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness
//! Comprehensive pipeline tests for the supplement analysis engine
//!
//! Covers the full analyze() surface through the public API:
//! - keyword detection with fallback and first-match-wins dedup
//! - dose-count multiplication and per-ingredient aggregation
//! - boundary-inclusive classification against reference bounds
//! - duplicate-source detection and id re-tagging
//! - synergy recommendations with the global negative-target filter
//! - report envelope shape, warning flag, and idempotence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use supplement_intelligence::config::AnalysisConfig;
use supplement_intelligence::intelligence::SupplementAnalyzer;
use supplement_intelligence::models::{IngredientStatus, InteractionType, SupplementRoutine};

mod common;

use common::{default_masters, interaction, master, routine_with_dose};

// ============================================================================
// SCENARIO TESTS - observed end-to-end behavior
// ============================================================================

#[test]
fn test_omega3_routine_detected_and_adequate() {
    common::init_test_logging();

    // "오메가3 1000mg" at one dose per day against OMEGA3 [500, 2000]
    let routines = vec![routine_with_dose("r-1", "오메가3 1000mg", "1일 1회", "1정")];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    assert_eq!(report.ingredients.len(), 1);
    let omega = &report.ingredients[0];
    assert_eq!(omega.id, "ingredient-OMEGA3");
    assert_eq!(omega.ingredient_name, "오메가3");
    assert!((omega.current_amount - 1000.0).abs() < f64::EPSILON);
    assert_eq!(omega.status, IngredientStatus::Adequate);
    assert_eq!(omega.recommended_range, "500~2000mg");
    assert_eq!(omega.source_supplements, vec!["오메가3 1000mg"]);
    assert!(!report.has_warning);
}

#[test]
fn test_two_vitamin_c_routines_aggregate_to_boundary() {
    common::init_test_logging();

    // Two routines both matching "비타민c" at 500 per dose, one dose each:
    // aggregated 1000 == max -> adequate at the boundary, but duplicated.
    let routines = vec![
        routine_with_dose("r-1", "비타민c 골드", "1일 1회", "1정"),
        routine_with_dose("r-2", "비타민c 구미", "1일 1회", "1정"),
    ];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    assert_eq!(report.ingredients.len(), 1);
    let vit_c = &report.ingredients[0];
    assert!((vit_c.current_amount - 1000.0).abs() < f64::EPSILON);
    assert_eq!(vit_c.status, IngredientStatus::Adequate);
    assert_eq!(vit_c.source_supplements.len(), 2);

    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(report.duplicates[0].id, "duplicate-VIT_C");
    assert!(report.has_warning);
}

#[test]
fn test_lowered_max_flips_boundary_to_excessive() {
    common::init_test_logging();

    let routines = vec![
        routine_with_dose("r-1", "비타민c 골드", "1일 1회", "1정"),
        routine_with_dose("r-2", "비타민c 구미", "1일 1회", "1정"),
    ];
    // Same intake against max=900 instead of 1000
    let masters = vec![master(2, "VIT_C", "비타민C", "mg", Some(100.0), Some(900.0))];
    let report =
        SupplementAnalyzer::analyze(&routines, &masters, &[], &AnalysisConfig::default());

    assert_eq!(report.ingredients[0].status, IngredientStatus::Excessive);
    assert!(report.has_warning);
}

#[test]
fn test_unmatched_name_falls_back_to_vitamin_d_minimum() {
    common::init_test_logging();

    // Name matching zero keywords; VIT_D master min=400 -> single fallback
    // result at 400, adequate (400 >= 400).
    let routines = vec![SupplementRoutine::new("r-1", "해당없음 알약", "1일 1회")];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    assert_eq!(report.ingredients.len(), 1);
    let fallback = &report.ingredients[0];
    assert_eq!(fallback.id, "ingredient-VIT_D");
    assert!((fallback.current_amount - 400.0).abs() < f64::EPSILON);
    assert_eq!(fallback.status, IngredientStatus::Adequate);
    assert!(!report.has_warning);
}

#[test]
fn test_empty_routine_list_is_valid_empty_report() {
    common::init_test_logging();

    let report = SupplementAnalyzer::analyze(
        &[],
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "ingredients": [],
            "duplicates": [],
            "recommendations": [],
            "supplements": [],
            "has_warning": false
        })
    );
}

// ============================================================================
// DETECTION PROPERTIES - fallback and dedup through the public API
// ============================================================================

#[test]
fn test_every_routine_contributes_at_least_one_row() {
    common::init_test_logging();

    let routines = vec![
        SupplementRoutine::new("r-1", "정체불명 영양제", "1일 1회"),
        routine_with_dose("r-2", "오메가3", "1일 1회", "1정"),
    ];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    // Fallback VIT_D row for the unmatched routine plus OMEGA3
    assert_eq!(report.ingredients.len(), 2);
    assert_eq!(report.supplements.len(), 2);
}

#[test]
fn test_multivitamin_name_shares_codes_with_single_rules() {
    common::init_test_logging();

    // "종합비타민c" hits the multivitamin rule first; the 비타민c rule must
    // not add a second VIT_C row.
    let routines = vec![routine_with_dose("r-1", "종합비타민c", "1일 1회", "1정")];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    let vit_c_rows = report
        .ingredients
        .iter()
        .filter(|i| i.id == "ingredient-VIT_C")
        .count();
    assert_eq!(vit_c_rows, 1);

    // Multivitamin codes without a master record are silently dropped
    assert!(report
        .ingredients
        .iter()
        .all(|i| !i.id.contains("VIT_A") && !i.id.contains("VIT_B")));
}

#[test]
fn test_dose_count_multiplies_intake() {
    common::init_test_logging();

    let routines = vec![routine_with_dose("r-1", "오메가3", "1일 2회", "2정")];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    // 1000 per dose x 2 doses = 2000 == max -> adequate at the boundary
    let omega = &report.ingredients[0];
    assert!((omega.current_amount - 2000.0).abs() < f64::EPSILON);
    assert_eq!(omega.status, IngredientStatus::Adequate);
}

// ============================================================================
// CLASSIFICATION - bounds cases surfaced in the report
// ============================================================================

#[test]
fn test_no_reference_bounds_always_adequate() {
    common::init_test_logging();

    let routines = vec![routine_with_dose("r-1", "루테인 플러스", "1일 1회", "1정")];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    let lutein = &report.ingredients[0];
    assert_eq!(lutein.status, IngredientStatus::Adequate);
    assert_eq!(lutein.recommended_range, "권장 섭취 기준 정보 없음");
    assert!(lutein.min_amount.is_none());
    assert!(lutein.max_amount.is_none());
}

#[test]
fn test_min_only_reference_range_text() {
    common::init_test_logging();

    let routines = vec![routine_with_dose("r-1", "마그네슘 파워", "1일 1회", "1정")];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    assert_eq!(report.ingredients[0].recommended_range, "50mg 이상");
    assert_eq!(report.ingredients[0].status, IngredientStatus::Adequate);
}

#[test]
fn test_max_only_reference_range_text() {
    common::init_test_logging();

    let routines = vec![routine_with_dose("r-1", "아연 샷", "1일 1회", "1정")];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    // ZINC default 10 per dose against max 40
    assert_eq!(report.ingredients[0].recommended_range, "40mg 미만");
    assert_eq!(report.ingredients[0].status, IngredientStatus::Adequate);
}

// ============================================================================
// RECOMMENDATIONS - synergy suggestions over the full pipeline
// ============================================================================

#[test]
fn test_positive_synergy_recommended_for_current_set() {
    common::init_test_logging();

    let routines = vec![routine_with_dose("r-1", "비타민d 1000", "1일 1회", "1정")];
    let interactions = vec![
        interaction(3, 4, "비타민D", "칼슘", InteractionType::Positive, "흡수를 돕습니다"),
        interaction(3, 5, "비타민D", "철분", InteractionType::Positive, "흡수를 높입니다"),
        // 철분 is a negative target elsewhere in the table -> suppressed
        interaction(4, 5, "칼슘", "철분", InteractionType::Negative, "흡수를 방해합니다"),
    ];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &interactions,
        &AnalysisConfig::default(),
    );

    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(report.recommendations[0].ingredient_name, "칼슘");
    assert_eq!(report.recommendations[0].interactions, vec!["흡수를 돕습니다"]);
}

#[test]
fn test_recommendations_capped_at_five() {
    common::init_test_logging();

    let routines = vec![routine_with_dose("r-1", "비타민d 1000", "1일 1회", "1정")];
    let candidates = ["칼슘", "마그네슘", "아연", "셀레늄", "크롬", "망간", "구리"];
    let interactions: Vec<_> = candidates
        .iter()
        .enumerate()
        .map(|(i, name)| {
            interaction(
                3,
                (i + 100) as i64,
                "비타민D",
                name,
                InteractionType::Positive,
                "시너지가 있습니다",
            )
        })
        .collect();
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &interactions,
        &AnalysisConfig::default(),
    );

    assert!(report.recommendations.len() <= 5);
    assert_eq!(report.recommendations.len(), 5);
}

#[test]
fn test_already_taken_ingredients_not_recommended() {
    common::init_test_logging();

    let routines = vec![
        routine_with_dose("r-1", "비타민d 1000", "1일 1회", "1정"),
        routine_with_dose("r-2", "칼슘 추어블", "1일 1회", "1정"),
    ];
    let interactions = vec![interaction(
        3,
        4,
        "비타민D",
        "칼슘",
        InteractionType::Positive,
        "흡수를 돕습니다",
    )];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &interactions,
        &AnalysisConfig::default(),
    );

    assert!(report.recommendations.is_empty());
}

// ============================================================================
// ENVELOPE PROPERTIES - idempotence and warning flag
// ============================================================================

#[test]
fn test_pipeline_is_idempotent() {
    common::init_test_logging();

    let routines = vec![
        routine_with_dose("r-1", "종합비타민", "1일 1회", "1정"),
        routine_with_dose("r-2", "오메가3 1000mg", "1일 2회", "2정"),
        SupplementRoutine::new("r-3", "이름없는 제품", "1일 1회"),
    ];
    let masters = default_masters();
    let interactions = vec![interaction(
        3,
        4,
        "비타민D",
        "칼슘",
        InteractionType::Positive,
        "흡수를 돕습니다",
    )];
    let config = AnalysisConfig::default();

    let first = SupplementAnalyzer::analyze(&routines, &masters, &interactions, &config);
    let second = SupplementAnalyzer::analyze(&routines, &masters, &interactions, &config);

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_duplicates_iff_two_or_more_sources() {
    common::init_test_logging();

    let routines = vec![
        routine_with_dose("r-1", "오메가3", "1일 1회", "1정"),
        routine_with_dose("r-2", "비타민c", "1일 1회", "1정"),
    ];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    for ingredient in &report.ingredients {
        let duplicated = report
            .duplicates
            .iter()
            .any(|d| d.ingredient_name == ingredient.ingredient_name);
        assert_eq!(duplicated, ingredient.source_supplements.len() >= 2);
    }
    assert!(report.duplicates.is_empty());
    assert!(!report.has_warning);
}

#[test]
fn test_warning_from_duplicates_without_excessive() {
    common::init_test_logging();

    // Two small vitamin C products: total 1000 <= max, so no excessive
    // status, but the duplicate alone must set the warning.
    let routines = vec![
        routine_with_dose("r-1", "비타민c 골드", "1일 1회", "1정"),
        routine_with_dose("r-2", "비타민c 구미", "1일 1회", "1정"),
    ];
    let report = SupplementAnalyzer::analyze(
        &routines,
        &default_masters(),
        &[],
        &AnalysisConfig::default(),
    );

    assert!(report
        .ingredients
        .iter()
        .all(|i| i.status != IngredientStatus::Excessive));
    assert!(!report.duplicates.is_empty());
    assert!(report.has_warning);
}

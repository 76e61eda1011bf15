// ABOUTME: Analysis pipeline for supplement routines
// ABOUTME: Ingredient detection, intake aggregation, classification, and recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

//! # Intelligence Module
//!
//! The three-stage supplement analysis pipeline. Each stage depends only on
//! the previous stage's output:
//!
//! 1. **Detector** - maps free-text product names to canonical ingredient
//!    codes and per-dose amounts via keyword matching
//! 2. **Aggregator/Classifier** - sums detected amounts per ingredient
//!    across routines, classifies against reference bounds, flags
//!    duplicate-sourced ingredients
//! 3. **Recommender** - cross-references the current ingredient set against
//!    the interaction table to suggest synergistic additions
//!
//! [`SupplementAnalyzer`] runs all three and assembles the report.

/// Stage 2: intake aggregation, classification, and duplicate detection
pub mod aggregator;

/// Pipeline orchestration and report assembly
pub mod analyzer;

/// Stage 1: keyword-based ingredient detection
pub mod detector;

/// Stage 3: synergy-based ingredient recommendation
pub mod recommender;

pub use aggregator::{
    aggregate, classify, dose_count, reference_range_text, round_half_up, RoutineContribution,
    NO_REFERENCE_TEXT,
};
pub use analyzer::SupplementAnalyzer;
pub use detector::{DetectedIngredient, IngredientDetector};
pub use recommender::recommend;

// ABOUTME: Configuration module for the supplement analysis engine
// ABOUTME: Keyword table, fallback, classifier, and recommender settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

//! # Configuration
//!
//! Validated configuration for the analysis pipeline. Defaults reproduce
//! the production keyword table and thresholds; hosts may deserialize
//! overrides and must call [`AnalysisConfig::validate`] before use.

/// Analysis pipeline configuration
pub mod analysis;

pub use analysis::{
    AnalysisConfig, DetectorConfig, IngredientDose, KeywordRule, RecommenderConfig,
};

// ABOUTME: Analysis configuration for ingredient detection and recommendation
// ABOUTME: Ordered keyword table, fallback ingredient, and recommender limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

//! Analysis Pipeline Configuration
//!
//! Provides configuration for the three pipeline stages. The keyword table
//! is an *ordered* list: iteration order determines first-match-wins
//! semantics in the detector, so rules must stay a `Vec`, never a map.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One ingredient contribution of a keyword rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientDose {
    /// Stable ingredient code (must exist in the ingredient master list)
    pub code: String,
    /// Default per-dose amount, in the ingredient's master unit
    pub amount: f64,
}

impl IngredientDose {
    fn new(code: &str, amount: f64) -> Self {
        Self {
            code: code.to_owned(),
            amount,
        }
    }
}

/// One keyword rule: a lower-case substring pattern and the ingredients a
/// match contributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Lower-case substring tested against the lower-cased routine name
    pub pattern: String,
    /// Ingredients contributed when the pattern matches; multi-entry rules
    /// model multivitamin products
    pub ingredients: Vec<IngredientDose>,
}

impl KeywordRule {
    fn new(pattern: &str, ingredients: Vec<IngredientDose>) -> Self {
        Self {
            pattern: pattern.to_owned(),
            ingredients,
        }
    }
}

/// Ingredient detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Ordered keyword table; earlier rules win for a shared code
    pub keyword_rules: Vec<KeywordRule>,
    /// Ingredient code emitted when no keyword matches
    pub fallback_code: String,
    /// Per-dose amount for the fallback when its master record has no
    /// minimum amount
    pub fallback_amount: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        // Multivitamin products contribute reduced per-ingredient amounts
        let multivitamin = vec![
            IngredientDose::new("VIT_A", 350.0),
            IngredientDose::new("VIT_B", 25.0),
            IngredientDose::new("VIT_C", 250.0),
            IngredientDose::new("VIT_D", 500.0),
            IngredientDose::new("VIT_E", 50.0),
            IngredientDose::new("ZINC", 5.0),
        ];

        Self {
            keyword_rules: vec![
                KeywordRule::new("종합", multivitamin.clone()),
                KeywordRule::new("멀티", multivitamin),
                KeywordRule::new("비타민a", vec![IngredientDose::new("VIT_A", 700.0)]),
                KeywordRule::new("비타민b", vec![IngredientDose::new("VIT_B", 50.0)]),
                KeywordRule::new("비타민c", vec![IngredientDose::new("VIT_C", 500.0)]),
                KeywordRule::new("비타민d", vec![IngredientDose::new("VIT_D", 1000.0)]),
                KeywordRule::new("비타민e", vec![IngredientDose::new("VIT_E", 100.0)]),
                KeywordRule::new("오메가", vec![IngredientDose::new("OMEGA3", 1000.0)]),
                KeywordRule::new("루테인", vec![IngredientDose::new("LUTEIN", 20.0)]),
                KeywordRule::new("칼슘", vec![IngredientDose::new("CALCIUM", 300.0)]),
                KeywordRule::new("마그네슘", vec![IngredientDose::new("MAGNESIUM", 100.0)]),
                KeywordRule::new("아연", vec![IngredientDose::new("ZINC", 10.0)]),
                KeywordRule::new("철분", vec![IngredientDose::new("IRON", 14.0)]),
                KeywordRule::new("엽산", vec![IngredientDose::new("FOLATE", 400.0)]),
                KeywordRule::new("유산균", vec![IngredientDose::new("PROBIOTICS", 100.0)]),
                KeywordRule::new("프로바이오", vec![IngredientDose::new("PROBIOTICS", 100.0)]),
                KeywordRule::new("밀크씨슬", vec![IngredientDose::new("MILK_THISTLE", 130.0)]),
                KeywordRule::new("코큐텐", vec![IngredientDose::new("COQ10", 100.0)]),
                KeywordRule::new("코엔자임", vec![IngredientDose::new("COQ10", 100.0)]),
                KeywordRule::new("콜라겐", vec![IngredientDose::new("COLLAGEN", 1000.0)]),
            ],
            fallback_code: "VIT_D".to_owned(),
            fallback_amount: 500.0,
        }
    }
}

impl DetectorConfig {
    /// Validate the keyword table and fallback settings
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if any pattern is empty or not lower-case,
    /// any rule has no ingredients, any amount is non-positive, or the
    /// fallback settings are unusable.
    pub fn validate(&self) -> AppResult<()> {
        for rule in &self.keyword_rules {
            if rule.pattern.is_empty() {
                return Err(AppError::config_invalid("keyword pattern must be non-empty"));
            }
            if rule.pattern != rule.pattern.to_lowercase() {
                return Err(AppError::config_invalid(format!(
                    "keyword pattern '{}' must be lower-case",
                    rule.pattern
                )));
            }
            if rule.ingredients.is_empty() {
                return Err(AppError::config_invalid(format!(
                    "keyword rule '{}' must contribute at least one ingredient",
                    rule.pattern
                )));
            }
            for dose in &rule.ingredients {
                if dose.amount <= 0.0 {
                    return Err(AppError::value_out_of_range(format!(
                        "default amount for '{}' must be positive, got {}",
                        dose.code, dose.amount
                    )));
                }
            }
        }

        if self.fallback_code.is_empty() {
            return Err(AppError::config_invalid("fallback code must be non-empty"));
        }
        if self.fallback_amount <= 0.0 {
            return Err(AppError::value_out_of_range(format!(
                "fallback amount must be positive, got {}",
                self.fallback_amount
            )));
        }

        Ok(())
    }
}

/// Recommender configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Maximum number of distinct suggested ingredients
    pub max_recommendations: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_recommendations: 5,
        }
    }
}

impl RecommenderConfig {
    /// Validate recommender settings
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if the recommendation cap is zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.max_recommendations == 0 {
            return Err(AppError::value_out_of_range(
                "max_recommendations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Complete analysis pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Ingredient detector settings
    pub detector: DetectorConfig,
    /// Recommender settings
    pub recommender: RecommenderConfig,
}

impl AnalysisConfig {
    /// Validate all sections
    ///
    /// # Errors
    ///
    /// Returns the first validation failure from any section.
    pub fn validate(&self) -> AppResult<()> {
        self.detector.validate()?;
        self.recommender.validate()?;
        Ok(())
    }
}

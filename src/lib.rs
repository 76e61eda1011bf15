// ABOUTME: Main library entry point for the supplement ingredient analysis engine
// ABOUTME: Maps supplement routines to intake rollups, classifications, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

#![deny(unsafe_code)]

//! # Supplement Intelligence
//!
//! Ingredient-level analysis for a user's supplement routines. Given the
//! routines a user has registered, the canonical ingredient reference list,
//! and the pairwise ingredient interaction table, the engine produces a
//! per-ingredient intake rollup with deficiency/excess classification,
//! duplicate-source warnings, and up to five synergy-based ingredient
//! recommendations.
//!
//! The pipeline is a pure, synchronous, side-effect-free function of its
//! inputs: it reads reference and routine data and returns a computed
//! report. It never writes, never throws on well-formed input, and running
//! it twice on identical inputs yields identical output.
//!
//! ## Architecture
//!
//! - **Models**: typed records for routines, ingredient reference data, and
//!   analysis results, validated once at the boundary
//! - **Intelligence**: the three pipeline stages - ingredient detection,
//!   aggregation/classification, and recommendation
//! - **Config**: keyword table, fallback, and recommender settings with
//!   validated defaults
//! - **Errors**: unified error handling with standard error codes
//!
//! ## Example Usage
//!
//! ```rust
//! use supplement_intelligence::config::AnalysisConfig;
//! use supplement_intelligence::intelligence::SupplementAnalyzer;
//! use supplement_intelligence::models::{IngredientMaster, SupplementRoutine};
//!
//! let routines = vec![SupplementRoutine::new("r-1", "오메가3 1000mg", "1일 1회")];
//! let masters = vec![IngredientMaster {
//!     id: 1,
//!     code: "OMEGA3".to_owned(),
//!     name: "오메가3".to_owned(),
//!     unit: "mg".to_owned(),
//!     min_amount: Some(500.0),
//!     max_amount: Some(2000.0),
//! }];
//!
//! let config = AnalysisConfig::default();
//! let report = SupplementAnalyzer::analyze(&routines, &masters, &[], &config);
//! assert_eq!(report.ingredients.len(), 1);
//! ```

/// Analysis configuration with validated defaults
pub mod config;

/// Unified error handling system with standard error codes
pub mod errors;

/// Ingredient detection, aggregation, classification, and recommendation
pub mod intelligence;

/// Logging configuration and structured logging setup
pub mod logging;

/// Typed records for routines, reference data, and analysis results
pub mod models;

pub use config::AnalysisConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use intelligence::SupplementAnalyzer;
pub use models::SupplementAnalysisReport;

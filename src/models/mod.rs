// ABOUTME: Typed records for routines, ingredient reference data, and analysis results
// ABOUTME: Boundary types validated once so the pipeline can assume well-typed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

//! # Data Models
//!
//! Explicit typed records for everything the pipeline consumes and
//! produces. Callers deserialize their loosely-typed rows into these
//! structs once at the boundary; the analysis stages then operate on
//! well-typed, non-null-checked values.

/// Analysis result and report types
pub mod analysis;

/// Canonical ingredient reference records and pairwise interactions
pub mod ingredient;

/// User supplement routine records
pub mod routine;

pub use analysis::{
    IngredientAnalysisResult, IngredientRecommendation, IngredientStatus,
    SupplementAnalysisReport, SupplementSummary,
};
pub use ingredient::{IngredientInteraction, IngredientMaster, InteractionType, MasterIndex};
pub use routine::{ScheduledDose, SupplementRoutine};

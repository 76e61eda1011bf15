// ABOUTME: User supplement routine records consumed by the analysis pipeline
// ABOUTME: SupplementRoutine and ScheduledDose boundary types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Haru Wellness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scheduled dose slot within a routine's daily schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledDose {
    /// Time-of-day label (e.g. "아침"), if the user set one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Free-text dose description for this slot (e.g. "1정", "10ml")
    pub dosage: String,
}

impl ScheduledDose {
    /// Create a dose slot from a dosage string
    #[must_use]
    pub fn new(dosage: impl Into<String>) -> Self {
        Self {
            time: None,
            dosage: dosage.into(),
        }
    }
}

/// A user's recurring supplement product entry
///
/// Created on registration, mutated on edit, soft-disabled via
/// [`is_active`](Self::is_active). The analysis pipeline reads but never
/// writes these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementRoutine {
    /// Row identifier, owned by the caller's storage layer
    pub id: String,
    /// Product display name as entered by the user (free text)
    pub name: String,
    /// Brand name, if the user entered one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Overall dosage description (e.g. "1일 2회")
    pub dosage: String,
    /// Per-slot dose schedule; the first slot drives the dose-count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_doses: Option<Vec<ScheduledDose>>,
    /// Soft-disable flag; inactive routines contribute nothing
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Registration timestamp, if the caller's rows carry one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

const fn default_active() -> bool {
    true
}

impl SupplementRoutine {
    /// Create an active routine with no schedule or brand
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, dosage: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: None,
            dosage: dosage.into(),
            scheduled_doses: None,
            is_active: true,
            created_at: None,
        }
    }

    /// Attach a dose schedule
    #[must_use]
    pub fn with_scheduled_doses(mut self, doses: Vec<ScheduledDose>) -> Self {
        self.scheduled_doses = Some(doses);
        self
    }
}

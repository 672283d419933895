// ABOUTME: Category score and composite HealthOverview snapshot types
// ABOUTME: Six 0-100 category values plus the rounded-mean overall score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! The engine's single output entity
//!
//! A [`HealthOverview`] is created the first time a user has any data,
//! replaced wholesale on every recompute, and never partially mutated.
//! The invariant `overall == round(mean(six category values))` holds after
//! every recompute and after every manual override.

use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six scored health domains
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthCategory {
    /// Menstrual cycle regularity
    Cycle,
    /// Meals and hydration
    Nutrition,
    /// Workout frequency, duration, and intensity
    Exercise,
    /// Fertility observation tracking
    Fertility,
    /// Sleep and stress
    Lifestyle,
    /// Symptoms and mood
    Symptoms,
}

impl HealthCategory {
    /// All six categories in overview field order
    pub const ALL: [Self; 6] = [
        Self::Cycle,
        Self::Nutrition,
        Self::Exercise,
        Self::Fertility,
        Self::Lifestyle,
        Self::Symptoms,
    ];

    /// Canonical lowercase name, matching the app's score-type strings
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cycle => "cycle",
            Self::Nutrition => "nutrition",
            Self::Exercise => "exercise",
            Self::Fertility => "fertility",
            Self::Lifestyle => "lifestyle",
            Self::Symptoms => "symptoms",
        }
    }
}

impl fmt::Display for HealthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cycle" => Ok(Self::Cycle),
            "nutrition" => Ok(Self::Nutrition),
            "exercise" => Ok(Self::Exercise),
            "fertility" => Ok(Self::Fertility),
            "lifestyle" => Ok(Self::Lifestyle),
            "symptoms" => Ok(Self::Symptoms),
            other => Err(AppError::invalid_input(format!(
                "unknown health category: '{other}'"
            ))),
        }
    }
}

/// A single normalized category score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryScore {
    /// Scored category
    pub category: HealthCategory,
    /// Score value in [0, 100]
    pub value: u8,
}

/// Composite health snapshot for one user
///
/// One instance per user; replaced, not versioned, on each recompute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthOverview {
    /// Composite score: rounded mean of the six category values
    pub overall: u8,
    /// Cycle regularity score
    pub cycle: u8,
    /// Nutrition score
    pub nutrition: u8,
    /// Exercise score
    pub exercise: u8,
    /// Fertility tracking score
    pub fertility: u8,
    /// Lifestyle score
    pub lifestyle: u8,
    /// Symptoms/mood score
    pub symptoms: u8,
    /// Date the snapshot was computed, drives the staleness policy
    pub last_computed: NaiveDate,
}

impl HealthOverview {
    /// Assemble an overview from six category values, deriving `overall`
    #[must_use]
    pub fn from_categories(
        cycle: u8,
        nutrition: u8,
        exercise: u8,
        fertility: u8,
        lifestyle: u8,
        symptoms: u8,
        last_computed: NaiveDate,
    ) -> Self {
        let mut overview = Self {
            overall: 0,
            cycle,
            nutrition,
            exercise,
            fertility,
            lifestyle,
            symptoms,
            last_computed,
        };
        overview.recompute_overall();
        overview
    }

    /// Score value for one category
    #[must_use]
    pub const fn category_score(&self, category: HealthCategory) -> u8 {
        match category {
            HealthCategory::Cycle => self.cycle,
            HealthCategory::Nutrition => self.nutrition,
            HealthCategory::Exercise => self.exercise,
            HealthCategory::Fertility => self.fertility,
            HealthCategory::Lifestyle => self.lifestyle,
            HealthCategory::Symptoms => self.symptoms,
        }
    }

    /// Replace one category value without touching `overall`
    ///
    /// Callers on the override path must follow with
    /// [`Self::recompute_overall`] so the rounded-mean invariant holds.
    pub fn set_category(&mut self, category: HealthCategory, value: u8) {
        match category {
            HealthCategory::Cycle => self.cycle = value,
            HealthCategory::Nutrition => self.nutrition = value,
            HealthCategory::Exercise => self.exercise = value,
            HealthCategory::Fertility => self.fertility = value,
            HealthCategory::Lifestyle => self.lifestyle = value,
            HealthCategory::Symptoms => self.symptoms = value,
        }
    }

    /// Re-derive `overall` as the rounded mean of the six category values
    pub fn recompute_overall(&mut self) {
        let sum = u32::from(self.cycle)
            + u32::from(self.nutrition)
            + u32::from(self.exercise)
            + u32::from(self.fertility)
            + u32::from(self.lifestyle)
            + u32::from(self.symptoms);
        self.overall = (f64::from(sum) / 6.0).round() as u8;
    }

    /// All six category scores in canonical order
    #[must_use]
    pub fn category_scores(&self) -> [CategoryScore; 6] {
        HealthCategory::ALL.map(|category| CategoryScore {
            category,
            value: self.category_score(category),
        })
    }
}

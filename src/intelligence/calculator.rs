// ABOUTME: Composite aggregator running all six category scorers
// ABOUTME: Pure computation of a HealthOverview from a record bundle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Composite Aggregator
//!
//! Runs the six category scorers on one [`HealthRecordBundle`] and
//! assembles the [`HealthOverview`] snapshot with
//! `overall = round(mean(six category values))`. Pure and deterministic:
//! no I/O and no clock access — the caller supplies the reference date,
//! so identical inputs and date always produce identical output.

use crate::config::ScoringConfig;
use crate::intelligence::{
    CycleScorer, ExerciseScorer, FertilityScorer, LifestyleScorer, NutritionScorer, SymptomsScorer,
};
use crate::models::{HealthOverview, HealthRecordBundle};
use chrono::NaiveDate;

/// Pure composite health score calculator
pub struct HealthScoreCalculator;

impl HealthScoreCalculator {
    /// Compute a full overview snapshot from domain records
    #[must_use]
    pub fn calculate(
        bundle: &HealthRecordBundle,
        config: &ScoringConfig,
        today: NaiveDate,
    ) -> HealthOverview {
        let exercise = ExerciseScorer::score(&bundle.exercises, &config.exercise);
        let nutrition =
            NutritionScorer::score(&bundle.meals, &bundle.water_intake, &config.nutrition);
        let symptoms = SymptomsScorer::score(&bundle.symptoms, &bundle.moods, &config.symptoms);
        let lifestyle = LifestyleScorer::score(&bundle.lifestyle, &config.lifestyle);
        let fertility = FertilityScorer::score(&bundle.fertility, &config.fertility);
        let cycle = CycleScorer::score(&bundle.cycles, &config.cycle);

        HealthOverview::from_categories(
            cycle, nutrition, exercise, fertility, lifestyle, symptoms, today,
        )
    }
}

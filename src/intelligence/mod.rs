// ABOUTME: Health intelligence: six category scorers, composite aggregator, overview engine
// ABOUTME: Deterministic tier-based scoring of longitudinal health records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Health Score Intelligence
//!
//! Six pure category scorers share no state and differ only in their
//! tier tables (see [`crate::config::scoring`]). Five of them follow the
//! base-plus-bonuses-then-clamp shape; the symptoms scorer is
//! deduction-based with a mood reset. That asymmetry is observable in
//! the scores and is preserved deliberately.

/// Composite aggregator over all six scorers
pub mod calculator;
/// Cycle regularity scorer
pub mod cycle;
/// Staleness policy and recompute orchestration
pub mod engine;
/// Exercise scorer
pub mod exercise;
/// Fertility tracking scorer
pub mod fertility;
/// Lifestyle (sleep/stress) scorer
pub mod lifestyle;
/// Nutrition (meals/hydration) scorer
pub mod nutrition;
/// Symptoms/mood scorer
pub mod symptoms;

pub use calculator::HealthScoreCalculator;
pub use cycle::CycleScorer;
pub use engine::OverviewEngine;
pub use exercise::ExerciseScorer;
pub use fertility::FertilityScorer;
pub use lifestyle::LifestyleScorer;
pub use nutrition::NutritionScorer;
pub use symptoms::SymptomsScorer;

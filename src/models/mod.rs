// ABOUTME: Data model for the health score engine
// ABOUTME: Domain record types, category scores, and the HealthOverview snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Common data structures shared by the scorers, the engine, and the stores

/// Category scores and the composite overview snapshot
pub mod overview;
/// Timestamped records from the six life-tracking domains
pub mod records;

pub use overview::{CategoryScore, HealthCategory, HealthOverview};
pub use records::{
    CycleRecord, ExerciseSession, FertilityObservation, HealthRecordBundle, LifestyleEntry,
    MealEntry, MoodEntry, SymptomEntry, WaterIntakeEntry,
};

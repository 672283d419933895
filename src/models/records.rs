// ABOUTME: Domain record types consumed by the category scorers
// ABOUTME: ExerciseSession, MealEntry, WaterIntakeEntry, SymptomEntry, MoodEntry, and friends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Timestamped observations from the six life-tracking domains
//!
//! Records are immutable and append-only from the engine's perspective: the
//! write path (outside this crate) validates ranges at ingestion, so scorers
//! never re-validate. Collections handed to scorers are ordered
//! most-recent-first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSession {
    /// Date of the session
    pub date: NaiveDate,
    /// Session duration in minutes
    pub duration_minutes: u32,
    /// Perceived intensity (1-10), validated at ingestion
    pub intensity: u8,
}

/// A single logged meal
///
/// Only the date participates in scoring; meal composition is tracked by the
/// nutrition UI but is irrelevant to the regularity heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    /// Date of the meal
    pub date: NaiveDate,
}

/// A single water intake record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterIntakeEntry {
    /// Date of the intake
    pub date: NaiveDate,
    /// Amount in milliliters
    pub amount_ml: u32,
}

/// A single logged symptom
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomEntry {
    /// Date observed
    pub date: NaiveDate,
    /// Severity (1-10), validated at ingestion
    pub severity: u8,
}

/// A single logged mood observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Date observed
    pub date: NaiveDate,
    /// Mood intensity (1-10), higher is better
    pub intensity: u8,
}

/// A daily lifestyle record (sleep and stress)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleEntry {
    /// Date of the record
    pub date: NaiveDate,
    /// Hours slept, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// Subjective sleep quality (1-10), if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<u8>,
    /// Subjective stress level (1-10), if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
}

/// A daily fertility observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilityObservation {
    /// Date of the observation
    pub date: NaiveDate,
    /// Basal body temperature in Celsius, if measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbt_celsius: Option<f64>,
    /// Cervical mucus observation, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cervical_mucus: Option<String>,
    /// Ovulation test result, if taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ovulation_test: Option<String>,
}

/// A recorded menstrual cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleRecord {
    /// First day of the cycle
    pub start_date: NaiveDate,
    /// Completed cycle length in days, absent while the cycle is ongoing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_length_days: Option<u16>,
}

/// All domain record collections needed for one full recompute
///
/// Each collection is most-recent-first and already restricted to its
/// domain's trailing read window. [`crate::intelligence::HealthScoreCalculator`]
/// is a pure function of this bundle plus a reference date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthRecordBundle {
    /// Exercise sessions (trailing 14 days)
    pub exercises: Vec<ExerciseSession>,
    /// Meals (trailing 21 days)
    pub meals: Vec<MealEntry>,
    /// Water intake (trailing 14 days)
    pub water_intake: Vec<WaterIntakeEntry>,
    /// Symptoms (most recent, count-truncated to 30 by the scorer)
    pub symptoms: Vec<SymptomEntry>,
    /// Moods (most recent, count-truncated to 20 by the scorer)
    pub moods: Vec<MoodEntry>,
    /// Lifestyle records (trailing 14 days)
    pub lifestyle: Vec<LifestyleEntry>,
    /// Fertility observations (trailing 30 days)
    pub fertility: Vec<FertilityObservation>,
    /// Cycle records (most recent, count-truncated to 3 by the scorer)
    pub cycles: Vec<CycleRecord>,
}

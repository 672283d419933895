// ABOUTME: Domain record reader abstraction for the six health-tracking domains
// ABOUTME: Async trait returning date-windowed, most-recent-first record collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Domain Record Readers
//!
//! The engine consumes records through [`RecordProvider`] so the scoring
//! logic stays independent of where records live (remote table store in
//! production, memory in tests). Implementations must return collections
//! ordered most-recent-first and restricted to `[since, until]` inclusive.
//!
//! Reads are side-effect-free and independent of one another, so the
//! engine issues all eight concurrently. A read failure is fatal to the
//! operation that requested it: the engine never substitutes an empty
//! collection for a failed domain.

use crate::errors::AppResult;
use crate::models::{
    CycleRecord, ExerciseSession, FertilityObservation, LifestyleEntry, MealEntry, MoodEntry,
    SymptomEntry, WaterIntakeEntry,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// In-memory record backend for tests and embedded use
pub mod memory;

pub use memory::InMemoryRecordProvider;

/// Read access to a user's domain records
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// Exercise sessions with `since <= date <= until`, newest first
    async fn exercise_sessions(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<ExerciseSession>>;

    /// Meals with `since <= date <= until`, newest first
    async fn meals(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<MealEntry>>;

    /// Water intake records with `since <= date <= until`, newest first
    async fn water_intake(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<WaterIntakeEntry>>;

    /// Symptom entries with `since <= date <= until`, newest first
    async fn symptoms(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<SymptomEntry>>;

    /// Mood entries with `since <= date <= until`, newest first
    async fn moods(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<MoodEntry>>;

    /// Lifestyle entries with `since <= date <= until`, newest first
    async fn lifestyle_entries(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<LifestyleEntry>>;

    /// Fertility observations with `since <= date <= until`, newest first
    async fn fertility_observations(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<FertilityObservation>>;

    /// Cycle records with `since <= start_date <= until`, newest first
    async fn cycles(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<CycleRecord>>;
}

// ABOUTME: In-memory RecordProvider backend over per-user record bundles
// ABOUTME: Date-window filtering and newest-first ordering for tests and embedded use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

use crate::errors::AppResult;
use crate::models::{
    CycleRecord, ExerciseSession, FertilityObservation, HealthRecordBundle, LifestyleEntry,
    MealEntry, MoodEntry, SymptomEntry, WaterIntakeEntry,
};
use crate::providers::RecordProvider;
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory [`RecordProvider`] holding one [`HealthRecordBundle`] per user
///
/// Cheap to clone; clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordProvider {
    records: Arc<DashMap<Uuid, HealthRecordBundle>>,
}

impl InMemoryRecordProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all records for a user
    pub fn set_records(&self, user_id: Uuid, bundle: HealthRecordBundle) {
        self.records.insert(user_id, bundle);
    }

    /// Remove all records for a user
    pub fn clear_records(&self, user_id: Uuid) {
        self.records.remove(&user_id);
    }

    fn with_bundle<T>(&self, user_id: Uuid, f: impl FnOnce(&HealthRecordBundle) -> Vec<T>) -> Vec<T> {
        self.records
            .get(&user_id)
            .map_or_else(Vec::new, |bundle| f(bundle.value()))
    }
}

fn window_filtered<T: Clone>(
    records: &[T],
    date_of: impl Fn(&T) -> NaiveDate,
    since: NaiveDate,
    until: NaiveDate,
) -> Vec<T> {
    let mut selected: Vec<T> = records
        .iter()
        .filter(|r| {
            let d = date_of(r);
            d >= since && d <= until
        })
        .cloned()
        .collect();
    selected.sort_by_key(|r| std::cmp::Reverse(date_of(r)));
    selected
}

#[async_trait]
impl RecordProvider for InMemoryRecordProvider {
    async fn exercise_sessions(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<ExerciseSession>> {
        Ok(self.with_bundle(user_id, |b| {
            window_filtered(&b.exercises, |r| r.date, since, until)
        }))
    }

    async fn meals(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<MealEntry>> {
        Ok(self.with_bundle(user_id, |b| window_filtered(&b.meals, |r| r.date, since, until)))
    }

    async fn water_intake(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<WaterIntakeEntry>> {
        Ok(self.with_bundle(user_id, |b| {
            window_filtered(&b.water_intake, |r| r.date, since, until)
        }))
    }

    async fn symptoms(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<SymptomEntry>> {
        Ok(self.with_bundle(user_id, |b| {
            window_filtered(&b.symptoms, |r| r.date, since, until)
        }))
    }

    async fn moods(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<MoodEntry>> {
        Ok(self.with_bundle(user_id, |b| window_filtered(&b.moods, |r| r.date, since, until)))
    }

    async fn lifestyle_entries(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<LifestyleEntry>> {
        Ok(self.with_bundle(user_id, |b| {
            window_filtered(&b.lifestyle, |r| r.date, since, until)
        }))
    }

    async fn fertility_observations(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<FertilityObservation>> {
        Ok(self.with_bundle(user_id, |b| {
            window_filtered(&b.fertility, |r| r.date, since, until)
        }))
    }

    async fn cycles(
        &self,
        user_id: Uuid,
        since: NaiveDate,
        until: NaiveDate,
    ) -> AppResult<Vec<CycleRecord>> {
        Ok(self.with_bundle(user_id, |b| {
            window_filtered(&b.cycles, |r| r.start_date, since, until)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_window_filtering_and_ordering() {
        let provider = InMemoryRecordProvider::new();
        let user_id = Uuid::new_v4();
        provider.set_records(
            user_id,
            HealthRecordBundle {
                exercises: vec![
                    ExerciseSession {
                        date: date(2026, 8, 1),
                        duration_minutes: 30,
                        intensity: 5,
                    },
                    ExerciseSession {
                        date: date(2026, 8, 20),
                        duration_minutes: 45,
                        intensity: 7,
                    },
                    ExerciseSession {
                        date: date(2026, 8, 10),
                        duration_minutes: 20,
                        intensity: 4,
                    },
                ],
                ..HealthRecordBundle::default()
            },
        );

        let sessions = provider
            .exercise_sessions(user_id, date(2026, 8, 5), date(2026, 8, 25))
            .await
            .unwrap();

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].date, date(2026, 8, 20));
        assert_eq!(sessions[1].date, date(2026, 8, 10));
    }

    #[tokio::test]
    async fn test_unknown_user_reads_empty() {
        let provider = InMemoryRecordProvider::new();
        let meals = provider
            .meals(Uuid::new_v4(), date(2026, 8, 1), date(2026, 8, 25))
            .await
            .unwrap();
        assert!(meals.is_empty());
    }
}

// ABOUTME: Overview engine orchestrating staleness policy, record reads, and persistence
// ABOUTME: Absent/Stale snapshots trigger full recomputes; Fresh ones are returned as-is
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Overview Engine
//!
//! Orchestrates the recompute flow: staleness check against the stored
//! snapshot, concurrent reads of the eight domain record collections,
//! the purely synchronous scoring pass, and the single replacement
//! write. There is no partial or incremental recompute — all six scorers
//! run, or none do.
//!
//! The eight reads are order-independent and side-effect-free, so they
//! run under `tokio::try_join!`. The first failed read aborts the whole
//! recompute before scoring: a failed domain must never be scored as an
//! empty collection, which would persist a misleadingly neutral baseline.
//!
//! Racing recomputes for the same user are not locked; the later write
//! wins and the earlier result is discarded. Accepted inconsistency.
//!
//! All operations take an explicit `today` so trailing windows and the
//! staleness decision are reproducible in tests.

use crate::config::ScoringConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::HealthScoreCalculator;
use crate::models::{HealthCategory, HealthOverview, HealthRecordBundle};
use crate::providers::RecordProvider;
use crate::store::OverviewStore;
use chrono::{Duration, NaiveDate};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Health overview engine generic over record source and snapshot store
pub struct OverviewEngine<P, S> {
    provider: P,
    store: S,
    config: ScoringConfig,
}

impl<P: RecordProvider, S: OverviewStore> OverviewEngine<P, S> {
    /// Create an engine with the default scoring configuration
    pub fn new(provider: P, store: S) -> Self {
        Self::with_config(provider, store, ScoringConfig::default())
    }

    /// Create an engine with a custom scoring configuration
    pub fn with_config(provider: P, store: S, config: ScoringConfig) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    /// The active scoring configuration
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Return the user's overview, recomputing if absent or stale
    ///
    /// # Errors
    /// Fails if any domain read fails or the replacement write fails; the
    /// previously stored snapshot remains authoritative in both cases.
    pub async fn overview(&self, user_id: Uuid, today: NaiveDate) -> AppResult<HealthOverview> {
        match self.store.get_overview(user_id).await? {
            Some(stored) if self.is_fresh(&stored, today) => {
                debug!(%user_id, last_computed = %stored.last_computed, "overview is fresh, reusing");
                Ok(stored)
            }
            Some(stored) => {
                debug!(%user_id, last_computed = %stored.last_computed, "overview is stale, recomputing");
                self.recompute(user_id, today).await
            }
            None => {
                debug!(%user_id, "no stored overview, computing");
                self.recompute(user_id, today).await
            }
        }
    }

    /// Force a full recompute regardless of snapshot age
    ///
    /// # Errors
    /// Fails if any domain read fails or the replacement write fails.
    pub async fn refresh(&self, user_id: Uuid, today: NaiveDate) -> AppResult<HealthOverview> {
        self.recompute(user_id, today).await
    }

    /// Manually override one category score
    ///
    /// Re-derives `overall` from the five unchanged values plus the new
    /// one without re-running the scorers, then persists the snapshot.
    ///
    /// # Errors
    /// Fails with `ValueOutOfRange` if `value > 100`, `ResourceNotFound`
    /// if the user has no stored overview, or a storage error if the
    /// write fails.
    pub async fn set_category_score(
        &self,
        user_id: Uuid,
        category: HealthCategory,
        value: u8,
        today: NaiveDate,
    ) -> AppResult<HealthOverview> {
        if value > 100 {
            return Err(AppError::value_out_of_range(format!(
                "category score must be 0-100, got {value}"
            ))
            .with_user_id(user_id));
        }

        let mut overview = self
            .store
            .get_overview(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("health overview").with_user_id(user_id))?;

        overview.set_category(category, value);
        overview.recompute_overall();
        overview.last_computed = today;

        self.store.upsert_overview(user_id, &overview).await?;
        info!(%user_id, %category, value, overall = overview.overall, "category score overridden");
        Ok(overview)
    }

    fn is_fresh(&self, overview: &HealthOverview, today: NaiveDate) -> bool {
        let age_days = today
            .signed_duration_since(overview.last_computed)
            .num_days();
        age_days < self.config.staleness.max_age_days
    }

    async fn recompute(&self, user_id: Uuid, today: NaiveDate) -> AppResult<HealthOverview> {
        let bundle = self.fetch_records(user_id, today).await.map_err(|e| {
            warn!(%user_id, error = %e, "domain read failed, aborting recompute");
            e
        })?;

        let overview = HealthScoreCalculator::calculate(&bundle, &self.config, today);
        self.store.upsert_overview(user_id, &overview).await?;
        info!(%user_id, overall = overview.overall, "health overview recomputed");
        Ok(overview)
    }

    /// Fetch all eight domain collections concurrently
    async fn fetch_records(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<HealthRecordBundle> {
        let since = |days: u32| today - Duration::days(i64::from(days) - 1);

        let (exercises, meals, water_intake, symptoms, moods, lifestyle, fertility, cycles) =
            tokio::try_join!(
                self.provider
                    .exercise_sessions(user_id, since(self.config.exercise.window_days), today),
                self.provider
                    .meals(user_id, since(self.config.nutrition.meal_window_days), today),
                self.provider
                    .water_intake(user_id, since(self.config.nutrition.water_window_days), today),
                self.provider
                    .symptoms(user_id, since(self.config.symptoms.symptom_window_days), today),
                self.provider
                    .moods(user_id, since(self.config.symptoms.mood_window_days), today),
                self.provider
                    .lifestyle_entries(user_id, since(self.config.lifestyle.window_days), today),
                self.provider
                    .fertility_observations(user_id, since(self.config.fertility.window_days), today),
                self.provider
                    .cycles(user_id, since(self.config.cycle.window_days), today),
            )?;

        Ok(HealthRecordBundle {
            exercises,
            meals,
            water_intake,
            symptoms,
            moods,
            lifestyle,
            fertility,
            cycles,
        })
    }
}

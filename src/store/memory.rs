// ABOUTME: In-memory OverviewStore backend over a concurrent map
// ABOUTME: Used by tests and embedded deployments without a database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

use crate::errors::AppResult;
use crate::models::HealthOverview;
use crate::store::OverviewStore;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory [`OverviewStore`]; clones share the same underlying map
#[derive(Debug, Clone, Default)]
pub struct MemoryOverviewStore {
    overviews: Arc<DashMap<Uuid, HealthOverview>>,
}

impl MemoryOverviewStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OverviewStore for MemoryOverviewStore {
    async fn get_overview(&self, user_id: Uuid) -> AppResult<Option<HealthOverview>> {
        Ok(self.overviews.get(&user_id).map(|o| o.value().clone()))
    }

    async fn upsert_overview(&self, user_id: Uuid, overview: &HealthOverview) -> AppResult<()> {
        self.overviews.insert(user_id, overview.clone());
        Ok(())
    }

    async fn delete_overview(&self, user_id: Uuid) -> AppResult<()> {
        self.overviews.remove(&user_id);
        Ok(())
    }
}

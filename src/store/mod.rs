// ABOUTME: Overview store abstraction for persisting HealthOverview snapshots
// ABOUTME: One row per user, replaced wholesale on every recompute
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Overview Store
//!
//! Persistence boundary for [`HealthOverview`] snapshots: one
//! row/document per user, upserted on every recompute or override, no
//! history retained. Backends: SQLite (production) and in-memory (tests,
//! embedded). Write failures are surfaced to the caller; the previously
//! stored snapshot remains authoritative.

use crate::errors::AppResult;
use crate::models::HealthOverview;
use async_trait::async_trait;
use uuid::Uuid;

/// Runtime backend selection from a connection string
pub mod factory;
/// In-memory backend
pub mod memory;
/// `SQLite` backend
pub mod sqlite;

pub use factory::OverviewStoreBackend;
pub use memory::MemoryOverviewStore;
pub use sqlite::SqliteOverviewStore;

/// Persistence for per-user overview snapshots
#[async_trait]
pub trait OverviewStore: Send + Sync {
    /// Fetch the stored snapshot for a user, if any
    async fn get_overview(&self, user_id: Uuid) -> AppResult<Option<HealthOverview>>;

    /// Insert or replace the snapshot for a user
    async fn upsert_overview(&self, user_id: Uuid, overview: &HealthOverview) -> AppResult<()>;

    /// Delete the snapshot for a user (account/data deletion path)
    async fn delete_overview(&self, user_id: Uuid) -> AppResult<()>;
}

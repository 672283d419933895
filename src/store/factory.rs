// ABOUTME: Overview store factory with runtime backend selection
// ABOUTME: Chooses SQLite or in-memory from the connection string scheme
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Store factory
//!
//! Selects a backend from the connection string: `sqlite:` URLs get the
//! SQLite store, the literal `memory` gets the in-memory store.

use crate::errors::{AppError, AppResult};
use crate::models::HealthOverview;
use crate::store::{MemoryOverviewStore, OverviewStore, SqliteOverviewStore};
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

/// Overview store wrapper that delegates to the selected backend
#[derive(Debug, Clone)]
pub enum OverviewStoreBackend {
    /// Embedded file-based backend
    Sqlite(SqliteOverviewStore),
    /// Process-local backend for tests and embedded use
    Memory(MemoryOverviewStore),
}

impl OverviewStoreBackend {
    /// Create a store from a connection string and run migrations
    ///
    /// # Errors
    /// Returns a configuration error for unrecognized schemes and a
    /// database error if the SQLite connection or migration fails.
    pub async fn from_url(database_url: &str) -> AppResult<Self> {
        if database_url == "memory" {
            info!("overview store backend: in-memory");
            return Ok(Self::Memory(MemoryOverviewStore::new()));
        }

        if database_url.starts_with("sqlite:") {
            let store = SqliteOverviewStore::new(database_url).await?;
            store.migrate().await?;
            info!("overview store backend: sqlite");
            return Ok(Self::Sqlite(store));
        }

        Err(AppError::config(format!(
            "unsupported overview store url: '{database_url}' (expected 'sqlite:...' or 'memory')"
        )))
    }

    /// Descriptive name of the selected backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "SQLite",
            Self::Memory(_) => "Memory",
        }
    }
}

#[async_trait]
impl OverviewStore for OverviewStoreBackend {
    async fn get_overview(&self, user_id: Uuid) -> AppResult<Option<HealthOverview>> {
        match self {
            Self::Sqlite(store) => store.get_overview(user_id).await,
            Self::Memory(store) => store.get_overview(user_id).await,
        }
    }

    async fn upsert_overview(&self, user_id: Uuid, overview: &HealthOverview) -> AppResult<()> {
        match self {
            Self::Sqlite(store) => store.upsert_overview(user_id, overview).await,
            Self::Memory(store) => store.upsert_overview(user_id, overview).await,
        }
    }

    async fn delete_overview(&self, user_id: Uuid) -> AppResult<()> {
        match self {
            Self::Sqlite(store) => store.delete_overview(user_id).await,
            Self::Memory(store) => store.delete_overview(user_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_selection() {
        let store = OverviewStoreBackend::from_url("memory").await.unwrap();
        assert_eq!(store.backend_info(), "Memory");
    }

    #[tokio::test]
    async fn test_unknown_scheme_is_config_error() {
        let result = OverviewStoreBackend::from_url("postgres://localhost/db").await;
        assert!(result.is_err());
    }
}

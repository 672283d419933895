// ABOUTME: SQLite OverviewStore backend using sqlx with runtime queries
// ABOUTME: Mirrors the production health_overview table layout, one row per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

use crate::errors::{AppError, AppResult};
use crate::models::HealthOverview;
use crate::store::OverviewStore;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use uuid::Uuid;

/// SQLite-backed [`OverviewStore`]
#[derive(Debug, Clone)]
pub struct SqliteOverviewStore {
    pool: SqlitePool,
}

impl SqliteOverviewStore {
    /// Connect to the database at `database_url`, creating the file if needed
    ///
    /// # Errors
    /// Returns a database error if the URL is malformed or the connection
    /// cannot be established.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("invalid sqlite url: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create the `health_overview` schema if it does not exist
    ///
    /// # Errors
    /// Returns a database error if the DDL fails.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS health_overview (
                user_id TEXT PRIMARY KEY,
                overall_score INTEGER NOT NULL,
                cycle_health INTEGER NOT NULL,
                nutrition_score INTEGER NOT NULL,
                exercise_score INTEGER NOT NULL,
                fertility_score INTEGER NOT NULL,
                lifestyle_score INTEGER NOT NULL,
                symptoms_score INTEGER NOT NULL,
                last_updated TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn score_column(row: &SqliteRow, column: &str) -> AppResult<u8> {
    let value: i64 = row.try_get(column)?;
    u8::try_from(value)
        .map_err(|_| AppError::storage(format!("column {column} holds out-of-range value {value}")))
}

#[async_trait]
impl OverviewStore for SqliteOverviewStore {
    async fn get_overview(&self, user_id: Uuid) -> AppResult<Option<HealthOverview>> {
        let row = sqlx::query(
            r"
            SELECT overall_score, cycle_health, nutrition_score, exercise_score,
                   fertility_score, lifestyle_score, symptoms_score, last_updated
            FROM health_overview
            WHERE user_id = ?1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let last_updated: String = row.try_get("last_updated")?;
        let last_computed = NaiveDate::parse_from_str(&last_updated, "%Y-%m-%d").map_err(|e| {
            AppError::storage(format!("invalid last_updated '{last_updated}': {e}"))
        })?;

        Ok(Some(HealthOverview {
            overall: score_column(&row, "overall_score")?,
            cycle: score_column(&row, "cycle_health")?,
            nutrition: score_column(&row, "nutrition_score")?,
            exercise: score_column(&row, "exercise_score")?,
            fertility: score_column(&row, "fertility_score")?,
            lifestyle: score_column(&row, "lifestyle_score")?,
            symptoms: score_column(&row, "symptoms_score")?,
            last_computed,
        }))
    }

    async fn upsert_overview(&self, user_id: Uuid, overview: &HealthOverview) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO health_overview (
                user_id, overall_score, cycle_health, nutrition_score, exercise_score,
                fertility_score, lifestyle_score, symptoms_score, last_updated
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ON CONFLICT(user_id) DO UPDATE SET
                overall_score = excluded.overall_score,
                cycle_health = excluded.cycle_health,
                nutrition_score = excluded.nutrition_score,
                exercise_score = excluded.exercise_score,
                fertility_score = excluded.fertility_score,
                lifestyle_score = excluded.lifestyle_score,
                symptoms_score = excluded.symptoms_score,
                last_updated = excluded.last_updated
            ",
        )
        .bind(user_id.to_string())
        .bind(i64::from(overview.overall))
        .bind(i64::from(overview.cycle))
        .bind(i64::from(overview.nutrition))
        .bind(i64::from(overview.exercise))
        .bind(i64::from(overview.fertility))
        .bind(i64::from(overview.lifestyle))
        .bind(i64::from(overview.symptoms))
        .bind(overview.last_computed.format("%Y-%m-%d").to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_overview(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM health_overview WHERE user_id = ?1")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ABOUTME: Health score aggregation engine for the FemTracker platform
// ABOUTME: Six deterministic category scorers, composite overview, staleness policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

#![deny(unsafe_code)]

//! # FemTracker Health Score Engine
//!
//! Converts heterogeneous, unevenly sampled longitudinal records from six
//! life domains — cycle, nutrition, exercise, fertility, lifestyle, and
//! symptoms/mood — into normalized 0-100 category scores and one
//! composite overall score.
//!
//! ## Architecture
//!
//! - **Models**: domain record types and the [`models::HealthOverview`]
//!   snapshot
//! - **Intelligence**: six pure tier-based scorers, the composite
//!   aggregator, and the [`intelligence::OverviewEngine`] orchestrator
//! - **Providers**: the async record-reader boundary
//! - **Store**: snapshot persistence (SQLite or in-memory)
//! - **Config**: auditable tier tables and the staleness policy
//!
//! Scoring is a pure function of the record collections and a
//! caller-supplied reference date; the engine layer adds the staleness
//! policy (recompute when the stored snapshot is a day old or missing),
//! concurrent domain reads, and wholesale snapshot replacement.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use femtracker_engine::config::ScoringConfig;
//! use femtracker_engine::intelligence::HealthScoreCalculator;
//! use femtracker_engine::models::HealthRecordBundle;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
//! let overview = HealthScoreCalculator::calculate(
//!     &HealthRecordBundle::default(),
//!     &ScoringConfig::default(),
//!     today,
//! );
//! assert_eq!(overview.symptoms, 80); // empty-input baseline
//! ```

/// Tier tables, trailing windows, and staleness policy
pub mod config;
/// Unified error handling
pub mod errors;
/// Category scorers, composite aggregator, and overview engine
pub mod intelligence;
/// Structured logging setup
pub mod logging;
/// Domain records and overview snapshot types
pub mod models;
/// Domain record reader boundary
pub mod providers;
/// Overview snapshot persistence
pub mod store;

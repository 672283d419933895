// ABOUTME: Configuration modules for the health score engine
// ABOUTME: Scoring tier constants, trailing windows, and staleness policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Engine configuration
//!
//! All tier constants are table-driven so they stay auditable and
//! independently testable; defaults carry the production values.

/// Scoring thresholds, trailing windows, and staleness policy
pub mod scoring;

pub use scoring::ScoringConfig;

// ABOUTME: Fertility category scorer over a trailing 30-day observation window
// ABOUTME: BBT, cervical mucus, and ovulation test coverage tier bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Fertility Scorer
//!
//! Rewards observation coverage rather than observation values: counts of
//! BBT measurements (0-25), cervical mucus observations (0-20), and
//! ovulation tests (0-20) over a base of 50, plus a small consistency
//! bonus (0-5) for overall volume. Empty input returns 70 — higher than
//! the mid-range defaults elsewhere, since not tracking fertility is a
//! choice, not a health signal.

use crate::config::scoring::FertilityScoringConfig;
use crate::models::FertilityObservation;

/// Scorer for the fertility category
pub struct FertilityScorer;

impl FertilityScorer {
    /// Score fertility observations, most-recent-first, already windowed
    #[must_use]
    pub fn score(observations: &[FertilityObservation], config: &FertilityScoringConfig) -> u8 {
        if observations.is_empty() {
            return config.baseline;
        }

        let recent = &observations[..observations.len().min(config.max_records)];
        let mut score = i32::from(config.base);

        let bbt_count = recent.iter().filter(|o| o.bbt_celsius.is_some()).count();
        if bbt_count >= config.bbt_counts[0] {
            score += i32::from(config.bbt_bonus[0]);
        } else if bbt_count >= config.bbt_counts[1] {
            score += i32::from(config.bbt_bonus[1]);
        } else if bbt_count >= config.bbt_counts[2] {
            score += i32::from(config.bbt_bonus[2]);
        }

        let mucus_count = recent.iter().filter(|o| o.cervical_mucus.is_some()).count();
        if mucus_count >= config.mucus_counts[0] {
            score += i32::from(config.mucus_bonus[0]);
        } else if mucus_count >= config.mucus_counts[1] {
            score += i32::from(config.mucus_bonus[1]);
        } else if mucus_count >= config.mucus_counts[2] {
            score += i32::from(config.mucus_bonus[2]);
        }

        let ovulation_count = recent.iter().filter(|o| o.ovulation_test.is_some()).count();
        if ovulation_count >= config.ovulation_counts[0] {
            score += i32::from(config.ovulation_bonus[0]);
        } else if ovulation_count >= config.ovulation_counts[1] {
            score += i32::from(config.ovulation_bonus[1]);
        } else if ovulation_count >= config.ovulation_counts[2] {
            score += i32::from(config.ovulation_bonus[2]);
        }

        if recent.len() >= config.consistency_counts[0] {
            score += i32::from(config.consistency_bonus[0]);
        } else if recent.len() >= config.consistency_counts[1] {
            score += i32::from(config.consistency_bonus[1]);
        }

        score.clamp(0, 100) as u8
    }
}

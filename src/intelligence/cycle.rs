// ABOUTME: Cycle category scorer over the most recent three cycle records
// ABOUTME: Variance-based regularity and tracking-completeness tier bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Cycle Scorer
//!
//! Base 60 plus a regularity bonus (0-40) computed from the recorded
//! cycle lengths — an average-length component and a max-minus-min
//! variation component — and a completeness bonus (0-20) for how many of
//! the last three cycles are tracked at all. Regularity needs at least
//! two cycles carrying a length; ongoing cycles have none yet.

use crate::config::scoring::CycleScoringConfig;
use crate::models::CycleRecord;

/// Scorer for the cycle category
pub struct CycleScorer;

impl CycleScorer {
    /// Score cycle records, most-recent-first
    #[must_use]
    pub fn score(cycles: &[CycleRecord], config: &CycleScoringConfig) -> u8 {
        if cycles.is_empty() {
            return config.baseline;
        }

        let recent = &cycles[..cycles.len().min(config.max_records)];
        let mut score = i32::from(config.base);

        if recent.len() >= 2 {
            let lengths: Vec<u16> = recent.iter().filter_map(|c| c.cycle_length_days).collect();

            if lengths.len() >= config.min_lengths_for_regularity {
                let avg_length =
                    lengths.iter().map(|&l| f64::from(l)).sum::<f64>() / lengths.len() as f64;
                // lengths is non-empty here, so min/max always exist
                let variation = lengths.iter().max().unwrap_or(&0)
                    - lengths.iter().min().unwrap_or(&0);

                let (optimal_min, optimal_max) = config.length_optimal;
                let (acceptable_min, acceptable_max) = config.length_acceptable;
                if (optimal_min..=optimal_max).contains(&avg_length) {
                    score += i32::from(config.length_bonus[0]);
                } else if (acceptable_min..=acceptable_max).contains(&avg_length) {
                    score += i32::from(config.length_bonus[1]);
                }

                if variation <= config.variation_days[0] {
                    score += i32::from(config.variation_bonus[0]);
                } else if variation <= config.variation_days[1] {
                    score += i32::from(config.variation_bonus[1]);
                } else if variation <= config.variation_days[2] {
                    score += i32::from(config.variation_bonus[2]);
                }
            }
        }

        if recent.len() >= config.completeness_counts[0] {
            score += i32::from(config.completeness_bonus[0]);
        } else if recent.len() >= config.completeness_counts[1] {
            score += i32::from(config.completeness_bonus[1]);
        } else if recent.len() >= config.completeness_counts[2] {
            score += i32::from(config.completeness_bonus[2]);
        }

        score.clamp(0, 100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cycle(month: u32, length: Option<u16>) -> CycleRecord {
        CycleRecord {
            start_date: NaiveDate::from_ymd_opt(2026, month, 1).unwrap(),
            cycle_length_days: length,
        }
    }

    #[test]
    fn test_no_cycles_scores_baseline() {
        let config = CycleScoringConfig::default();
        assert_eq!(CycleScorer::score(&[], &config), 65);
    }

    #[test]
    fn test_two_regular_cycles_clamp() {
        // lengths 28 and 30: avg 29 (+20), variation 2 (+20), two cycles (+15)
        let cycles = vec![cycle(8, Some(30)), cycle(7, Some(28))];
        let config = CycleScoringConfig::default();
        assert_eq!(CycleScorer::score(&cycles, &config), 100);
    }

    #[test]
    fn test_single_cycle_has_no_regularity() {
        let cycles = vec![cycle(8, Some(28))];
        let config = CycleScoringConfig::default();
        // 60 + completeness(1) = 70
        assert_eq!(CycleScorer::score(&cycles, &config), 70);
    }

    #[test]
    fn test_ongoing_cycle_without_length_skips_regularity() {
        // two records, only one length: regularity needs two
        let cycles = vec![cycle(8, None), cycle(7, Some(28))];
        let config = CycleScoringConfig::default();
        assert_eq!(CycleScorer::score(&cycles, &config), 75);
    }

    #[test]
    fn test_irregular_lengths_earn_partial_bonus() {
        // lengths 21 and 35: avg 28 (+20), variation 14 (+8), three cycles (+20)
        let cycles = vec![cycle(8, Some(35)), cycle(7, Some(21)), cycle(6, None)];
        let config = CycleScoringConfig::default();
        // 60 + 20 + 8 + 20 = 108 -> 100
        assert_eq!(CycleScorer::score(&cycles, &config), 100);
    }

    #[test]
    fn test_wildly_varying_lengths() {
        // lengths 18 and 45: avg 31.5 (+20), variation 27 (no bonus), two cycles (+15)
        let cycles = vec![cycle(8, Some(45)), cycle(7, Some(18))];
        let config = CycleScoringConfig::default();
        assert_eq!(CycleScorer::score(&cycles, &config), 95);
    }

    #[test]
    fn test_truncates_to_three_most_recent() {
        let cycles = vec![
            cycle(8, Some(28)),
            cycle(7, Some(28)),
            cycle(6, Some(28)),
            cycle(5, Some(90)),
        ];
        let config = CycleScoringConfig::default();
        // the 90-day outlier is outside the window: avg 28 (+20), variation 0 (+20),
        // three cycles (+20) -> clamped
        assert_eq!(CycleScorer::score(&cycles, &config), 100);
    }
}

// ABOUTME: Lifestyle category scorer over a trailing 14-day entry window
// ABOUTME: Sleep quality, sleep duration, inverse stress, and completeness bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Lifestyle Scorer
//!
//! Empty input returns the 60 baseline; recorded input starts lower at 40
//! and earns it back through sleep quality (0-35), sleep duration in the
//! 7-9 hour band (0-25), low stress (0-25, inverse), and entry-count
//! completeness (0-15). Each component only averages the entries that
//! actually carry its field.

use crate::config::scoring::LifestyleScoringConfig;
use crate::models::LifestyleEntry;

/// Scorer for the lifestyle category
pub struct LifestyleScorer;

impl LifestyleScorer {
    /// Score lifestyle entries, most-recent-first, already windowed
    #[must_use]
    pub fn score(entries: &[LifestyleEntry], config: &LifestyleScoringConfig) -> u8 {
        if entries.is_empty() {
            return config.baseline;
        }

        let recent = &entries[..entries.len().min(config.max_records)];
        let mut score = i32::from(config.base);

        let qualities: Vec<f64> = recent
            .iter()
            .filter_map(|e| e.sleep_quality.map(f64::from))
            .collect();
        if !qualities.is_empty() {
            let avg_quality = qualities.iter().sum::<f64>() / qualities.len() as f64;
            score += (avg_quality * config.sleep_quality_weight).round() as i32;
        }

        let hours: Vec<f64> = recent.iter().filter_map(|e| e.sleep_hours).collect();
        if !hours.is_empty() {
            let avg_hours = hours.iter().sum::<f64>() / hours.len() as f64;
            let (optimal_min, optimal_max) = config.sleep_hours_optimal;
            let (acceptable_min, acceptable_max) = config.sleep_hours_acceptable;
            if (optimal_min..=optimal_max).contains(&avg_hours) {
                score += i32::from(config.sleep_duration_bonus[0]);
            } else if (acceptable_min..=acceptable_max).contains(&avg_hours) {
                score += i32::from(config.sleep_duration_bonus[1]);
            } else if avg_hours >= config.sleep_hours_min {
                score += i32::from(config.sleep_duration_bonus[2]);
            }
        }

        let stresses: Vec<f64> = recent
            .iter()
            .filter_map(|e| e.stress_level.map(f64::from))
            .collect();
        if !stresses.is_empty() {
            let avg_stress = stresses.iter().sum::<f64>() / stresses.len() as f64;
            score += ((10.0 - avg_stress) * config.stress_weight).round() as i32;
        }

        if recent.len() >= config.completeness_entries[0] {
            score += i32::from(config.completeness_bonus[0]);
        } else if recent.len() >= config.completeness_entries[1] {
            score += i32::from(config.completeness_bonus[1]);
        } else if recent.len() >= config.completeness_entries[2] {
            score += i32::from(config.completeness_bonus[2]);
        }

        score.clamp(0, 100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(
        day: u32,
        sleep_hours: Option<f64>,
        sleep_quality: Option<u8>,
        stress_level: Option<u8>,
    ) -> LifestyleEntry {
        LifestyleEntry {
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            sleep_hours,
            sleep_quality,
            stress_level,
        }
    }

    #[test]
    fn test_no_entries_scores_baseline() {
        let config = LifestyleScoringConfig::default();
        assert_eq!(LifestyleScorer::score(&[], &config), 60);
    }

    #[test]
    fn test_single_complete_entry() {
        // 40 + quality 5 -> round(17.5)=18, hours 6 in acceptable band +15,
        // stress 5 -> round(12.5)=13, no completeness bonus
        let entries = vec![entry(25, Some(6.0), Some(5), Some(5))];
        let config = LifestyleScoringConfig::default();
        assert_eq!(LifestyleScorer::score(&entries, &config), 86);
    }

    #[test]
    fn test_quality_only_entries() {
        // avg quality 4 -> round(14); 3 entries -> completeness +5
        let entries = vec![
            entry(25, None, Some(4), None),
            entry(24, None, Some(4), None),
            entry(23, None, Some(4), None),
        ];
        let config = LifestyleScoringConfig::default();
        assert_eq!(LifestyleScorer::score(&entries, &config), 59);
    }

    #[test]
    fn test_full_healthy_fortnight_clamps() {
        // quality 8 (+28), hours 8 (+25), stress 2 (+20), 14 entries (+15)
        let entries: Vec<LifestyleEntry> = (12..26)
            .map(|d| entry(d, Some(8.0), Some(8), Some(2)))
            .collect();
        let config = LifestyleScoringConfig::default();
        assert_eq!(LifestyleScorer::score(&entries, &config), 100);
    }

    #[test]
    fn test_short_sleep_misses_duration_bonus() {
        // avg 4.5 hours: below the minimum tier entirely
        let entries = vec![
            entry(25, Some(4.5), None, None),
            entry(24, Some(4.5), None, None),
        ];
        let config = LifestyleScoringConfig::default();
        // 40 + 0 + completeness(2) -> 45
        assert_eq!(LifestyleScorer::score(&entries, &config), 45);
    }
}

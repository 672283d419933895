// ABOUTME: Exercise category scorer over a trailing 14-day session window
// ABOUTME: Frequency, weekly-normalized duration, and intensity tier bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Exercise Scorer
//!
//! Base 50 plus three independent bonuses: active-day frequency (0-30),
//! weekly-normalized minutes (0-25, with 150 min/week earning the top
//! tier), and average session intensity (0-25). No sessions in the
//! window scores the neutral baseline of 50.

use crate::config::scoring::ExerciseScoringConfig;
use crate::models::ExerciseSession;
use std::collections::HashSet;

/// Scorer for the exercise category
pub struct ExerciseScorer;

impl ExerciseScorer {
    /// Score exercise sessions, most-recent-first, already windowed
    #[must_use]
    pub fn score(sessions: &[ExerciseSession], config: &ExerciseScoringConfig) -> u8 {
        if sessions.is_empty() {
            return config.baseline;
        }

        let recent = &sessions[..sessions.len().min(config.max_records)];
        let total_days = f64::from(config.window_days);
        let exercise_days = recent
            .iter()
            .map(|s| s.date)
            .collect::<HashSet<_>>()
            .len();
        let total_minutes: u32 = recent.iter().map(|s| s.duration_minutes).sum();
        let avg_intensity =
            recent.iter().map(|s| f64::from(s.intensity)).sum::<f64>() / recent.len() as f64;

        let mut score = i32::from(config.base);

        let frequency = exercise_days as f64 / total_days;
        if frequency >= config.frequency_high {
            score += i32::from(config.frequency_bonus[0]);
        } else if frequency >= config.frequency_mid {
            score += i32::from(config.frequency_bonus[1]);
        } else if frequency >= config.frequency_low {
            score += i32::from(config.frequency_bonus[2]);
        }

        let weekly_minutes = f64::from(total_minutes) * (7.0 / total_days);
        if weekly_minutes >= config.weekly_minutes_high {
            score += i32::from(config.duration_bonus[0]);
        } else if weekly_minutes >= config.weekly_minutes_mid {
            score += i32::from(config.duration_bonus[1]);
        } else if weekly_minutes >= config.weekly_minutes_low {
            score += i32::from(config.duration_bonus[2]);
        }

        if avg_intensity >= config.intensity_high {
            score += i32::from(config.intensity_bonus[0]);
        } else if avg_intensity >= config.intensity_mid {
            score += i32::from(config.intensity_bonus[1]);
        } else if avg_intensity >= config.intensity_low {
            score += i32::from(config.intensity_bonus[2]);
        }

        score.clamp(0, 100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn session(day: u32, duration_minutes: u32, intensity: u8) -> ExerciseSession {
        ExerciseSession {
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            duration_minutes,
            intensity,
        }
    }

    #[test]
    fn test_no_sessions_scores_baseline() {
        let config = ExerciseScoringConfig::default();
        assert_eq!(ExerciseScorer::score(&[], &config), 50);
    }

    #[test]
    fn test_five_sessions_hits_every_mid_tier() {
        // 5 distinct days / 14 = 0.357, 200 min -> 100 weekly, avg intensity 6
        let sessions = vec![
            session(25, 40, 6),
            session(23, 40, 6),
            session(21, 40, 6),
            session(19, 40, 6),
            session(17, 40, 6),
        ];
        let config = ExerciseScoringConfig::default();
        // 50 + 20 + 15 + 15
        assert_eq!(ExerciseScorer::score(&sessions, &config), 100);
    }

    #[test]
    fn test_light_activity_earns_no_bonus() {
        // 2 days / 14 = 0.14, 60 min total -> 30 weekly, intensity 2
        let sessions = vec![session(25, 30, 2), session(24, 30, 2)];
        let config = ExerciseScoringConfig::default();
        assert_eq!(ExerciseScorer::score(&sessions, &config), 50);
    }

    #[test]
    fn test_heavy_week_clamps_to_100() {
        // 7 days -> freq 0.5 (+30), 300 min -> weekly 150 (+25), intensity 8 (+25)
        let sessions: Vec<ExerciseSession> = (19..26)
            .map(|day| session(day, 43, 8))
            .collect();
        let config = ExerciseScoringConfig::default();
        assert_eq!(ExerciseScorer::score(&sessions, &config), 100);
    }

    #[test]
    fn test_truncates_to_max_records() {
        // 20 sessions supplied; only the first 14 participate
        let sessions: Vec<ExerciseSession> = (1..21)
            .map(|day| session(day, 10, 1))
            .collect();
        let config = ExerciseScoringConfig::default();
        // 14 days of 10 min: freq 14/14 (+30), weekly 70 (+8), intensity 1 (+0)
        assert_eq!(ExerciseScorer::score(&sessions, &config), 88);
    }
}

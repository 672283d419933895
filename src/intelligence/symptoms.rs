// ABOUTME: Symptoms/mood category scorer with deduction-based severity logic
// ABOUTME: Symptom severity and density deductions, then mood recombination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Symptoms/Mood Scorer
//!
//! The one deduction-based scorer: fewer and weaker symptoms mean a
//! higher score, so empty input yields the maximum baseline of 80 rather
//! than a mid-range one. Symptom severity and density subtract from the
//! base; when mood entries exist the running score is reset to
//! `max(score - 40, 20)` and the mood component (0-40) is added on top,
//! so mood dominates the final value instead of stacking onto it. The
//! order of those two steps is load-bearing and must not be normalized
//! into the bonus shape the other scorers use.

use crate::config::scoring::SymptomsScoringConfig;
use crate::models::{MoodEntry, SymptomEntry};

/// Scorer for the symptoms/mood category
pub struct SymptomsScorer;

impl SymptomsScorer {
    /// Score symptom and mood entries, most-recent-first
    #[must_use]
    pub fn score(
        symptoms: &[SymptomEntry],
        moods: &[MoodEntry],
        config: &SymptomsScoringConfig,
    ) -> u8 {
        let mut score = i32::from(config.base);

        let recent_symptoms = &symptoms[..symptoms.len().min(config.symptom_max_records)];
        if !recent_symptoms.is_empty() {
            let avg_severity = recent_symptoms
                .iter()
                .map(|s| f64::from(s.severity))
                .sum::<f64>()
                / recent_symptoms.len() as f64;
            let density = recent_symptoms.len() as f64 / config.symptom_max_records as f64;

            score -= (avg_severity * config.severity_weight).round() as i32;
            score -= (density * config.density_weight).round() as i32;
        }

        let recent_moods = &moods[..moods.len().min(config.mood_max_records)];
        if !recent_moods.is_empty() {
            let avg_intensity = recent_moods
                .iter()
                .map(|m| f64::from(m.intensity))
                .sum::<f64>()
                / recent_moods.len() as f64;
            let mood_score = (avg_intensity * config.mood_weight).round() as i32;
            score = (score - config.mood_reset_offset).max(config.mood_reset_floor) + mood_score;
        }

        score.clamp(0, 100) as u8
    }
}

// ABOUTME: Tier constants and trailing windows for all six category scorers
// ABOUTME: Baselines, bonus thresholds, deduction weights, and the staleness policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Scoring Configuration
//!
//! Every threshold the scorers consult lives here, one struct per
//! category, so the tier tables can be audited and tested without reading
//! scorer code. Defaults are the production constants.
//!
//! Baselines intentionally differ across domains for empty input
//! (exercise 50, nutrition 50, symptoms 80, lifestyle 60, fertility 70,
//! cycle 65); absence of tracking is penalized in none of them, but the
//! neutral point each domain returns to was tuned per domain.

use serde::{Deserialize, Serialize};

/// Scoring configuration for the whole engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Exercise scorer tiers
    pub exercise: ExerciseScoringConfig,
    /// Nutrition scorer tiers
    pub nutrition: NutritionScoringConfig,
    /// Symptoms/mood scorer weights
    pub symptoms: SymptomsScoringConfig,
    /// Lifestyle scorer tiers
    pub lifestyle: LifestyleScoringConfig,
    /// Fertility scorer tiers
    pub fertility: FertilityScoringConfig,
    /// Cycle scorer tiers
    pub cycle: CycleScoringConfig,
    /// Snapshot staleness policy
    pub staleness: StalenessConfig,
}

/// Exercise scorer configuration
///
/// Base plus three independent bonuses (frequency, weekly duration,
/// intensity), clamped to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseScoringConfig {
    /// Score returned when no sessions exist in the window
    pub baseline: u8,
    /// Starting score when sessions exist
    pub base: u8,
    /// Trailing read window (days)
    pub window_days: u32,
    /// Most-recent sessions considered
    pub max_records: usize,
    /// Active-day fraction for the top frequency bonus
    pub frequency_high: f64,
    /// Active-day fraction for the mid frequency bonus
    pub frequency_mid: f64,
    /// Active-day fraction for the low frequency bonus
    pub frequency_low: f64,
    /// Frequency bonuses (high, mid, low)
    pub frequency_bonus: [u8; 3],
    /// Weekly-normalized minutes for the top duration bonus
    pub weekly_minutes_high: f64,
    /// Weekly-normalized minutes for the mid duration bonus
    pub weekly_minutes_mid: f64,
    /// Weekly-normalized minutes for the low duration bonus
    pub weekly_minutes_low: f64,
    /// Duration bonuses (high, mid, low)
    pub duration_bonus: [u8; 3],
    /// Average intensity for the top intensity bonus
    pub intensity_high: f64,
    /// Average intensity for the mid intensity bonus
    pub intensity_mid: f64,
    /// Average intensity for the low intensity bonus
    pub intensity_low: f64,
    /// Intensity bonuses (high, mid, low)
    pub intensity_bonus: [u8; 3],
}

impl Default for ExerciseScoringConfig {
    fn default() -> Self {
        Self {
            baseline: 50,
            base: 50,
            window_days: 14,
            max_records: 14,
            frequency_high: 0.5,
            frequency_mid: 0.35,
            frequency_low: 0.2,
            frequency_bonus: [30, 20, 10],
            weekly_minutes_high: 150.0, // WHO weekly activity recommendation
            weekly_minutes_mid: 100.0,
            weekly_minutes_low: 50.0,
            duration_bonus: [25, 15, 8],
            intensity_high: 7.0,
            intensity_mid: 5.0,
            intensity_low: 3.0,
            intensity_bonus: [25, 15, 8],
        }
    }
}

/// Nutrition scorer configuration
///
/// Meal regularity, hydration, and recording-completeness bonuses over a
/// base of 50.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionScoringConfig {
    /// Score returned when neither meals nor water exist in the windows
    pub baseline: u8,
    /// Starting score
    pub base: u8,
    /// Trailing meal read window (days)
    pub meal_window_days: u32,
    /// Most-recent meals considered
    pub meal_max_records: usize,
    /// Trailing water read window (days)
    pub water_window_days: u32,
    /// Most-recent water records considered
    pub water_max_records: usize,
    /// Meals-per-recorded-day thresholds (high, mid, low)
    pub meals_per_day: [f64; 3],
    /// Meal regularity bonuses (high, mid, low)
    pub meal_bonus: [u8; 3],
    /// Average daily milliliters thresholds (four descending tiers)
    pub daily_water_ml: [f64; 4],
    /// Hydration bonuses matching `daily_water_ml`
    pub water_bonus: [u8; 4],
    /// Distinct recorded-day thresholds (high, mid, low)
    pub recorded_days: [usize; 3],
    /// Completeness bonuses (high, mid, low)
    pub completeness_bonus: [u8; 3],
}

impl Default for NutritionScoringConfig {
    fn default() -> Self {
        Self {
            baseline: 50,
            base: 50,
            meal_window_days: 21,
            meal_max_records: 21,
            water_window_days: 14,
            water_max_records: 14,
            meals_per_day: [3.0, 2.0, 1.0],
            meal_bonus: [30, 20, 10],
            daily_water_ml: [2000.0, 1500.0, 1000.0, 500.0],
            water_bonus: [35, 25, 15, 8],
            recorded_days: [10, 5, 2],
            completeness_bonus: [15, 10, 5],
        }
    }
}

/// Symptoms/mood scorer configuration
///
/// The one deduction-based scorer: symptoms subtract from a high base,
/// then mood (when present) resets and dominates the running score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomsScoringConfig {
    /// Starting score; also the empty-input result
    pub base: u8,
    /// Trailing symptom read window (days)
    pub symptom_window_days: u32,
    /// Most-recent symptoms considered; also the density denominator
    pub symptom_max_records: usize,
    /// Read window for moods (days); the count cap below is what binds
    pub mood_window_days: u32,
    /// Most-recent moods considered
    pub mood_max_records: usize,
    /// Multiplier on average severity for the severity deduction
    pub severity_weight: f64,
    /// Multiplier on symptom density for the density deduction
    pub density_weight: f64,
    /// Multiplier on average mood intensity for the mood component
    pub mood_weight: f64,
    /// Amount subtracted from the running score before the mood reset
    pub mood_reset_offset: i32,
    /// Floor applied to the running score during the mood reset
    pub mood_reset_floor: i32,
}

impl Default for SymptomsScoringConfig {
    fn default() -> Self {
        Self {
            base: 80,
            symptom_window_days: 30,
            symptom_max_records: 30,
            mood_window_days: 180,
            mood_max_records: 20,
            severity_weight: 3.0,
            density_weight: 20.0,
            mood_weight: 4.0, // mood component range 0-40
            mood_reset_offset: 40,
            mood_reset_floor: 20,
        }
    }
}

/// Lifestyle scorer configuration
///
/// Sleep quality, sleep duration, stress (inverse), and completeness over
/// a base of 40; empty input returns the higher 60 baseline instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifestyleScoringConfig {
    /// Score returned when no entries exist in the window
    pub baseline: u8,
    /// Starting score when entries exist
    pub base: u8,
    /// Trailing read window (days)
    pub window_days: u32,
    /// Most-recent entries considered
    pub max_records: usize,
    /// Multiplier on average sleep quality (1-10 -> 0-35)
    pub sleep_quality_weight: f64,
    /// Optimal sleep hours range, inclusive
    pub sleep_hours_optimal: (f64, f64),
    /// Acceptable sleep hours range, inclusive
    pub sleep_hours_acceptable: (f64, f64),
    /// Minimum sleep hours for the lowest duration bonus
    pub sleep_hours_min: f64,
    /// Sleep duration bonuses (optimal, acceptable, minimum)
    pub sleep_duration_bonus: [u8; 3],
    /// Multiplier on inverted average stress ((10 - avg) * weight)
    pub stress_weight: f64,
    /// Entry-count thresholds (high, mid, low)
    pub completeness_entries: [usize; 3],
    /// Completeness bonuses (high, mid, low)
    pub completeness_bonus: [u8; 3],
}

impl Default for LifestyleScoringConfig {
    fn default() -> Self {
        Self {
            baseline: 60,
            base: 40,
            window_days: 14,
            max_records: 14,
            sleep_quality_weight: 3.5,
            sleep_hours_optimal: (7.0, 9.0), // NSF adult recommendation
            sleep_hours_acceptable: (6.0, 10.0),
            sleep_hours_min: 5.0,
            sleep_duration_bonus: [25, 15, 8],
            stress_weight: 2.5,
            completeness_entries: [10, 5, 2],
            completeness_bonus: [15, 10, 5],
        }
    }
}

/// Fertility scorer configuration
///
/// Rewards observation coverage (BBT, cervical mucus, ovulation tests)
/// plus an overall consistency bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FertilityScoringConfig {
    /// Score returned when no observations exist in the window;
    /// deliberately high, absence of fertility tracking is not penalized
    pub baseline: u8,
    /// Starting score when observations exist
    pub base: u8,
    /// Trailing read window (days)
    pub window_days: u32,
    /// Most-recent observations considered
    pub max_records: usize,
    /// BBT observation-count thresholds (high, mid, low)
    pub bbt_counts: [usize; 3],
    /// BBT bonuses (high, mid, low)
    pub bbt_bonus: [u8; 3],
    /// Cervical mucus observation-count thresholds (high, mid, low)
    pub mucus_counts: [usize; 3],
    /// Cervical mucus bonuses (high, mid, low)
    pub mucus_bonus: [u8; 3],
    /// Ovulation test count thresholds (high, mid, low)
    pub ovulation_counts: [usize; 3],
    /// Ovulation test bonuses (high, mid, low)
    pub ovulation_bonus: [u8; 3],
    /// Total observation-count thresholds for consistency (high, mid)
    pub consistency_counts: [usize; 2],
    /// Consistency bonuses (high, mid)
    pub consistency_bonus: [u8; 2],
}

impl Default for FertilityScoringConfig {
    fn default() -> Self {
        Self {
            baseline: 70,
            base: 50,
            window_days: 30,
            max_records: 30,
            bbt_counts: [20, 10, 5],
            bbt_bonus: [25, 15, 8],
            mucus_counts: [15, 8, 3],
            mucus_bonus: [20, 12, 6],
            ovulation_counts: [10, 5, 2],
            ovulation_bonus: [20, 12, 6],
            consistency_counts: [20, 10],
            consistency_bonus: [5, 3],
        }
    }
}

/// Cycle scorer configuration
///
/// Variance-based regularity over the most recent cycles plus a
/// completeness bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleScoringConfig {
    /// Score returned when no cycles are recorded
    pub baseline: u8,
    /// Starting score when cycles exist
    pub base: u8,
    /// Read window for cycle records (days); the count cap binds
    pub window_days: u32,
    /// Most-recent cycles considered
    pub max_records: usize,
    /// Minimum cycles carrying a length for regularity scoring
    pub min_lengths_for_regularity: usize,
    /// Healthy average cycle length range, inclusive (days)
    pub length_optimal: (f64, f64),
    /// Acceptable average cycle length range, inclusive (days)
    pub length_acceptable: (f64, f64),
    /// Length-range bonuses (optimal, acceptable)
    pub length_bonus: [u8; 2],
    /// Max-minus-min variation thresholds, ascending (days)
    pub variation_days: [u16; 3],
    /// Variation bonuses matching `variation_days`
    pub variation_bonus: [u8; 3],
    /// Recent-cycle-count thresholds (high, mid, low)
    pub completeness_counts: [usize; 3],
    /// Completeness bonuses (high, mid, low)
    pub completeness_bonus: [u8; 3],
}

impl Default for CycleScoringConfig {
    fn default() -> Self {
        Self {
            baseline: 65,
            base: 60,
            window_days: 720,
            max_records: 3,
            min_lengths_for_regularity: 2,
            length_optimal: (21.0, 35.0), // clinically normal cycle length
            length_acceptable: (18.0, 40.0),
            length_bonus: [20, 10],
            variation_days: [3, 7, 14],
            variation_bonus: [20, 15, 8],
            completeness_counts: [3, 2, 1],
            completeness_bonus: [20, 15, 10],
        }
    }
}

/// Snapshot staleness policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StalenessConfig {
    /// Age in days at which a stored overview must be recomputed
    pub max_age_days: i64,
}

impl Default for StalenessConfig {
    fn default() -> Self {
        Self { max_age_days: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_baselines_differ_by_domain() {
        let config = ScoringConfig::default();
        assert_eq!(config.exercise.baseline, 50);
        assert_eq!(config.nutrition.baseline, 50);
        assert_eq!(config.symptoms.base, 80);
        assert_eq!(config.lifestyle.baseline, 60);
        assert_eq!(config.fertility.baseline, 70);
        assert_eq!(config.cycle.baseline, 65);
    }

    #[test]
    fn test_default_windows() {
        let config = ScoringConfig::default();
        assert_eq!(config.exercise.window_days, 14);
        assert_eq!(config.nutrition.meal_window_days, 21);
        assert_eq!(config.nutrition.water_window_days, 14);
        assert_eq!(config.symptoms.symptom_max_records, 30);
        assert_eq!(config.symptoms.mood_max_records, 20);
        assert_eq!(config.cycle.max_records, 3);
    }

    #[test]
    fn test_staleness_default_is_one_day() {
        assert_eq!(StalenessConfig::default().max_age_days, 1);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.exercise.frequency_bonus, [30, 20, 10]);
        assert_eq!(parsed.fertility.consistency_bonus, [5, 3]);
    }
}

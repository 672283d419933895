// ABOUTME: Integration tests for the composite health score calculator
// ABOUTME: Scenario coverage, clamp and rounded-mean invariants, determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use femtracker_engine::config::ScoringConfig;
use femtracker_engine::intelligence::HealthScoreCalculator;
use femtracker_engine::models::{
    CycleRecord, ExerciseSession, HealthRecordBundle, LifestyleEntry, MealEntry, MoodEntry,
    SymptomEntry, WaterIntakeEntry,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
}

fn today() -> NaiveDate {
    date(25)
}

// === Empty-input baselines ===

#[test]
fn test_empty_bundle_baselines() {
    let overview = HealthScoreCalculator::calculate(
        &HealthRecordBundle::default(),
        &ScoringConfig::default(),
        today(),
    );

    assert_eq!(overview.exercise, 50);
    assert_eq!(overview.nutrition, 50);
    assert_eq!(overview.symptoms, 80);
    assert_eq!(overview.lifestyle, 60);
    assert_eq!(overview.fertility, 70);
    assert_eq!(overview.cycle, 65);
}

// === Scenario A: exercise ===

#[test]
fn test_scenario_active_fortnight_scores_100() {
    // 5 sessions across 5 distinct days, total 200 min, avg intensity 6:
    // frequency 0.357 (+20), weekly minutes 100 (+15), intensity 6 (+15)
    let bundle = HealthRecordBundle {
        exercises: vec![
            ExerciseSession {
                date: date(24),
                duration_minutes: 40,
                intensity: 6,
            },
            ExerciseSession {
                date: date(22),
                duration_minutes: 40,
                intensity: 6,
            },
            ExerciseSession {
                date: date(20),
                duration_minutes: 40,
                intensity: 6,
            },
            ExerciseSession {
                date: date(18),
                duration_minutes: 40,
                intensity: 6,
            },
            ExerciseSession {
                date: date(16),
                duration_minutes: 40,
                intensity: 6,
            },
        ],
        ..HealthRecordBundle::default()
    };

    let overview = HealthScoreCalculator::calculate(&bundle, &ScoringConfig::default(), today());
    assert_eq!(overview.exercise, 100);
}

// === Scenario B: nutrition without records ===

#[test]
fn test_scenario_no_nutrition_records() {
    let bundle = HealthRecordBundle {
        // other domains populated to prove nutrition is scored independently
        symptoms: vec![SymptomEntry {
            date: date(24),
            severity: 3,
        }],
        ..HealthRecordBundle::default()
    };

    let overview = HealthScoreCalculator::calculate(&bundle, &ScoringConfig::default(), today());
    assert_eq!(overview.nutrition, 50);
}

// === Scenario C: symptoms ===

#[test]
fn test_scenario_heavy_symptoms_no_moods() {
    // 10 entries, avg severity 8, density 10/30: 80 - 24 - 7 = 49
    let bundle = HealthRecordBundle {
        symptoms: (10..20)
            .map(|d| SymptomEntry {
                date: date(d),
                severity: 8,
            })
            .collect(),
        ..HealthRecordBundle::default()
    };

    let overview = HealthScoreCalculator::calculate(&bundle, &ScoringConfig::default(), today());
    assert_eq!(overview.symptoms, 49);
}

// === Scenario D: cycle ===

#[test]
fn test_scenario_two_regular_cycles_clamp() {
    // lengths 28 and 30: length range +20, variation 2 (+20), completeness +15;
    // 60 + 55 = 115 clamped to 100
    let bundle = HealthRecordBundle {
        cycles: vec![
            CycleRecord {
                start_date: date(1),
                cycle_length_days: Some(30),
            },
            CycleRecord {
                start_date: NaiveDate::from_ymd_opt(2026, 7, 4).unwrap(),
                cycle_length_days: Some(28),
            },
        ],
        ..HealthRecordBundle::default()
    };

    let overview = HealthScoreCalculator::calculate(&bundle, &ScoringConfig::default(), today());
    assert_eq!(overview.cycle, 100);
}

// === Invariants ===

fn dense_bundle() -> HealthRecordBundle {
    HealthRecordBundle {
        exercises: (12..26)
            .map(|d| ExerciseSession {
                date: date(d),
                duration_minutes: 45,
                intensity: 8,
            })
            .collect(),
        meals: (5..26)
            .flat_map(|d| {
                std::iter::repeat_with(move || MealEntry { date: date(d) }).take(3)
            })
            .collect(),
        water_intake: (12..26)
            .map(|d| WaterIntakeEntry {
                date: date(d),
                amount_ml: 2200,
            })
            .collect(),
        symptoms: (1..11)
            .map(|d| SymptomEntry {
                date: date(d),
                severity: 9,
            })
            .collect(),
        moods: (15..25)
            .map(|d| MoodEntry {
                date: date(d),
                intensity: 8,
            })
            .collect(),
        lifestyle: (12..26)
            .map(|d| LifestyleEntry {
                date: date(d),
                sleep_hours: Some(8.0),
                sleep_quality: Some(8),
                stress_level: Some(3),
            })
            .collect(),
        fertility: Vec::new(),
        cycles: vec![
            CycleRecord {
                start_date: date(1),
                cycle_length_days: Some(29),
            },
            CycleRecord {
                start_date: NaiveDate::from_ymd_opt(2026, 7, 3).unwrap(),
                cycle_length_days: Some(29),
            },
            CycleRecord {
                start_date: NaiveDate::from_ymd_opt(2026, 6, 4).unwrap(),
                cycle_length_days: Some(29),
            },
        ],
    }
}

#[test]
fn test_all_scores_within_bounds() {
    let overview = HealthScoreCalculator::calculate(
        &dense_bundle(),
        &ScoringConfig::default(),
        today(),
    );

    for score in overview.category_scores() {
        assert!(
            score.value <= 100,
            "{} score {} exceeds 100",
            score.category,
            score.value
        );
    }
    assert!(overview.overall <= 100);
}

#[test]
fn test_overall_is_rounded_mean_of_categories() {
    let overview = HealthScoreCalculator::calculate(
        &dense_bundle(),
        &ScoringConfig::default(),
        today(),
    );

    let sum: u32 = overview
        .category_scores()
        .iter()
        .map(|s| u32::from(s.value))
        .sum();
    let expected = (f64::from(sum) / 6.0).round() as u8;
    assert_eq!(overview.overall, expected);
}

#[test]
fn test_identical_inputs_identical_output() {
    let config = ScoringConfig::default();
    let bundle = dense_bundle();

    let first = HealthScoreCalculator::calculate(&bundle, &config, today());
    let second = HealthScoreCalculator::calculate(&bundle, &config, today());
    assert_eq!(first, second);
}

#[test]
fn test_reference_date_only_sets_last_computed() {
    // Scoring depends on the record collections alone; the reference date
    // stamps the snapshot.
    let config = ScoringConfig::default();
    let bundle = dense_bundle();

    let monday = HealthScoreCalculator::calculate(&bundle, &config, date(24));
    let tuesday = HealthScoreCalculator::calculate(&bundle, &config, date(25));

    assert_eq!(monday.category_scores(), tuesday.category_scores());
    assert_eq!(monday.last_computed, date(24));
    assert_eq!(tuesday.last_computed, date(25));
}

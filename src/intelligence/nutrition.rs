// ABOUTME: Nutrition category scorer over trailing meal and water windows
// ABOUTME: Meal regularity, hydration, and recording-completeness tier bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FemTracker

//! Nutrition Scorer
//!
//! Base 50 plus meal regularity (0-30, meals per recorded day), hydration
//! (0-35, average daily milliliters over water-recording days), and
//! completeness (0-15, distinct days carrying either record kind).

use crate::config::scoring::NutritionScoringConfig;
use crate::models::{MealEntry, WaterIntakeEntry};
use std::collections::HashSet;

/// Scorer for the nutrition category
pub struct NutritionScorer;

impl NutritionScorer {
    /// Score meals and water intake, most-recent-first, already windowed
    #[must_use]
    pub fn score(
        meals: &[MealEntry],
        water: &[WaterIntakeEntry],
        config: &NutritionScoringConfig,
    ) -> u8 {
        if meals.is_empty() && water.is_empty() {
            return config.baseline;
        }

        let recent_meals = &meals[..meals.len().min(config.meal_max_records)];
        let recent_water = &water[..water.len().min(config.water_max_records)];

        let mut score = i32::from(config.base);

        let meal_days: HashSet<_> = recent_meals.iter().map(|m| m.date).collect();
        let meals_per_day = recent_meals.len() as f64 / meal_days.len().max(1) as f64;
        if meals_per_day >= config.meals_per_day[0] {
            score += i32::from(config.meal_bonus[0]);
        } else if meals_per_day >= config.meals_per_day[1] {
            score += i32::from(config.meal_bonus[1]);
        } else if meals_per_day >= config.meals_per_day[2] {
            score += i32::from(config.meal_bonus[2]);
        }

        let water_days: HashSet<_> = recent_water.iter().map(|w| w.date).collect();
        if !water_days.is_empty() {
            let avg_daily_ml = recent_water
                .iter()
                .map(|w| f64::from(w.amount_ml))
                .sum::<f64>()
                / water_days.len() as f64;
            if avg_daily_ml >= config.daily_water_ml[0] {
                score += i32::from(config.water_bonus[0]);
            } else if avg_daily_ml >= config.daily_water_ml[1] {
                score += i32::from(config.water_bonus[1]);
            } else if avg_daily_ml >= config.daily_water_ml[2] {
                score += i32::from(config.water_bonus[2]);
            } else if avg_daily_ml >= config.daily_water_ml[3] {
                score += i32::from(config.water_bonus[3]);
            }
        }

        let recorded_days: HashSet<_> = meal_days.union(&water_days).collect();
        if recorded_days.len() >= config.recorded_days[0] {
            score += i32::from(config.completeness_bonus[0]);
        } else if recorded_days.len() >= config.recorded_days[1] {
            score += i32::from(config.completeness_bonus[1]);
        } else if recorded_days.len() >= config.recorded_days[2] {
            score += i32::from(config.completeness_bonus[2]);
        }

        score.clamp(0, 100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    #[test]
    fn test_no_records_scores_baseline() {
        let config = NutritionScoringConfig::default();
        assert_eq!(NutritionScorer::score(&[], &[], &config), 50);
    }

    #[test]
    fn test_three_meals_a_day_earns_top_regularity() {
        // 6 meals over 2 distinct days -> 3 meals/day (+30), 2 recorded days (+5)
        let meals: Vec<MealEntry> = [25, 25, 25, 24, 24, 24]
            .iter()
            .map(|&d| MealEntry { date: date(d) })
            .collect();
        let config = NutritionScoringConfig::default();
        assert_eq!(NutritionScorer::score(&meals, &[], &config), 85);
    }

    #[test]
    fn test_hydration_only() {
        // 2000 ml/day across 3 days (+35), 3 recorded days (+5), no meals
        let water: Vec<WaterIntakeEntry> = [25, 24, 23]
            .iter()
            .map(|&d| WaterIntakeEntry {
                date: date(d),
                amount_ml: 2000,
            })
            .collect();
        let config = NutritionScoringConfig::default();
        assert_eq!(NutritionScorer::score(&[], &water, &config), 90);
    }

    #[test]
    fn test_completeness_counts_union_of_days() {
        // meals on days 20-24, water on days 15-19: 10 distinct days (+15)
        let meals: Vec<MealEntry> = (20..25).map(|d| MealEntry { date: date(d) }).collect();
        let water: Vec<WaterIntakeEntry> = (15..20)
            .map(|d| WaterIntakeEntry {
                date: date(d),
                amount_ml: 400,
            })
            .collect();
        let config = NutritionScoringConfig::default();
        // 1 meal/day (+10), avg 400 ml (below lowest tier), union 10 days (+15)
        assert_eq!(NutritionScorer::score(&meals, &water, &config), 75);
    }

    #[test]
    fn test_dense_logging_clamps_to_100() {
        // 3 meals/day for 14 days and 2.5 L water for 14 days
        let mut meals = Vec::new();
        for d in 12..26 {
            for _ in 0..3 {
                meals.push(MealEntry { date: date(d) });
            }
        }
        let water: Vec<WaterIntakeEntry> = (12..26)
            .map(|d| WaterIntakeEntry {
                date: date(d),
                amount_ml: 2500,
            })
            .collect();
        let config = NutritionScoringConfig::default();
        // truncation keeps 21 meals over 7 days: still 3 meals/day
        assert_eq!(NutritionScorer::score(&meals, &water, &config), 100);
    }
}

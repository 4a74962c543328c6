// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MET-based calorie estimation.
//!
//! `kcal/min = MET × 3.5 × weight_kg / 200`, scaled by the session length.
//! MET (Metabolic Equivalent of Task) is the intensity factor attached to
//! each exercise in the catalog.

use crate::models::WeightUnit;

const LB_TO_KG: f64 = 0.453592;

/// Estimate calories burned for a session.
///
/// Returns `None` when no positive body weight is configured — the caller
/// stores the record without an estimate rather than guessing. The result is
/// never negative and is rounded to one decimal place, matching what gets
/// persisted on workout records.
pub fn estimate_calories(
    met: f64,
    weight: Option<f64>,
    weight_unit: WeightUnit,
    duration_seconds: u32,
) -> Option<f64> {
    let weight = match weight {
        Some(w) if w > 0.0 => w,
        _ => return None,
    };

    let weight_kg = match weight_unit {
        WeightUnit::Kg => weight,
        WeightUnit::Lb => weight * LB_TO_KG,
    };

    let kcal_per_min = (met * 3.5 * weight_kg) / 200.0;
    let duration_minutes = f64::from(duration_seconds) / 60.0;
    let total_kcal = (kcal_per_min * duration_minutes).max(0.0);

    Some((total_kcal * 10.0).round() / 10.0)
}

/// Format a calorie estimate for display; missing estimates render as a
/// dash.
pub fn format_calories(calories: Option<f64>) -> String {
    match calories {
        Some(kcal) => format!("{:.1} kcal", kcal),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_without_weight_is_none() {
        assert_eq!(estimate_calories(8.0, None, WeightUnit::Kg, 600), None);
    }

    #[test]
    fn test_estimate_non_positive_weight_is_none() {
        assert_eq!(estimate_calories(8.0, Some(0.0), WeightUnit::Kg, 600), None);
        assert_eq!(
            estimate_calories(8.0, Some(-70.0), WeightUnit::Kg, 600),
            None
        );
    }

    #[test]
    fn test_estimate_kg() {
        // 8 MET × 3.5 × 70 kg / 200 = 9.8 kcal/min, × 10 min = 98.0
        let kcal = estimate_calories(8.0, Some(70.0), WeightUnit::Kg, 600);
        assert_eq!(kcal, Some(98.0));
    }

    #[test]
    fn test_estimate_lb_converts_to_kg() {
        let kg = estimate_calories(8.0, Some(70.0), WeightUnit::Kg, 600).unwrap();
        let lb = estimate_calories(8.0, Some(70.0 / LB_TO_KG), WeightUnit::Lb, 600).unwrap();
        assert!((kg - lb).abs() <= 0.1, "lb path should match kg path");
    }

    #[test]
    fn test_estimate_rounds_to_one_decimal() {
        let kcal = estimate_calories(3.3, Some(61.7), WeightUnit::Kg, 437).unwrap();
        assert_eq!((kcal * 10.0).round() / 10.0, kcal);
    }

    #[test]
    fn test_format_calories() {
        assert_eq!(format_calories(Some(98.0)), "98.0 kcal");
        assert_eq!(format_calories(None), "—");
    }
}

//! Cycle-over-cycle training-max progression.
//!
//! After a full cycle, each lift's TM moves up a fixed amount when the final
//! AMRAP set cleared the week-dependent rep threshold, holds when it merely
//! met the minimum, and resets to 90% when the minimum was missed.

use serde::{Deserialize, Serialize};

use super::rounding::RoundingPolicy;
use super::scheme::DELOAD_WEEK_INDEX;
use super::types::Units;

/// Whether a lift progresses on the upper-body (smaller) increment.
pub fn is_upper_body(lift_key: &str) -> bool {
    matches!(lift_key, "bench" | "press")
}

/// Standard per-cycle TM increment: 5 lb / 2.5 kg upper, 10 lb / 5 kg lower.
pub fn tm_increment(lift_key: &str, units: Units) -> f64 {
    let upper = is_upper_body(lift_key);
    match units {
        Units::Lb => {
            if upper {
                5.0
            } else {
                10.0
            }
        }
        Units::Kg => {
            if upper {
                2.5
            } else {
                5.0
            }
        }
    }
}

/// Minimum rep target of a week's AMRAP set (5+, 3+, 1+).
pub fn amrap_rep_target(week_index: usize) -> u32 {
    match week_index {
        0 => 5,
        1 => 3,
        2 => 1,
        _ => 5,
    }
}

/// Reps on the AMRAP set required before the TM moves up.
///
/// Deliberately above the bare minimum: 8+ on the 5s week, 5+ on the 3s week,
/// 3+ on the 1s week.
pub fn min_reps_for_progression(week_index: usize) -> u32 {
    match week_index {
        0 => 8,
        1 => 5,
        2 => 3,
        _ => 5,
    }
}

/// Outcome of a TM progression decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TmAction {
    /// Add the standard increment
    Progress,
    /// Keep the current TM
    Hold,
    /// Drop back to 90% of the current TM
    Reset,
}

/// A per-lift TM recommendation for the next cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmProgression {
    pub lift_key: String,
    pub current_tm: f64,
    pub amrap_reps: u32,
    pub action: TmAction,
    pub next_tm: f64,
    pub reason: String,
}

/// Decide the next cycle's TM for a lift from its last AMRAP performance.
pub fn progress_training_max(
    lift_key: &str,
    current_tm: f64,
    amrap_reps: u32,
    week_index: usize,
    rounding: &RoundingPolicy,
) -> TmProgression {
    // Deload AMRAPs don't exist; treat as the 5s week if callers pass one.
    let week_index = week_index.min(DELOAD_WEEK_INDEX - 1);
    let target = amrap_rep_target(week_index);
    let threshold = min_reps_for_progression(week_index);

    let (action, next_tm, reason) = if amrap_reps >= threshold {
        let increment = tm_increment(lift_key, rounding.units);
        (
            TmAction::Progress,
            current_tm + increment,
            format!("Strong AMRAP ({amrap_reps} reps) - increase TM by {increment} {}", rounding.units),
        )
    } else if amrap_reps < target {
        (
            TmAction::Reset,
            rounding.round(current_tm * 0.9),
            format!("Missed the {target}-rep minimum ({amrap_reps} reps) - reset TM to 90%"),
        )
    } else {
        (
            TmAction::Hold,
            current_tm,
            format!("Met the minimum but under {threshold} reps - hold current TM"),
        )
    };

    TmProgression {
        lift_key: lift_key.to_string(),
        current_tm,
        amrap_reps,
        action,
        next_tm,
        reason,
    }
}

/// Estimated 1RM from an AMRAP set (Epley-style, Wendler's coefficient).
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if !weight.is_finite() || weight <= 0.0 || reps == 0 {
        return 0.0;
    }
    weight * reps as f64 * 0.0333 + weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycle::types::RoundingMode;

    fn lb_rounding() -> RoundingPolicy {
        RoundingPolicy::new(5.0, RoundingMode::Nearest, Units::Lb)
    }

    #[test]
    fn test_increments_by_lift_class() {
        assert_eq!(tm_increment("bench", Units::Lb), 5.0);
        assert_eq!(tm_increment("press", Units::Kg), 2.5);
        assert_eq!(tm_increment("squat", Units::Lb), 10.0);
        assert_eq!(tm_increment("deadlift", Units::Kg), 5.0);
    }

    #[test]
    fn test_strong_amrap_progresses() {
        let p = progress_training_max("squat", 300.0, 9, 0, &lb_rounding());
        assert_eq!(p.action, TmAction::Progress);
        assert_eq!(p.next_tm, 310.0);
    }

    #[test]
    fn test_met_minimum_under_threshold_holds() {
        // 6 reps on the 5s week: minimum met, threshold (8) not
        let p = progress_training_max("squat", 300.0, 6, 0, &lb_rounding());
        assert_eq!(p.action, TmAction::Hold);
        assert_eq!(p.next_tm, 300.0);
    }

    #[test]
    fn test_missed_minimum_resets_to_ninety_percent() {
        let p = progress_training_max("bench", 225.0, 3, 0, &lb_rounding());
        assert_eq!(p.action, TmAction::Reset);
        // 225 * 0.9 = 202.5 -> 200 on the 5 lb grid
        assert_eq!(p.next_tm, 200.0);
    }

    #[test]
    fn test_week_thresholds() {
        assert_eq!(min_reps_for_progression(0), 8);
        assert_eq!(min_reps_for_progression(1), 5);
        assert_eq!(min_reps_for_progression(2), 3);
    }

    #[test]
    fn test_estimate_one_rep_max() {
        let e1rm = estimate_one_rep_max(255.0, 8);
        assert!((e1rm - 322.93).abs() < 0.01);
        assert_eq!(estimate_one_rep_max(0.0, 8), 0.0);
        assert_eq!(estimate_one_rep_max(255.0, 0), 0.0);
    }
}

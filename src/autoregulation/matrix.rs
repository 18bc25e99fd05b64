//! Soreness-by-performance set progression table.
//!
//! A 4x4 lookup over two bounded 0-3 buckets. Inputs are clamped once here
//! at the boundary; callers pass raw ratings.

use serde::{Deserialize, Serialize};

/// Set-count move prescribed by a progression cell.
///
/// Recovery is structurally distinct from a numeric delta: a recovery cell
/// means "run a recovery session", and [`SetAdjustment::set_change`]
/// deliberately reports it as 0 so naive arithmetic stays sane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetAdjustment {
    Hold,
    Add(u32),
    Reduce(u32),
    Recovery,
}

impl SetAdjustment {
    /// Numeric delta; recovery cells report 0 and must be handled by
    /// matching on the variant.
    pub fn set_change(&self) -> i32 {
        match self {
            SetAdjustment::Hold | SetAdjustment::Recovery => 0,
            SetAdjustment::Add(n) => *n as i32,
            SetAdjustment::Reduce(n) => -(*n as i32),
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            SetAdjustment::Hold => "maintain",
            SetAdjustment::Add(_) => "add_sets",
            SetAdjustment::Reduce(_) => "reduce_sets",
            SetAdjustment::Recovery => "recovery",
        }
    }
}

/// One cell of the progression table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressionCell {
    pub advice: &'static str,
    pub adjustment: SetAdjustment,
}

const ADD_1: &str = "Add 1 set next session";
const ADD_2: &str = "Add 2 sets next session";
const ADD_2_3: &str = "Add 2-3 sets next session";
const HOLD: &str = "Hold sets at current level";
const RECOVERY: &str = "Do recovery session";

const fn cell(advice: &'static str, adjustment: SetAdjustment) -> ProgressionCell {
    ProgressionCell { advice, adjustment }
}

/// Rows: soreness 0-3 (none/mild/moderate/high).
/// Columns: performance 0-3 (worse/same/better/much better).
const PROGRESSION_MATRIX: [[ProgressionCell; 4]; 4] = [
    [
        cell(ADD_1, SetAdjustment::Add(1)),
        cell(ADD_2, SetAdjustment::Add(2)),
        cell(ADD_2_3, SetAdjustment::Add(2)),
        cell(ADD_2_3, SetAdjustment::Add(3)),
    ],
    [
        cell(HOLD, SetAdjustment::Hold),
        cell(ADD_1, SetAdjustment::Add(1)),
        cell(ADD_2, SetAdjustment::Add(2)),
        cell(ADD_2_3, SetAdjustment::Add(2)),
    ],
    [
        cell(RECOVERY, SetAdjustment::Recovery),
        cell(HOLD, SetAdjustment::Hold),
        cell(HOLD, SetAdjustment::Hold),
        cell(ADD_1, SetAdjustment::Add(1)),
    ],
    [
        cell(RECOVERY, SetAdjustment::Recovery),
        cell(RECOVERY, SetAdjustment::Recovery),
        cell(RECOVERY, SetAdjustment::Recovery),
        cell(HOLD, SetAdjustment::Hold),
    ],
];

/// Look up the progression cell for raw soreness/performance ratings.
pub fn set_progression(soreness: u32, performance: u32) -> ProgressionCell {
    let row = soreness.min(3) as usize;
    let col = performance.min(3) as usize;
    PROGRESSION_MATRIX[row][col]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_and_improving_adds_most() {
        let cell = set_progression(0, 3);
        assert_eq!(cell.adjustment, SetAdjustment::Add(3));
        assert_eq!(cell.advice, "Add 2-3 sets next session");
    }

    #[test]
    fn test_no_soreness_worse_performance_adds_one() {
        assert_eq!(set_progression(0, 0).adjustment, SetAdjustment::Add(1));
    }

    #[test]
    fn test_high_soreness_forces_recovery() {
        for performance in 0..3 {
            assert_eq!(
                set_progression(3, performance).adjustment,
                SetAdjustment::Recovery
            );
        }
        // Much-better performance despite high soreness only holds
        assert_eq!(set_progression(3, 3).adjustment, SetAdjustment::Hold);
    }

    #[test]
    fn test_moderate_soreness_row() {
        assert_eq!(set_progression(2, 0).adjustment, SetAdjustment::Recovery);
        assert_eq!(set_progression(2, 1).adjustment, SetAdjustment::Hold);
        assert_eq!(set_progression(2, 2).adjustment, SetAdjustment::Hold);
        assert_eq!(set_progression(2, 3).adjustment, SetAdjustment::Add(1));
    }

    #[test]
    fn test_inputs_clamp_to_table_bounds() {
        assert_eq!(set_progression(99, 99).adjustment, SetAdjustment::Hold);
        assert_eq!(set_progression(99, 0).adjustment, SetAdjustment::Recovery);
    }

    #[test]
    fn test_recovery_reports_zero_numeric_delta() {
        assert_eq!(SetAdjustment::Recovery.set_change(), 0);
        assert_eq!(SetAdjustment::Reduce(2).set_change(), -2);
        assert_eq!(SetAdjustment::Add(2).set_change(), 2);
        assert_eq!(SetAdjustment::Recovery.action(), "recovery");
    }
}

//! Static percent/rep matrices for main work.

use super::rounding::RoundingPolicy;
use super::types::{LoadingOption, MainSet};

/// One slot of a week's percent ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemePoint {
    /// Percent of training max
    pub percent: f64,
    /// Base rep prescription
    pub reps: u32,
    /// Whether the set is open-ended ("N+")
    pub amrap: bool,
}

const fn point(percent: f64, reps: u32, amrap: bool) -> SchemePoint {
    SchemePoint {
        percent,
        reps,
        amrap,
    }
}

/// Week 4 is always the deload: fixed light triples of 5, never AMRAP.
const DELOAD_WEEK: [SchemePoint; 3] = [
    point(40.0, 5, false),
    point(50.0, 5, false),
    point(60.0, 5, false),
];

/// Loading option 1: the classic ladder starting at 65%.
const OPTION_ONE: [[SchemePoint; 3]; 4] = [
    [point(65.0, 5, false), point(75.0, 5, false), point(85.0, 5, true)],
    [point(70.0, 3, false), point(80.0, 3, false), point(90.0, 3, true)],
    [point(75.0, 5, false), point(85.0, 3, false), point(95.0, 1, true)],
    DELOAD_WEEK,
];

/// Loading option 2: heavier openers, same top sets.
const OPTION_TWO: [[SchemePoint; 3]; 4] = [
    [point(75.0, 5, false), point(80.0, 5, false), point(85.0, 5, true)],
    [point(80.0, 3, false), point(85.0, 3, false), point(90.0, 3, true)],
    [point(85.0, 5, false), point(90.0, 3, false), point(95.0, 1, true)],
    DELOAD_WEEK,
];

/// Index of the deload week (0-based).
pub const DELOAD_WEEK_INDEX: usize = 3;

/// Number of weeks in a full cycle.
pub const WEEKS_PER_CYCLE: usize = 4;

/// Look up the percent ladder for a loading option and week.
///
/// Week indexes are 0-based; anything past the deload week clamps to it.
pub fn week_scheme(option: LoadingOption, week_index: usize) -> &'static [SchemePoint; 3] {
    let table = match option {
        LoadingOption::One => &OPTION_ONE,
        LoadingOption::Two => &OPTION_TWO,
    };
    &table[week_index.min(DELOAD_WEEK_INDEX)]
}

/// Build the three main-work sets for a lift.
///
/// Returns the sets and whether the last one is AMRAP-eligible. A missing or
/// non-positive training max yields an empty list rather than an error.
pub fn build_main_sets_for_lift(
    tm: f64,
    week_index: usize,
    option: LoadingOption,
    rounding: &RoundingPolicy,
) -> (Vec<MainSet>, bool) {
    if tm <= 0.0 || !tm.is_finite() {
        return (Vec::new(), false);
    }

    let scheme = week_scheme(option, week_index);
    let amrap_on_last = week_index.min(DELOAD_WEEK_INDEX) != DELOAD_WEEK_INDEX;

    let sets = scheme
        .iter()
        .map(|p| MainSet {
            percent: p.percent,
            reps: p.reps,
            weight: rounding.round(tm * p.percent / 100.0),
            units: rounding.units,
            amrap: p.amrap && amrap_on_last,
        })
        .collect();

    (sets, amrap_on_last)
}

//! Weekly per-muscle set progression and the batch driver that applies it.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::fatigue::is_high_fatigue;
use super::stimulus::score_stimulus;
use super::RecoveryFeedback;
use crate::error::ConfigError;
use crate::state::TrainingState;
use crate::volume::landmarks::VolumeStatus;

/// Per-muscle decision from [`auto_set_increment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetIncrement {
    pub add: bool,
    pub delta: u32,
    pub reason: &'static str,
}

impl SetIncrement {
    fn hold(reason: &'static str) -> Self {
        Self {
            add: false,
            delta: 0,
            reason,
        }
    }

    fn add(delta: u32, reason: &'static str) -> Self {
        Self {
            add: true,
            delta,
            reason,
        }
    }
}

/// Decide this week's set increment for one muscle.
///
/// MRV and explicit recovery sessions always hold. A muscle sitting at or
/// below MEV gets a double increment (capped at 2); otherwise a low
/// stimulus with mild soreness and non-regressing performance earns one set.
pub fn auto_set_increment(
    muscle: &str,
    feedback: &RecoveryFeedback,
    state: &dyn TrainingState,
) -> Result<SetIncrement, ConfigError> {
    let landmarks = *state.landmarks(muscle)?;
    let current_sets = state.current_week_sets(muscle);
    let at_mev = current_sets <= landmarks.mev;
    let at_mrv = current_sets >= landmarks.mrv;

    if at_mrv {
        return Ok(SetIncrement::hold("At MRV"));
    }
    if feedback.recovery_session {
        return Ok(SetIncrement::hold("Recovery session needed"));
    }

    let stimulus = score_stimulus(&feedback.stimulus);
    let low_stimulus_good_recovery =
        stimulus.score <= 3 && feedback.soreness <= 1 && feedback.perf_change >= 0;

    if at_mev {
        return Ok(SetIncrement::add(2, "Starting from MEV"));
    }
    if low_stimulus_good_recovery {
        return Ok(SetIncrement::add(1, "Low stimulus with good recovery"));
    }

    Ok(SetIncrement::hold("No progression criteria met"))
}

/// One muscle's line in the weekly progression log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuscleProgressionEntry {
    pub previous_sets: u32,
    pub current_sets: u32,
    pub increment: u32,
    pub reason: &'static str,
    pub status: VolumeStatus,
    pub stimulus_score: u32,
}

/// Outcome of one weekly progression batch across all reported muscles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyProgressionReport {
    pub progression_log: BTreeMap<String, MuscleProgressionEntry>,
    pub mrv_hits: u32,
    pub deload_triggered: bool,
    pub recommendation: &'static str,
}

/// Apply one week of feedback across muscles: flag high-fatigue muscles as
/// MRV-equivalent hits, apply each muscle's set increment, then consult the
/// state's deload predicate once at the end.
pub fn process_weekly_volume_progression(
    weekly_feedback: &BTreeMap<String, RecoveryFeedback>,
    state: &mut dyn TrainingState,
) -> Result<WeeklyProgressionReport, ConfigError> {
    let mut progression_log = BTreeMap::new();
    let mut mrv_hits = 0u32;

    for (muscle, feedback) in weekly_feedback {
        let landmarks = *state.landmarks(muscle)?;
        let mut feedback = feedback.clone();

        if is_high_fatigue(muscle, &feedback, state) {
            // Treat like an MRV hit and force a recovery session
            state.hit_mrv(muscle);
            mrv_hits += 1;
            feedback.recovery_session = true;
            debug!(muscle = %muscle, "high fatigue, recording MRV-equivalent hit");
        }

        let increment = auto_set_increment(muscle, &feedback, state)?;
        if increment.add {
            state.add_sets(muscle, increment.delta as i32);
            debug!(
                muscle = %muscle,
                delta = increment.delta,
                reason = increment.reason,
                "added sets"
            );
        }

        if state.current_week_sets(muscle) >= landmarks.mrv {
            state.hit_mrv(muscle);
            mrv_hits += 1;
        }

        let previous_sets = match state.last_week_sets(muscle) {
            0 => landmarks.mev,
            sets => sets,
        };
        progression_log.insert(
            muscle.clone(),
            MuscleProgressionEntry {
                previous_sets,
                current_sets: state.current_week_sets(muscle),
                increment: increment.delta,
                reason: increment.reason,
                status: state.volume_status(muscle, None)?,
                stimulus_score: score_stimulus(&feedback.stimulus).score,
            },
        );
    }

    let deload_triggered = state.should_deload();
    if deload_triggered {
        state.start_deload();
        debug!("deload conditions met, starting deload phase");
    }

    Ok(WeeklyProgressionReport {
        progression_log,
        mrv_hits,
        deload_triggered,
        recommendation: if deload_triggered {
            "Deload phase initiated"
        } else {
            "Continue progression"
        },
    })
}

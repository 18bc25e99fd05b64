//! High-fatigue detection from the stimulus-to-fatigue ratio.

use super::RecoveryFeedback;
use crate::state::TrainingState;

fn clamp_rating(value: u32) -> u32 {
    value.min(3)
}

/// Stimulus-to-fatigue ratio for a session's feedback.
///
/// Fatigue is soreness + joint ache + a 2-point penalty when performance
/// regressed; stimulus is pump + disruption (mind-muscle connection carries
/// little fatigue signal). The denominator falls back to 1 only when the
/// fatigue total is exactly zero.
pub fn stimulus_to_fatigue_ratio(feedback: &RecoveryFeedback) -> f64 {
    let soreness = clamp_rating(feedback.soreness);
    let joint_ache = clamp_rating(feedback.joint_ache);
    let perf_penalty = if feedback.perf_change < 0 { 2 } else { 0 };

    let fatigue = soreness + joint_ache + perf_penalty;
    let stimulus = clamp_rating(feedback.pump) + clamp_rating(feedback.disruption);

    let denominator = if fatigue == 0 { 1 } else { fatigue };
    stimulus as f64 / denominator as f64
}

/// True when a muscle should be treated as over-fatigued: the SFR has
/// dropped to 1 or below, or the last working load regressed against the
/// recorded baseline.
pub fn is_high_fatigue(
    muscle: &str,
    feedback: &RecoveryFeedback,
    state: &dyn TrainingState,
) -> bool {
    let sfr = stimulus_to_fatigue_ratio(feedback);
    let strength_drop = state.rep_strength_drop(muscle, feedback.last_load);
    sfr <= 1.0 || strength_drop
}

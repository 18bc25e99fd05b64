//! Per-muscle weekly volume landmarks and status classification.
//!
//! Each muscle carries four ascending set-count landmarks (MV, MEV, MAV, MRV)
//! that bucket the current weekly volume into a status used by the
//! progression and frequency logic.

use serde::{Deserialize, Serialize};

use crate::autoregulation::matrix::{set_progression, SetAdjustment};
use crate::autoregulation::stimulus::score_stimulus;
use crate::autoregulation::RecoveryFeedback;
use crate::error::{ConfigError, ValidationWarning};
use crate::state::TrainingState;

/// Weekly set-count landmarks for one muscle group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeLandmarks {
    /// Maintenance volume
    pub mv: u32,
    /// Minimum effective volume
    pub mev: u32,
    /// Maximum adaptive volume
    pub mav: u32,
    /// Maximum recoverable volume
    pub mrv: u32,
}

impl VolumeLandmarks {
    pub fn new(mv: u32, mev: u32, mav: u32, mrv: u32) -> Self {
        Self { mv, mev, mav, mrv }
    }

    /// Landmarks must be ordered MV <= MEV <= MAV <= MRV.
    pub fn validate(&self, muscle: &str) -> Result<(), ConfigError> {
        if self.mv <= self.mev && self.mev <= self.mav && self.mav <= self.mrv {
            Ok(())
        } else {
            Err(ConfigError::InvalidLandmarks {
                muscle: muscle.to_string(),
                detail: format!(
                    "expected MV <= MEV <= MAV <= MRV, got {}/{}/{}/{}",
                    self.mv, self.mev, self.mav, self.mrv
                ),
            })
        }
    }
}

/// Where a weekly set count sits relative to the landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolumeStatus {
    UnderMinimum,
    Maintenance,
    Optimal,
    High,
    Maximum,
}

impl VolumeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VolumeStatus::UnderMinimum => "under-minimum",
            VolumeStatus::Maintenance => "maintenance",
            VolumeStatus::Optimal => "optimal",
            VolumeStatus::High => "high",
            VolumeStatus::Maximum => "maximum",
        }
    }

    /// How urgently the status deserves the lifter's attention.
    pub fn urgency(&self) -> Urgency {
        match self {
            VolumeStatus::UnderMinimum | VolumeStatus::Maximum => Urgency::High,
            VolumeStatus::Maintenance => Urgency::Low,
            VolumeStatus::Optimal => Urgency::Normal,
            VolumeStatus::High => Urgency::Medium,
        }
    }

    /// Chart color token for this zone.
    pub fn color(&self) -> &'static str {
        match self {
            VolumeStatus::UnderMinimum | VolumeStatus::Maximum => "#ff4444",
            VolumeStatus::Maintenance => "#ffaa00",
            VolumeStatus::Optimal => "#44ff44",
            VolumeStatus::High => "#ffff44",
        }
    }
}

impl std::fmt::Display for VolumeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Normal,
    Medium,
    High,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

/// Bucket a weekly set count against the landmarks. Lower bounds are
/// inclusive: `sets == MEV` is already `Optimal`, `sets == MRV` is `Maximum`.
pub fn volume_status(landmarks: &VolumeLandmarks, sets: u32) -> VolumeStatus {
    if sets < landmarks.mv {
        VolumeStatus::UnderMinimum
    } else if sets < landmarks.mev {
        VolumeStatus::Maintenance
    } else if sets < landmarks.mav {
        VolumeStatus::Optimal
    } else if sets < landmarks.mrv {
        VolumeStatus::High
    } else {
        VolumeStatus::Maximum
    }
}

/// Full status report for a muscle's current weekly volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeAnalysis {
    pub muscle: String,
    pub current_sets: u32,
    pub landmarks: VolumeLandmarks,
    pub status: VolumeStatus,
    /// Current sets as a rounded percentage of MRV
    pub percentage: u32,
    pub recommendation: String,
    pub urgency: Urgency,
    pub color: &'static str,
}

/// Classify a muscle's weekly volume against its landmarks.
///
/// `sets` overrides the state's current-week count when supplied.
pub fn analyze_volume_status(
    state: &dyn TrainingState,
    muscle: &str,
    sets: Option<u32>,
) -> Result<VolumeAnalysis, ConfigError> {
    let landmarks = *state.landmarks(muscle)?;
    let current_sets = sets.unwrap_or_else(|| state.current_week_sets(muscle));
    let status = volume_status(&landmarks, current_sets);

    let percentage = if landmarks.mrv == 0 {
        0
    } else {
        (current_sets as f64 / landmarks.mrv as f64 * 100.0).round() as u32
    };

    let recommendation = match status {
        VolumeStatus::UnderMinimum => {
            format!("Below MV ({}). Increase volume significantly.", landmarks.mv)
        }
        VolumeStatus::Maintenance => format!(
            "In maintenance zone ({}-{}). Consider increasing for growth.",
            landmarks.mv, landmarks.mev
        ),
        VolumeStatus::Optimal => format!(
            "In optimal zone ({}-{}). Continue progressive overload.",
            landmarks.mev, landmarks.mav
        ),
        VolumeStatus::High => format!(
            "High volume zone ({}-{}). Monitor recovery closely.",
            landmarks.mav, landmarks.mrv
        ),
        VolumeStatus::Maximum => {
            format!("At/above MRV ({}). Deload recommended.", landmarks.mrv)
        }
    };

    Ok(VolumeAnalysis {
        muscle: muscle.to_string(),
        current_sets,
        landmarks,
        status,
        percentage,
        recommendation,
        urgency: status.urgency(),
        color: status.color(),
    })
}

/// Range-check a proposed weekly set count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeValidation {
    pub is_valid: bool,
    pub warning: Option<ValidationWarning>,
    pub proposed_sets: i32,
    pub landmarks: VolumeLandmarks,
}

/// Valid iff `0 <= proposed <= 1.2 * MRV`; warnings are advisory and
/// callers may still apply the value.
pub fn validate_volume_input(
    state: &dyn TrainingState,
    muscle: &str,
    proposed_sets: i32,
) -> Result<VolumeValidation, ConfigError> {
    let landmarks = *state.landmarks(muscle)?;
    let is_valid = proposed_sets >= 0 && proposed_sets as f64 <= landmarks.mrv as f64 * 1.2;

    let warning = if proposed_sets < 0 {
        Some("Sets cannot be negative".to_string())
    } else if proposed_sets as u32 > landmarks.mrv {
        Some(format!("Above MRV ({}). Consider deload.", landmarks.mrv))
    } else if (proposed_sets as u32) < landmarks.mv {
        Some(format!(
            "Below MV ({}). May not be sufficient for adaptation.",
            landmarks.mv
        ))
    } else {
        None
    };

    Ok(VolumeValidation {
        is_valid,
        warning,
        proposed_sets,
        landmarks,
    })
}

/// Recovery-session set prescription for a muscle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecoveryVolume {
    pub muscle: String,
    pub recommended_sets: u32,
    pub reasoning: &'static str,
    pub landmarks: VolumeLandmarks,
    /// Recommended sets as a rounded percentage of MEV
    pub percentage: u32,
}

/// Reduced set count for a recovery session, scaled down further when the
/// lifter is ill.
pub fn calculate_recovery_volume(
    state: &dyn TrainingState,
    muscle: &str,
    has_illness: bool,
) -> Result<RecoveryVolume, ConfigError> {
    let landmarks = *state.landmarks(muscle)?;
    let recommended_sets = state.recovery_volume(muscle, has_illness)?;
    let percentage = if landmarks.mev == 0 {
        0
    } else {
        (recommended_sets as f64 / landmarks.mev as f64 * 100.0).round() as u32
    };

    Ok(RecoveryVolume {
        muscle: muscle.to_string(),
        recommended_sets,
        reasoning: if has_illness {
            "illness adjustment"
        } else {
            "standard recovery"
        },
        landmarks,
        percentage,
    })
}

/// Next-week set recommendation combining volume status, stimulus score,
/// and the soreness/performance progression table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeProgression {
    pub muscle: String,
    pub current_sets: u32,
    pub projected_sets: u32,
    pub set_change: i32,
    pub advice: String,
    pub stimulus_score: u32,
    pub volume_status: VolumeStatus,
    pub target_rir: f64,
    pub deload_recommended: bool,
}

/// Weekly progression recommendation for one muscle.
///
/// Landmark overrides beat the raw table: a `Maximum` muscle is never told
/// to add sets, an `UnderMinimum` muscle always adds two, and a recovery
/// cell is resolved into a concrete recovery-volume target.
pub fn get_volume_progression(
    state: &dyn TrainingState,
    muscle: &str,
    feedback: &RecoveryFeedback,
) -> Result<VolumeProgression, ConfigError> {
    let current_sets = state.current_week_sets(muscle);
    let analysis = analyze_volume_status(state, muscle, None)?;
    let stimulus = score_stimulus(&feedback.stimulus);
    let cell = set_progression(feedback.soreness, feedback.perf_change.max(0) as u32);

    let mut set_change = cell.adjustment.set_change();
    let mut advice = cell.advice.to_string();

    if analysis.status == VolumeStatus::Maximum && set_change > 0 {
        set_change = 0;
        advice = "At MRV limit. Hold sets or consider deload.".to_string();
    }

    if analysis.status == VolumeStatus::UnderMinimum && set_change <= 0 {
        set_change = 2;
        advice = "Below minimum volume. Add sets regardless of fatigue.".to_string();
    }

    if cell.adjustment == SetAdjustment::Recovery {
        let recovery = calculate_recovery_volume(state, muscle, feedback.has_illness)?;
        set_change = recovery.recommended_sets as i32 - current_sets as i32;
        advice = format!(
            "Recovery session: {} sets ({})",
            recovery.recommended_sets, recovery.reasoning
        );
    }

    let projected_sets = (current_sets as i32 + set_change).max(0) as u32;

    Ok(VolumeProgression {
        muscle: muscle.to_string(),
        current_sets,
        projected_sets,
        set_change,
        advice,
        stimulus_score: stimulus.score,
        volume_status: analysis.status,
        target_rir: state.target_rir(),
        deload_recommended: state.should_deload(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoregulation::StimulusFeedback;
    use crate::state::MemoryTrainingState;

    fn chest() -> VolumeLandmarks {
        VolumeLandmarks::new(4, 6, 16, 22)
    }

    #[test]
    fn test_status_boundaries_are_lower_inclusive() {
        let lm = chest();
        assert_eq!(volume_status(&lm, 3), VolumeStatus::UnderMinimum);
        assert_ne!(volume_status(&lm, 4), VolumeStatus::UnderMinimum);
        assert_eq!(volume_status(&lm, 4), VolumeStatus::Maintenance);
        assert_eq!(volume_status(&lm, 6), VolumeStatus::Optimal);
        assert_eq!(volume_status(&lm, 16), VolumeStatus::High);
        assert_eq!(volume_status(&lm, 22), VolumeStatus::Maximum);
        assert_eq!(volume_status(&lm, 30), VolumeStatus::Maximum);
    }

    #[test]
    fn test_landmark_ordering_validation() {
        assert!(chest().validate("Chest").is_ok());
        let bad = VolumeLandmarks::new(10, 6, 16, 22);
        assert!(bad.validate("Chest").is_err());
    }

    #[test]
    fn test_analyze_percentage_and_urgency() {
        let state = MemoryTrainingState::new();
        let analysis = analyze_volume_status(&state, "Chest", Some(10)).unwrap();
        assert_eq!(analysis.status, VolumeStatus::Optimal);
        assert_eq!(analysis.percentage, 45); // round(10/22*100)
        assert_eq!(analysis.urgency, Urgency::Normal);
    }

    #[test]
    fn test_unknown_muscle_errors() {
        let state = MemoryTrainingState::new();
        assert!(analyze_volume_status(&state, "Wings", None).is_err());
    }

    #[test]
    fn test_validate_volume_input_ranges() {
        let state = MemoryTrainingState::new();
        let ok = validate_volume_input(&state, "Chest", 10).unwrap();
        assert!(ok.is_valid);
        assert!(ok.warning.is_none());

        let negative = validate_volume_input(&state, "Chest", -1).unwrap();
        assert!(!negative.is_valid);
        assert_eq!(negative.warning.as_deref(), Some("Sets cannot be negative"));

        // 20% over MRV is still valid but warned
        let over = validate_volume_input(&state, "Chest", 25).unwrap();
        assert!(over.is_valid);
        assert!(over.warning.as_deref().unwrap_or("").contains("Above MRV"));

        let way_over = validate_volume_input(&state, "Chest", 27).unwrap();
        assert!(!way_over.is_valid);
    }

    #[test]
    fn test_progression_mrv_override_forces_hold() {
        let mut state = MemoryTrainingState::new();
        state.set_weekly_sets("Chest", 22);
        // soreness 0 / perf 2 would normally add 2 sets
        let feedback = RecoveryFeedback {
            soreness: 0,
            perf_change: 2,
            ..RecoveryFeedback::default()
        };
        let progression = get_volume_progression(&state, "Chest", &feedback).unwrap();
        assert_eq!(progression.set_change, 0);
        assert_eq!(progression.advice, "At MRV limit. Hold sets or consider deload.");
        assert_eq!(progression.projected_sets, 22);
    }

    #[test]
    fn test_progression_under_minimum_override_adds_two() {
        let mut state = MemoryTrainingState::new();
        state.set_weekly_sets("Chest", 2);
        // soreness 1 / perf 0 is a hold cell
        let feedback = RecoveryFeedback {
            soreness: 1,
            perf_change: 0,
            ..RecoveryFeedback::default()
        };
        let progression = get_volume_progression(&state, "Chest", &feedback).unwrap();
        assert_eq!(progression.set_change, 2);
        assert_eq!(progression.projected_sets, 4);
    }

    #[test]
    fn test_progression_recovery_cell_targets_recovery_volume() {
        let mut state = MemoryTrainingState::new();
        state.set_weekly_sets("Chest", 15);
        let feedback = RecoveryFeedback {
            soreness: 3,
            perf_change: 0,
            ..RecoveryFeedback::default()
        };
        let progression = get_volume_progression(&state, "Chest", &feedback).unwrap();
        // Chest recovery volume: round((6+22)/2) - 1 = 13
        assert_eq!(progression.projected_sets, 13);
        assert_eq!(progression.set_change, -2);
        assert!(progression.advice.starts_with("Recovery session: 13 sets"));
    }

    #[test]
    fn test_projected_sets_never_negative() {
        let mut state = MemoryTrainingState::new();
        state.set_weekly_sets("Neck", 0);
        let feedback = RecoveryFeedback {
            soreness: 0,
            perf_change: 0,
            stimulus: StimulusFeedback {
                mmc: 2,
                pump: 2,
                disruption: 2,
            },
            ..RecoveryFeedback::default()
        };
        let progression = get_volume_progression(&state, "Neck", &feedback).unwrap();
        assert!(progression.projected_sets <= progression.current_sets + 3);
    }
}

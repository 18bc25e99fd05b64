//! Session frequency analysis from recovery timing and weekly volume.

use serde::{Deserialize, Serialize};

use super::landmarks::{Urgency, VolumeStatus};
use crate::error::ConfigError;
use crate::state::TrainingState;

/// Frequency move implied by the recovery-to-gap ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyAction {
    IncreaseFrequency,
    DecreaseFrequency,
    Maintain,
    ImproveRecovery,
}

impl FrequencyAction {
    pub fn label(&self) -> &'static str {
        match self {
            FrequencyAction::IncreaseFrequency => "increase_frequency",
            FrequencyAction::DecreaseFrequency => "decrease_frequency",
            FrequencyAction::Maintain => "maintain",
            FrequencyAction::ImproveRecovery => "improve_recovery",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyAnalysis {
    pub soreness_recovery_days: u32,
    pub current_session_gap: u32,
    /// Recovery days over session gap, rounded to 2 decimals
    pub recovery_ratio: f64,
    pub recommendation: String,
    pub action: FrequencyAction,
    pub frequency_adjustment: i32,
    pub urgency: Urgency,
    pub muscle: Option<String>,
}

/// Compare how long soreness lasts against how often the muscle is trained.
///
/// Healing well before the next session suggests adding a session; still
/// being sore when it arrives suggests a rest day. Landmark status can
/// override either suggestion: a muscle at MRV never increases frequency,
/// and an under-minimum muscle fixes recovery instead of training less.
pub fn analyze_frequency(
    state: &dyn TrainingState,
    soreness_recovery_days: i32,
    session_gap_days: i32,
    muscle: Option<&str>,
) -> Result<FrequencyAnalysis, ConfigError> {
    let recovery_days = soreness_recovery_days.max(0) as u32;
    let session_gap = session_gap_days.max(1) as u32;
    let recovery_ratio = recovery_days as f64 / session_gap as f64;

    let (mut recommendation, mut action, mut frequency_adjustment, urgency) =
        if recovery_ratio < 0.7 {
            (
                "You heal early - add one session per week".to_string(),
                FrequencyAction::IncreaseFrequency,
                1,
                Urgency::Medium,
            )
        } else if recovery_ratio > 1.3 {
            (
                "Recovery lags - insert an extra rest day".to_string(),
                FrequencyAction::DecreaseFrequency,
                -1,
                Urgency::High,
            )
        } else {
            (
                "Frequency is optimal".to_string(),
                FrequencyAction::Maintain,
                0,
                Urgency::Normal,
            )
        };

    if let Some(muscle) = muscle {
        let status = state.volume_status(muscle, None)?;

        if status == VolumeStatus::Maximum && action == FrequencyAction::IncreaseFrequency {
            recommendation = "At MRV - maintain frequency despite early recovery".to_string();
            action = FrequencyAction::Maintain;
            frequency_adjustment = 0;
        }

        if status == VolumeStatus::UnderMinimum && action == FrequencyAction::DecreaseFrequency {
            recommendation =
                "Below MV - consider recovery methods instead of reducing frequency".to_string();
            action = FrequencyAction::ImproveRecovery;
            frequency_adjustment = 0;
        }
    }

    Ok(FrequencyAnalysis {
        soreness_recovery_days: recovery_days,
        current_session_gap: session_gap,
        recovery_ratio: (recovery_ratio * 100.0).round() / 100.0,
        recommendation,
        action,
        frequency_adjustment,
        urgency,
        muscle: muscle.map(str::to_string),
    })
}

/// How readily the lifter recovers between sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryCapacity {
    Low,
    #[default]
    Normal,
    High,
}

impl RecoveryCapacity {
    fn multiplier(&self) -> f64 {
        match self {
            RecoveryCapacity::Low => 0.8,
            RecoveryCapacity::Normal => 1.0,
            RecoveryCapacity::High => 1.2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecoveryCapacity::Low => "low",
            RecoveryCapacity::Normal => "normal",
            RecoveryCapacity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingAge {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl TrainingAge {
    /// Allowed weekly session range for this experience level.
    fn frequency_range(&self) -> (u32, u32) {
        match self {
            TrainingAge::Beginner => (2, 3),
            TrainingAge::Intermediate => (2, 4),
            TrainingAge::Advanced => (3, 5),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrainingAge::Beginner => "beginner",
            TrainingAge::Intermediate => "intermediate",
            TrainingAge::Advanced => "advanced",
        }
    }
}

/// Scheduling constraints for [`calculate_optimal_frequency`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrequencyConstraints {
    pub available_days: u32,
    /// Weekly sets; falls back to the state's current count when absent
    pub current_volume: Option<u32>,
    pub recovery_capacity: RecoveryCapacity,
    pub training_age: TrainingAge,
}

impl Default for FrequencyConstraints {
    fn default() -> Self {
        Self {
            available_days: 6,
            current_volume: None,
            recovery_capacity: RecoveryCapacity::Normal,
            training_age: TrainingAge::Intermediate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyAlternatives {
    pub conservative: u32,
    pub aggressive: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimalFrequency {
    pub muscle: String,
    pub recommended_frequency: u32,
    pub sets_per_session: u32,
    pub total_volume: u32,
    pub reasoning: Vec<String>,
    pub alternatives: FrequencyAlternatives,
}

/// Weekly session count for a muscle from its volume, recovery capacity,
/// training age, and available days.
///
/// Higher volumes split across more sessions (roughly 6 sets per session
/// at MAV and above, 8 between MEV and MAV, 10 below MEV), scaled by
/// recovery capacity and clamped into the training-age range.
pub fn calculate_optimal_frequency(
    state: &dyn TrainingState,
    muscle: &str,
    constraints: &FrequencyConstraints,
) -> Result<OptimalFrequency, ConfigError> {
    let landmarks = *state.landmarks(muscle)?;
    let volume = constraints
        .current_volume
        .unwrap_or_else(|| state.current_week_sets(muscle));

    let volume_frequency = if volume >= landmarks.mav {
        (volume as f64 / 6.0).ceil().min(4.0) as u32
    } else if volume >= landmarks.mev {
        (volume as f64 / 8.0).ceil().min(3.0) as u32
    } else {
        ((volume as f64 / 10.0).ceil() as u32).max(2)
    };

    let adjusted =
        (volume_frequency as f64 * constraints.recovery_capacity.multiplier()).round() as u32;

    let (age_min, age_max) = constraints.training_age.frequency_range();
    let recommended = adjusted
        .min(age_max)
        .min(constraints.available_days)
        .max(age_min);

    let sets_per_session = (volume as f64 / recommended as f64).ceil() as u32;

    Ok(OptimalFrequency {
        muscle: muscle.to_string(),
        recommended_frequency: recommended,
        sets_per_session,
        total_volume: volume,
        reasoning: vec![
            format!("{volume} weekly sets"),
            format!("{} recovery capacity", constraints.recovery_capacity.label()),
            format!("{} training age", constraints.training_age.label()),
            format!("{} available days", constraints.available_days),
        ],
        alternatives: FrequencyAlternatives {
            conservative: recommended.saturating_sub(1).max(2),
            aggressive: (recommended + 1).min(constraints.available_days),
        },
    })
}

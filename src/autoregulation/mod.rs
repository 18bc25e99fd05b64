//! Volume autoregulation: stimulus scoring, the soreness/performance
//! progression table, fatigue flagging, and the weekly advisor that ties
//! them together against a training state.

pub mod advisor;
pub mod fatigue;
pub mod matrix;
pub mod stimulus;

pub use advisor::{
    auto_set_increment, process_weekly_volume_progression, MuscleProgressionEntry, SetIncrement,
    WeeklyProgressionReport,
};
pub use fatigue::{is_high_fatigue, stimulus_to_fatigue_ratio};
pub use matrix::{set_progression, ProgressionCell, SetAdjustment};
pub use stimulus::{score_stimulus, StimulusAction, StimulusFeedback, StimulusScore};

use serde::{Deserialize, Serialize};

/// Post-session recovery feedback for one muscle. Ratings run 0-3;
/// `perf_change` is negative when performance regressed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryFeedback {
    #[serde(default)]
    pub soreness: u32,
    #[serde(default)]
    pub joint_ache: u32,
    #[serde(default)]
    pub perf_change: i32,
    #[serde(default)]
    pub pump: u32,
    #[serde(default)]
    pub disruption: u32,
    /// Session-level stimulus ratings, scored separately
    #[serde(default)]
    pub stimulus: StimulusFeedback,
    /// Top working-set load, for strength-regression checks
    #[serde(default)]
    pub last_load: Option<f64>,
    #[serde(default)]
    pub has_illness: bool,
    /// Set when the next session for this muscle should be a recovery one
    #[serde(default)]
    pub recovery_session: bool,
}

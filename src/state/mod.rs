//! Mutable training state consumed by the progression engines.
//!
//! The engines never touch a global: every advisor and tracker call takes an
//! explicit state handle through the [`TrainingState`] trait, so callers own
//! where the state lives and how it persists.

pub mod memory;

pub use memory::MemoryTrainingState;

use crate::error::ConfigError;
use crate::volume::landmarks::{VolumeLandmarks, VolumeStatus};

/// State handle the autoregulation engines read from and write to.
///
/// One weekly progression batch calls `hit_mrv`/`add_sets` at most once per
/// muscle and `start_deload` at most once; callers serialize batches.
pub trait TrainingState {
    /// Landmark lookup; unknown muscles are a configuration error.
    fn landmarks(&self, muscle: &str) -> Result<&VolumeLandmarks, ConfigError>;

    /// All tracked muscles in a stable order.
    fn muscles(&self) -> Vec<String>;

    fn current_week_sets(&self, muscle: &str) -> u32;
    fn last_week_sets(&self, muscle: &str) -> u32;

    /// Bucket a set count (current-week when `None`) against the landmarks.
    fn volume_status(&self, muscle: &str, sets: Option<u32>) -> Result<VolumeStatus, ConfigError>;

    /// Chart color token for a set count; opaque to the engines.
    fn volume_color(&self, muscle: &str, sets: Option<u32>) -> Result<&'static str, ConfigError>;

    /// Recovery-session set target for a muscle.
    fn recovery_volume(&self, muscle: &str, has_illness: bool) -> Result<u32, ConfigError>;

    /// Target reps-in-reserve for the current mesocycle week.
    fn target_rir(&self) -> f64;

    fn should_deload(&self) -> bool;
    fn start_deload(&mut self);

    /// Record that a muscle reached (or was treated as reaching) MRV.
    fn hit_mrv(&mut self, muscle: &str);

    /// Adjust a muscle's current-week sets; the result never drops below 0.
    fn add_sets(&mut self, muscle: &str, delta: i32);

    fn consecutive_mrv_weeks(&self) -> u32;
    fn week_no(&self) -> u32;
    fn meso_len(&self) -> u32;
    fn muscles_needing_recovery(&self) -> u32;

    /// True when `last_load` regressed materially against the muscle's
    /// recorded baseline.
    fn rep_strength_drop(&self, muscle: &str, last_load: Option<f64>) -> bool;
}

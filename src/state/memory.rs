//! In-memory [`TrainingState`] implementation with stock landmark defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TrainingState;
use crate::error::ConfigError;
use crate::volume::landmarks::{volume_status, VolumeLandmarks, VolumeStatus};

const START_RIR: f64 = 3.0;
const END_RIR: f64 = 0.5;
const DEFAULT_MESO_LEN: u32 = 4;
/// Default baseline top-set load (kg) before any session is recorded.
const DEFAULT_BASELINE_LOAD: f64 = 100.0;
/// A last load under 97% of baseline counts as a strength regression.
const STRENGTH_DROP_THRESHOLD: f64 = 0.97;

/// Stock weekly set-count landmarks per muscle group.
fn default_landmarks() -> BTreeMap<String, VolumeLandmarks> {
    let table = [
        ("Abs", VolumeLandmarks::new(0, 6, 16, 25)),
        ("Back", VolumeLandmarks::new(6, 10, 20, 25)),
        ("Biceps", VolumeLandmarks::new(4, 6, 14, 20)),
        ("Calves", VolumeLandmarks::new(6, 8, 16, 22)),
        ("Chest", VolumeLandmarks::new(4, 6, 16, 22)),
        ("Forearms", VolumeLandmarks::new(2, 4, 10, 16)),
        ("Glutes", VolumeLandmarks::new(0, 2, 12, 25)),
        ("Hamstrings", VolumeLandmarks::new(4, 6, 16, 20)),
        ("Neck", VolumeLandmarks::new(0, 2, 8, 12)),
        ("Quads", VolumeLandmarks::new(6, 10, 16, 20)),
        ("Shoulders", VolumeLandmarks::new(4, 8, 16, 20)),
        ("Traps", VolumeLandmarks::new(2, 4, 12, 16)),
        ("Triceps", VolumeLandmarks::new(4, 6, 14, 18)),
    ];
    table
        .into_iter()
        .map(|(muscle, lm)| (muscle.to_string(), lm))
        .collect()
}

/// Muscles whose fatigue-driven MRV hits weigh extra in the deload decision.
const MAJOR_MUSCLES: [&str; 4] = ["Chest", "Back", "Quads", "Shoulders"];

/// Plain in-memory training state, one instance per lifter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryTrainingState {
    volume_landmarks: BTreeMap<String, VolumeLandmarks>,
    current_week_sets: BTreeMap<String, u32>,
    last_week_sets: BTreeMap<String, u32>,
    /// Week-1 top-set loads used for strength-regression checks
    baseline_strength: BTreeMap<String, f64>,
    week_no: u32,
    meso_len: u32,
    block_no: u32,
    deload_phase: bool,
    load_reduction: f64,
    consecutive_mrv_weeks: u32,
    recovery_sessions_this_week: u32,
    total_muscles_needing_recovery: u32,
}

impl Default for MemoryTrainingState {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTrainingState {
    /// State with the stock landmark table, every muscle starting at MEV.
    pub fn new() -> Self {
        // Default table is ordered by construction, no validation needed.
        Self::from_landmarks_unchecked(default_landmarks())
    }

    /// State with a custom landmark table; rejects mis-ordered landmarks.
    pub fn with_landmarks(
        landmarks: BTreeMap<String, VolumeLandmarks>,
    ) -> Result<Self, ConfigError> {
        for (muscle, lm) in &landmarks {
            lm.validate(muscle)?;
        }
        Ok(Self::from_landmarks_unchecked(landmarks))
    }

    fn from_landmarks_unchecked(landmarks: BTreeMap<String, VolumeLandmarks>) -> Self {
        let current_week_sets: BTreeMap<String, u32> = landmarks
            .iter()
            .map(|(muscle, lm)| (muscle.clone(), lm.mev))
            .collect();
        let baseline_strength = landmarks
            .keys()
            .map(|muscle| (muscle.clone(), DEFAULT_BASELINE_LOAD))
            .collect();

        Self {
            last_week_sets: current_week_sets.clone(),
            current_week_sets,
            baseline_strength,
            volume_landmarks: landmarks,
            week_no: 1,
            meso_len: DEFAULT_MESO_LEN,
            block_no: 1,
            deload_phase: false,
            load_reduction: 1.0,
            consecutive_mrv_weeks: 0,
            recovery_sessions_this_week: 0,
            total_muscles_needing_recovery: 0,
        }
    }

    pub fn set_meso_len(&mut self, weeks: u32) {
        self.meso_len = weeks.max(2);
    }

    pub fn block_no(&self) -> u32 {
        self.block_no
    }

    pub fn in_deload_phase(&self) -> bool {
        self.deload_phase
    }

    /// Intensity multiplier for the current phase (0.5 during deload).
    pub fn load_reduction(&self) -> f64 {
        self.load_reduction
    }

    /// Overwrite a muscle's current-week set count.
    pub fn set_weekly_sets(&mut self, muscle: &str, sets: u32) {
        if let Some(entry) = self.current_week_sets.get_mut(muscle) {
            *entry = sets;
        }
    }

    /// Record a baseline top-set load, typically the week-1 top set.
    pub fn set_baseline_strength(&mut self, muscle: &str, load: f64) {
        if load > 0.0 && load.is_finite() {
            self.baseline_strength.insert(muscle.to_string(), load);
        }
    }

    /// Mark one explicitly-programmed recovery session this week.
    pub fn record_recovery_session(&mut self) {
        self.recovery_sessions_this_week += 1;
    }

    /// Reset every muscle back to MEV.
    pub fn reset_week(&mut self) {
        for (muscle, lm) in &self.volume_landmarks {
            if let Some(entry) = self.current_week_sets.get_mut(muscle) {
                *entry = lm.mev;
            }
        }
    }

    /// Close out the current week: snapshot set counts, track consecutive
    /// MRV weeks, advance counters, and roll the mesocycle over when done.
    pub fn advance_week(&mut self) {
        self.last_week_sets = self.current_week_sets.clone();

        let any_at_mrv = self
            .volume_landmarks
            .iter()
            .any(|(muscle, lm)| self.current_week_sets.get(muscle).copied().unwrap_or(0) >= lm.mrv);
        if any_at_mrv {
            self.consecutive_mrv_weeks += 1;
        } else {
            self.consecutive_mrv_weeks = 0;
        }

        self.week_no += 1;

        // Deload lasts one week
        if self.deload_phase {
            self.deload_phase = false;
            self.load_reduction = 1.0;
        }

        if self.week_no > self.meso_len {
            self.week_no = 1;
            self.block_no += 1;
            self.consecutive_mrv_weeks = 0;
        }

        self.recovery_sessions_this_week = 0;
        self.total_muscles_needing_recovery = 0;
    }

    fn at_mrv(&self, muscle: &str) -> bool {
        match self.volume_landmarks.get(muscle) {
            Some(lm) => self.current_week_sets.get(muscle).copied().unwrap_or(0) >= lm.mrv,
            None => false,
        }
    }
}

impl TrainingState for MemoryTrainingState {
    fn landmarks(&self, muscle: &str) -> Result<&VolumeLandmarks, ConfigError> {
        self.volume_landmarks
            .get(muscle)
            .ok_or_else(|| ConfigError::UnknownMuscle(muscle.to_string()))
    }

    fn muscles(&self) -> Vec<String> {
        self.volume_landmarks.keys().cloned().collect()
    }

    fn current_week_sets(&self, muscle: &str) -> u32 {
        self.current_week_sets.get(muscle).copied().unwrap_or(0)
    }

    fn last_week_sets(&self, muscle: &str) -> u32 {
        self.last_week_sets.get(muscle).copied().unwrap_or(0)
    }

    fn volume_status(&self, muscle: &str, sets: Option<u32>) -> Result<VolumeStatus, ConfigError> {
        let landmarks = self.landmarks(muscle)?;
        let sets = sets.unwrap_or_else(|| self.current_week_sets(muscle));
        Ok(volume_status(landmarks, sets))
    }

    fn volume_color(&self, muscle: &str, sets: Option<u32>) -> Result<&'static str, ConfigError> {
        Ok(self.volume_status(muscle, sets)?.color())
    }

    fn recovery_volume(&self, muscle: &str, has_illness: bool) -> Result<u32, ConfigError> {
        let lm = self.landmarks(muscle)?;
        let midpoint = ((lm.mev + lm.mrv) as f64 / 2.0).round() as i64;
        let adjustment: i64 = if has_illness { 2 } else { 1 };
        let floor = ((lm.mev as f64) * 0.5).ceil() as i64;
        Ok((midpoint - adjustment).max(floor).max(0) as u32)
    }

    fn target_rir(&self) -> f64 {
        if self.meso_len <= 1 {
            return END_RIR;
        }
        let rate = (START_RIR - END_RIR) / (self.meso_len - 1) as f64;
        let target = START_RIR - rate * (self.week_no.saturating_sub(1)) as f64;
        target.clamp(END_RIR, START_RIR)
    }

    fn should_deload(&self) -> bool {
        if self.consecutive_mrv_weeks >= 2 {
            return true;
        }

        let total_muscles = self.volume_landmarks.len() as u32;
        if self.total_muscles_needing_recovery >= total_muscles.div_ceil(2) {
            return true;
        }

        // A major muscle parked at MRV while others already need recovery
        let fatigue_based_mrv = MAJOR_MUSCLES
            .iter()
            .any(|muscle| self.at_mrv(muscle) && self.total_muscles_needing_recovery > 0);
        if fatigue_based_mrv {
            return true;
        }

        self.week_no >= self.meso_len
    }

    fn start_deload(&mut self) {
        self.deload_phase = true;
        self.load_reduction = 0.5;
        for (muscle, lm) in &self.volume_landmarks {
            if let Some(entry) = self.current_week_sets.get_mut(muscle) {
                *entry = ((lm.mev as f64) * 0.5).round() as u32;
            }
        }
    }

    fn hit_mrv(&mut self, muscle: &str) {
        self.total_muscles_needing_recovery += 1;
        if self.at_mrv(muscle) {
            self.consecutive_mrv_weeks += 1;
        }
    }

    fn add_sets(&mut self, muscle: &str, delta: i32) {
        if let Some(entry) = self.current_week_sets.get_mut(muscle) {
            *entry = (*entry as i32 + delta).max(0) as u32;
        }
    }

    fn consecutive_mrv_weeks(&self) -> u32 {
        self.consecutive_mrv_weeks
    }

    fn week_no(&self) -> u32 {
        self.week_no
    }

    fn meso_len(&self) -> u32 {
        self.meso_len
    }

    fn muscles_needing_recovery(&self) -> u32 {
        self.total_muscles_needing_recovery
    }

    fn rep_strength_drop(&self, muscle: &str, last_load: Option<f64>) -> bool {
        let Some(last_load) = last_load else {
            return false;
        };
        match self.baseline_strength.get(muscle) {
            Some(&baseline) if baseline > 0.0 => last_load < baseline * STRENGTH_DROP_THRESHOLD,
            _ => false,
        }
    }
}

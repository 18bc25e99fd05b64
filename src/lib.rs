//! LiftPlan - Strength Program Planning Core
//!
//! The calculation core of a strength-training program planner. Turns a
//! lifter's configuration (training maxes, units, rounding, template) into a
//! fully-specified multi-week cycle, and turns weekly subjective feedback
//! into per-muscle volume progression and deload decisions driven by
//! MV/MEV/MAV/MRV landmarks.

pub mod autoregulation;
pub mod config;
pub mod cycle;
pub mod error;
pub mod state;
pub mod volume;

// Re-export commonly used types
pub use autoregulation::{process_weekly_volume_progression, RecoveryFeedback};
pub use config::{Program, ProgramConfig};
pub use cycle::{Cycle, CycleGenerator};
pub use error::ConfigError;
pub use state::{MemoryTrainingState, TrainingState};
pub use volume::VolumeLandmarks;

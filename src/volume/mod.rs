//! Volume-landmark tracking, frequency analysis, and deload decisions.

pub mod deload;
pub mod frequency;
pub mod landmarks;

pub use deload::{analyze_deload_need, DeloadAnalysis};
pub use frequency::{
    analyze_frequency, calculate_optimal_frequency, FrequencyAction, FrequencyAnalysis,
    FrequencyConstraints, OptimalFrequency, RecoveryCapacity, TrainingAge,
};
pub use landmarks::{
    analyze_volume_status, calculate_recovery_volume, get_volume_progression,
    validate_volume_input, volume_status, Urgency, VolumeAnalysis, VolumeLandmarks, VolumeStatus,
};

//! End-to-end weekly volume progression and deload tests.

use std::collections::BTreeMap;

use liftplan::autoregulation::{
    process_weekly_volume_progression, RecoveryFeedback, StimulusFeedback,
};
use liftplan::state::{MemoryTrainingState, TrainingState};
use liftplan::volume::{
    analyze_deload_need, analyze_volume_status, Urgency, VolumeLandmarks, VolumeStatus,
};

fn custom_chest_state() -> MemoryTrainingState {
    let mut table = BTreeMap::new();
    table.insert("Chest".to_string(), VolumeLandmarks::new(6, 10, 16, 22));
    MemoryTrainingState::with_landmarks(table).unwrap()
}

fn easy_week() -> RecoveryFeedback {
    // Mild soreness, solid stimulus: nothing trips the fatigue flag
    RecoveryFeedback {
        soreness: 1,
        joint_ache: 0,
        perf_change: 1,
        pump: 2,
        disruption: 2,
        stimulus: StimulusFeedback {
            mmc: 2,
            pump: 2,
            disruption: 2,
        },
        ..RecoveryFeedback::default()
    }
}

#[test]
fn test_chest_at_ten_sets_is_optimal_at_forty_five_percent() {
    let state = custom_chest_state();
    assert_eq!(state.current_week_sets("Chest"), 10); // starts at MEV

    let analysis = analyze_volume_status(&state, "Chest", None).unwrap();
    assert_eq!(analysis.status, VolumeStatus::Optimal);
    assert_eq!(analysis.percentage, 45);
    assert_eq!(analysis.urgency, Urgency::Normal);
}

#[test]
fn test_progression_batch_moves_muscle_off_mev() {
    let mut state = custom_chest_state();
    state.set_meso_len(6);

    let mut weekly = BTreeMap::new();
    weekly.insert("Chest".to_string(), easy_week());

    let report = process_weekly_volume_progression(&weekly, &mut state).unwrap();
    let entry = &report.progression_log["Chest"];

    // Sitting at MEV earns the double increment
    assert_eq!(entry.increment, 2);
    assert_eq!(entry.current_sets, 12);
    assert_eq!(entry.reason, "Starting from MEV");
    assert!(!report.deload_triggered);
    assert_eq!(report.recommendation, "Continue progression");
}

#[test]
fn test_progression_over_weeks_caps_at_mrv_and_deloads() {
    let mut state = custom_chest_state();
    state.set_meso_len(20); // keep end-of-meso out of the picture

    // Low stimulus with good recovery earns a set every week
    let productive_week = RecoveryFeedback {
        soreness: 1,
        joint_ache: 0,
        perf_change: 0,
        pump: 2,
        disruption: 1,
        stimulus: StimulusFeedback {
            mmc: 1,
            pump: 1,
            disruption: 1,
        },
        ..RecoveryFeedback::default()
    };
    let mut weekly = BTreeMap::new();
    weekly.insert("Chest".to_string(), productive_week);

    let mut deload_triggered = false;
    for _ in 0..15 {
        let report = process_weekly_volume_progression(&weekly, &mut state).unwrap();
        if report.deload_triggered {
            deload_triggered = true;
            break;
        }
        state.advance_week();
    }

    // Chest climbed until its MRV hit tripped the deload, which cut it
    // back to half of MEV.
    assert!(deload_triggered);
    assert_eq!(state.current_week_sets("Chest"), 5);
    assert!(state.in_deload_phase());
}

#[test]
fn test_high_fatigue_week_holds_volume() {
    let mut state = MemoryTrainingState::new();
    state.set_meso_len(6);
    state.set_weekly_sets("Chest", 14);

    // Sore, achy, regressing: SFR falls to 1 or below
    let bad_week = RecoveryFeedback {
        soreness: 3,
        joint_ache: 2,
        perf_change: -1,
        pump: 2,
        disruption: 2,
        ..RecoveryFeedback::default()
    };
    let mut weekly = BTreeMap::new();
    weekly.insert("Chest".to_string(), bad_week);

    let report = process_weekly_volume_progression(&weekly, &mut state).unwrap();
    let entry = &report.progression_log["Chest"];
    assert_eq!(entry.increment, 0);
    assert_eq!(entry.reason, "Recovery session needed");
    assert_eq!(state.current_week_sets("Chest"), 14);
    assert!(report.mrv_hits >= 1);
}

#[test]
fn test_deload_analysis_reports_end_of_meso() {
    let mut state = MemoryTrainingState::new();
    for _ in 0..3 {
        state.advance_week();
    }

    let analysis = analyze_deload_need(&state).unwrap();
    assert!(analysis.should_deload);
    assert_eq!(analysis.reasons, vec!["End of mesocycle reached".to_string()]);
    assert_eq!(analysis.current_week, 4);
    assert_eq!(analysis.meso_length, 4);
}

#[test]
fn test_default_state_tracks_thirteen_muscle_groups() {
    let state = MemoryTrainingState::new();
    let muscles = state.muscles();
    assert_eq!(muscles.len(), 13);
    for muscle in &muscles {
        let lm = state.landmarks(muscle).unwrap();
        assert!(lm.validate(muscle).is_ok());
        // Everything starts the meso at MEV
        assert_eq!(state.current_week_sets(muscle), lm.mev);
    }
}

//! Program-level deload decision aggregation.

use serde::Serialize;

use super::landmarks::VolumeStatus;
use crate::error::ConfigError;
use crate::state::TrainingState;

/// Why (and whether) the program should deload right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeloadAnalysis {
    pub should_deload: bool,
    pub reasons: Vec<String>,
    /// Muscles currently at or above MRV
    pub mrv_breaches: Vec<String>,
    pub consecutive_mrv_weeks: u32,
    pub current_week: u32,
    pub meso_length: u32,
    pub muscles_needing_recovery: u32,
}

/// Gather every deload reason that currently applies.
///
/// The boolean verdict comes from the state's own predicate; this only
/// explains it.
pub fn analyze_deload_need(state: &dyn TrainingState) -> Result<DeloadAnalysis, ConfigError> {
    let muscles = state.muscles();
    let muscle_count = muscles.len() as u32;

    let mut mrv_breaches = Vec::new();
    for muscle in &muscles {
        if state.volume_status(muscle, None)? == VolumeStatus::Maximum {
            mrv_breaches.push(muscle.clone());
        }
    }

    let mut reasons = Vec::new();

    if state.consecutive_mrv_weeks() >= 2 {
        reasons.push("Two consecutive weeks at MRV".to_string());
    }

    if muscle_count > 0 && state.muscles_needing_recovery() >= muscle_count.div_ceil(2) {
        reasons.push("Most muscles need recovery sessions".to_string());
    }

    if state.week_no() >= state.meso_len() {
        reasons.push("End of mesocycle reached".to_string());
    }

    if muscle_count > 0 && mrv_breaches.len() as u32 >= muscle_count.div_ceil(3) {
        reasons.push(format!(
            "{} muscle groups at/above MRV",
            mrv_breaches.len()
        ));
    }

    Ok(DeloadAnalysis {
        should_deload: state.should_deload(),
        reasons,
        mrv_breaches,
        consecutive_mrv_weeks: state.consecutive_mrv_weeks(),
        current_week: state.week_no(),
        meso_length: state.meso_len(),
        muscles_needing_recovery: state.muscles_needing_recovery(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryTrainingState;

    #[test]
    fn test_fresh_state_has_no_reasons() {
        let state = MemoryTrainingState::new();
        let analysis = analyze_deload_need(&state).unwrap();
        assert!(!analysis.should_deload);
        assert!(analysis.reasons.is_empty());
        assert!(analysis.mrv_breaches.is_empty());
    }

    #[test]
    fn test_consecutive_mrv_weeks_is_the_only_reason() {
        let mut state = MemoryTrainingState::new();
        state.set_meso_len(6);
        // Two weeks closing with Chest parked at MRV
        state.set_weekly_sets("Chest", 22);
        state.advance_week();
        state.set_weekly_sets("Chest", 22);
        state.advance_week();
        state.set_weekly_sets("Chest", 10);

        let analysis = analyze_deload_need(&state).unwrap();
        assert_eq!(analysis.consecutive_mrv_weeks, 2);
        assert_eq!(analysis.reasons, vec!["Two consecutive weeks at MRV".to_string()]);
        assert!(analysis.should_deload);
    }

    #[test]
    fn test_end_of_meso_reason() {
        let mut state = MemoryTrainingState::new();
        for _ in 0..3 {
            state.advance_week();
        }
        let analysis = analyze_deload_need(&state).unwrap();
        assert!(analysis
            .reasons
            .contains(&"End of mesocycle reached".to_string()));
    }

    #[test]
    fn test_widespread_mrv_breaches_reason() {
        let mut state = MemoryTrainingState::new();
        state.set_meso_len(6);
        // 5 of 13 muscles at MRV crosses ceil(13/3) = 5
        for muscle in ["Chest", "Back", "Quads", "Biceps", "Triceps"] {
            let mrv = state.landmarks(muscle).unwrap().mrv;
            state.set_weekly_sets(muscle, mrv);
        }
        let analysis = analyze_deload_need(&state).unwrap();
        assert_eq!(analysis.mrv_breaches.len(), 5);
        assert!(analysis
            .reasons
            .contains(&"5 muscle groups at/above MRV".to_string()));
    }

    #[test]
    fn test_recovery_pressure_reason() {
        let mut state = MemoryTrainingState::new();
        state.set_meso_len(6);
        for muscle in ["Abs", "Back", "Biceps", "Calves", "Chest", "Forearms", "Glutes"] {
            state.hit_mrv(muscle);
        }
        let analysis = analyze_deload_need(&state).unwrap();
        assert_eq!(analysis.muscles_needing_recovery, 7);
        assert!(analysis
            .reasons
            .contains(&"Most muscles need recovery sessions".to_string()));
    }
}

//! Cycle generation: composes rounding, week schemes, templates, and training
//! maxes into a fully-specified multi-week program.

use serde::{Deserialize, Serialize};

use super::progression::{progress_training_max, TmProgression};
use super::rounding::RoundingPolicy;
use super::scheme::{self, DELOAD_WEEK_INDEX, WEEKS_PER_CYCLE};
use super::templates::{paired_lift, SupplementalRule, TemplateId};
use super::types::{Cycle, Day, Supplemental, Week, WeightedSet};
use crate::config::{Program, WarmupScheme};

/// Build the warm-up ladder for a lift.
///
/// Disabled warm-ups or a non-positive training max yield an empty list.
/// Percentages and reps are zipped, truncated to the shorter of the two.
pub fn build_warmup_sets(
    include_warmups: bool,
    warmup_scheme: &WarmupScheme,
    tm: f64,
    rounding: &RoundingPolicy,
) -> Vec<WeightedSet> {
    if !include_warmups || tm <= 0.0 || !tm.is_finite() {
        return Vec::new();
    }

    warmup_scheme
        .percentages
        .iter()
        .zip(&warmup_scheme.reps)
        .map(|(&percent, &reps)| WeightedSet {
            percent,
            reps,
            weight: rounding.round(tm * percent / 100.0),
            units: rounding.units,
        })
        .collect()
}

/// An AMRAP result logged against a generated cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmrapRecord {
    /// 0-based week the set was performed in
    pub week_index: usize,
    pub lift_key: String,
    /// Reps achieved on the open-ended top set
    pub reps: u32,
}

/// Generates training cycles from a resolved [`Program`].
///
/// Carries the in-progress cycle position and logged AMRAP results; switching
/// the active template resets exactly those two pieces of state.
#[derive(Debug, Clone)]
pub struct CycleGenerator {
    program: Program,
    current_week: usize,
    amrap_log: Vec<AmrapRecord>,
}

impl CycleGenerator {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            current_week: 0,
            amrap_log: Vec::new(),
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// 0-based index of the week currently in progress.
    pub fn current_week(&self) -> usize {
        self.current_week
    }

    pub fn amrap_log(&self) -> &[AmrapRecord] {
        &self.amrap_log
    }

    /// Advance the in-progress week pointer, wrapping at the cycle length.
    pub fn advance_week(&mut self) {
        let len = if self.program.include_deload {
            WEEKS_PER_CYCLE
        } else {
            WEEKS_PER_CYCLE - 1
        };
        self.current_week = (self.current_week + 1) % len;
    }

    /// Log the reps achieved on a week's AMRAP top set.
    pub fn record_amrap(&mut self, lift_key: &str, week_index: usize, reps: u32) {
        self.amrap_log.push(AmrapRecord {
            week_index,
            lift_key: lift_key.to_string(),
            reps,
        });
    }

    /// Switch the active template.
    ///
    /// Defined transition: the current-week pointer and logged AMRAP results
    /// are reset; training maxes, schedule, and rounding are untouched. The
    /// program's supplemental and assistance rules are re-resolved from the
    /// new template's catalog entry.
    pub fn set_template(&mut self, template: TemplateId) {
        if self.program.template == template {
            return;
        }
        self.program.template = template;
        self.program.supplemental = super::templates::template(template).supplemental;
        for day in &self.program.schedule.days {
            self.program.assistance.insert(
                day.id.clone(),
                super::templates::default_assistance(template, &day.lift),
            );
        }
        self.current_week = 0;
        self.amrap_log.clear();
    }

    /// Assemble one training day for a lift and week.
    ///
    /// A lift without a positive training max produces an empty day (no
    /// warm-ups, main sets, or supplemental); assistance is still listed
    /// because it is configured independently of the barbell work.
    pub fn generate_day(&self, lift_key: &str, week_index: usize, day_id: &str) -> Day {
        let program = &self.program;
        let tm = program.training_max(lift_key).unwrap_or(0.0);

        let warmups = build_warmup_sets(
            program.include_warmups,
            &program.warmup_scheme,
            tm,
            &program.rounding,
        );
        let (main_sets, _) = scheme::build_main_sets_for_lift(
            tm,
            week_index,
            program.loading_option,
            &program.rounding,
        );

        let supplemental = if tm > 0.0 {
            self.supplemental_for(lift_key, tm)
        } else {
            None
        };

        let assistance = program
            .assistance
            .get(day_id)
            .cloned()
            .unwrap_or_default();

        Day {
            lift_key: lift_key.to_string(),
            warmups,
            main_sets,
            supplemental,
            assistance,
        }
    }

    fn supplemental_for(&self, lift_key: &str, day_tm: f64) -> Option<Supplemental> {
        let program = &self.program;
        match program.supplemental {
            SupplementalRule::None => None,
            SupplementalRule::FixedPercent {
                pairing,
                percent_of_tm,
                sets,
                reps,
            } => {
                let target = paired_lift(lift_key, pairing);
                let tm = program.training_max(target).unwrap_or(day_tm);
                Some(Supplemental {
                    lift_key: target.to_string(),
                    sets,
                    reps,
                    percent: percent_of_tm,
                    weight: program.rounding.round(tm * percent_of_tm / 100.0),
                    units: program.units,
                })
            }
        }
    }

    /// Next-cycle training-max recommendations from the logged AMRAP results.
    ///
    /// Uses each lift's most recent logged AMRAP; lifts with no log entry
    /// are skipped.
    pub fn tm_progressions(&self) -> Vec<TmProgression> {
        self.program
            .training_maxes
            .iter()
            .filter_map(|(lift_key, &tm)| {
                let record = self
                    .amrap_log
                    .iter()
                    .rev()
                    .find(|r| r.lift_key == *lift_key)?;
                Some(progress_training_max(
                    lift_key,
                    tm,
                    record.reps,
                    record.week_index,
                    &self.program.rounding,
                ))
            })
            .collect()
    }

    /// Generate the full cycle: 4 weeks, or 3 when the deload is disabled.
    ///
    /// Pure over the program: two calls with an unchanged program yield
    /// identical output.
    pub fn generate_cycle(&self) -> Cycle {
        let week_count = if self.program.include_deload {
            WEEKS_PER_CYCLE
        } else {
            WEEKS_PER_CYCLE - 1
        };

        let weeks = (0..week_count)
            .map(|week_index| Week {
                index: week_index as u32 + 1,
                deload: week_index == DELOAD_WEEK_INDEX,
                days: self
                    .program
                    .schedule
                    .days
                    .iter()
                    .map(|day| self.generate_day(&day.lift, week_index, &day.id))
                    .collect(),
            })
            .collect();

        Cycle { weeks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LiftConfig, ProgramConfig};
    use crate::cycle::templates::Pairing;

    fn test_program(template: TemplateId) -> Program {
        let mut config = ProgramConfig::default();
        config.template = template;
        for (lift, tm) in [
            ("press", 140.0),
            ("deadlift", 400.0),
            ("bench", 225.0),
            ("squat", 315.0),
        ] {
            config.lifts.insert(
                lift.to_string(),
                LiftConfig {
                    one_rep_max: None,
                    training_max: Some(tm),
                },
            );
        }
        config.normalize()
    }

    #[test]
    fn test_warmups_default_scheme() {
        let rounding = RoundingPolicy::default_for(crate::cycle::types::Units::Lb);
        let sets = build_warmup_sets(true, &WarmupScheme::default(), 300.0, &rounding);
        assert_eq!(
            sets.iter().map(|s| s.weight).collect::<Vec<_>>(),
            vec![120.0, 150.0, 180.0]
        );
        assert_eq!(
            sets.iter().map(|s| s.reps).collect::<Vec<_>>(),
            vec![5, 5, 3]
        );
    }

    #[test]
    fn test_warmups_disabled_or_no_tm() {
        let rounding = RoundingPolicy::default_for(crate::cycle::types::Units::Lb);
        assert!(build_warmup_sets(false, &WarmupScheme::default(), 300.0, &rounding).is_empty());
        assert!(build_warmup_sets(true, &WarmupScheme::default(), 0.0, &rounding).is_empty());
    }

    #[test]
    fn test_warmups_truncate_to_shorter_list() {
        let rounding = RoundingPolicy::default_for(crate::cycle::types::Units::Lb);
        let scheme = WarmupScheme {
            percentages: vec![40.0, 50.0, 60.0, 70.0],
            reps: vec![5, 5],
        };
        let sets = build_warmup_sets(true, &scheme, 300.0, &rounding);
        assert_eq!(sets.len(), 2);
    }

    #[test]
    fn test_bbb_supplemental_same_pairing() {
        let generator = CycleGenerator::new(test_program(TemplateId::Bbb));
        let day = generator.generate_day("squat", 0, "day4");
        let supplemental = day.supplemental.expect("BBB day has supplemental");
        assert_eq!(supplemental.lift_key, "squat");
        assert_eq!((supplemental.sets, supplemental.reps), (5, 10));
        // 315 * 50% = 157.5 -> 155 at nearest-5
        assert_eq!(supplemental.weight, 155.0);
    }

    #[test]
    fn test_bbb_supplemental_opposite_pairing_uses_paired_tm() {
        let mut program = test_program(TemplateId::Bbb);
        program.supplemental = SupplementalRule::FixedPercent {
            pairing: Pairing::Opposite,
            percent_of_tm: 50.0,
            sets: 5,
            reps: 10,
        };
        let generator = CycleGenerator::new(program);
        let day = generator.generate_day("squat", 0, "day4");
        let supplemental = day.supplemental.unwrap();
        assert_eq!(supplemental.lift_key, "deadlift");
        // Deadlift TM 400 * 50% = 200
        assert_eq!(supplemental.weight, 200.0);
    }

    #[test]
    fn test_day_without_tm_is_empty_but_keeps_assistance() {
        let mut program = test_program(TemplateId::Triumvirate);
        program.training_maxes.remove("press");
        let generator = CycleGenerator::new(program);
        let day = generator.generate_day("press", 0, "day1");
        assert!(day.warmups.is_empty());
        assert!(day.main_sets.is_empty());
        assert!(day.supplemental.is_none());
        assert_eq!(day.assistance.len(), 2);
    }

    #[test]
    fn test_cycle_has_four_weeks_with_deload_last() {
        let generator = CycleGenerator::new(test_program(TemplateId::Bbb));
        let cycle = generator.generate_cycle();
        assert_eq!(cycle.weeks.len(), 4);
        assert!(cycle.weeks[3].deload);
        assert!(cycle.weeks[..3].iter().all(|w| !w.deload));
        assert_eq!(cycle.weeks[0].days.len(), 4);
    }

    #[test]
    fn test_cycle_without_deload_has_three_weeks() {
        let mut program = test_program(TemplateId::Bbb);
        program.include_deload = false;
        let cycle = CycleGenerator::new(program).generate_cycle();
        assert_eq!(cycle.weeks.len(), 3);
        assert!(cycle.weeks.iter().all(|w| !w.deload));
    }

    #[test]
    fn test_template_switch_resets_week_and_amrap_log() {
        let mut generator = CycleGenerator::new(test_program(TemplateId::Bbb));
        generator.advance_week();
        generator.advance_week();
        generator.record_amrap("squat", 1, 8);
        assert_eq!(generator.current_week(), 2);

        generator.set_template(TemplateId::Triumvirate);
        assert_eq!(generator.current_week(), 0);
        assert!(generator.amrap_log().is_empty());
        // Supplemental rule follows the new template
        assert_eq!(generator.program().supplemental, SupplementalRule::None);
        // Training maxes survive the switch
        assert_eq!(generator.program().training_max("squat"), Some(315.0));
    }

    #[test]
    fn test_tm_progressions_use_latest_amrap_per_lift() {
        use crate::cycle::progression::TmAction;

        let mut generator = CycleGenerator::new(test_program(TemplateId::Bbb));
        generator.record_amrap("squat", 0, 5);
        generator.record_amrap("squat", 1, 6); // latest wins
        generator.record_amrap("bench", 0, 3);

        let progressions = generator.tm_progressions();
        assert_eq!(progressions.len(), 2);

        let bench = progressions.iter().find(|p| p.lift_key == "bench").unwrap();
        // 3 reps on the 5s week misses the minimum: reset to 90%
        assert_eq!(bench.action, TmAction::Reset);
        assert_eq!(bench.next_tm, 200.0);

        let squat = progressions.iter().find(|p| p.lift_key == "squat").unwrap();
        // 6 reps on the 3s week clears the threshold: +10 lb
        assert_eq!(squat.action, TmAction::Progress);
        assert_eq!(squat.next_tm, 325.0);
    }

    #[test]
    fn test_setting_same_template_is_a_no_op() {
        let mut generator = CycleGenerator::new(test_program(TemplateId::Bbb));
        generator.advance_week();
        generator.record_amrap("bench", 0, 10);
        generator.set_template(TemplateId::Bbb);
        assert_eq!(generator.current_week(), 1);
        assert_eq!(generator.amrap_log().len(), 1);
    }
}

//! 5/3/1-style cycle generation: percentage tables, rounding, templates,
//! warm-ups, supplemental pairing, and training-max progression.

pub mod generator;
pub mod progression;
pub mod rounding;
pub mod scheme;
pub mod templates;
pub mod types;

pub use generator::{build_warmup_sets, AmrapRecord, CycleGenerator};
pub use progression::{estimate_one_rep_max, progress_training_max, TmAction, TmProgression};
pub use rounding::{round_to_increment, RoundingPolicy};
pub use scheme::{build_main_sets_for_lift, week_scheme, DELOAD_WEEK_INDEX, WEEKS_PER_CYCLE};
pub use templates::{
    check_assistance_volume, default_assistance, paired_lift, template, Pairing, SupplementalRule,
    TemplateId,
};
pub use types::{
    AssistanceExercise, Cycle, Day, LoadingOption, MainSet, RepScheme, RoundingMode, Supplemental,
    Units, Week, WeightedSet,
};

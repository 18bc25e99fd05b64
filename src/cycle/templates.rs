//! Template catalog: supplemental and assistance rules per named template.

use serde::{Deserialize, Serialize};

use super::types::{AssistanceExercise, RepScheme};
use crate::error::ValidationWarning;

/// Named program templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    /// Big supplemental volume: 5x10 at a fixed percent of TM
    #[default]
    Bbb,
    /// Main lift plus exactly two assistance exercises
    Triumvirate,
    /// Five assistance blocks covering all movement buckets
    PeriodizationBible,
    /// Bodyweight-only assistance menu
    Bodyweight,
    /// Main work and nothing else
    JackShit,
}

impl TemplateId {
    pub fn label(&self) -> &'static str {
        match self {
            TemplateId::Bbb => "Boring But Big",
            TemplateId::Triumvirate => "Triumvirate",
            TemplateId::PeriodizationBible => "Periodization Bible",
            TemplateId::Bodyweight => "Bodyweight",
            TemplateId::JackShit => "Jack Shit",
        }
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which lift's training max drives supplemental weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pairing {
    /// Supplemental uses the day's own lift
    #[default]
    Same,
    /// Supplemental uses the canonical opposite lift
    Opposite,
}

/// Supplemental-work rule declared by a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SupplementalRule {
    /// No supplemental work
    None,
    /// Fixed sets x reps at a fixed percent of the paired lift's TM
    FixedPercent {
        pairing: Pairing,
        percent_of_tm: f64,
        sets: u32,
        reps: u32,
    },
}

impl Default for SupplementalRule {
    fn default() -> Self {
        // Book BBB: 5x10 at 50% TM
        SupplementalRule::FixedPercent {
            pairing: Pairing::Same,
            percent_of_tm: 50.0,
            sets: 5,
            reps: 10,
        }
    }
}

/// Resolve the lift whose TM backs supplemental work for `lift_key`.
///
/// Opposite pairing map is exact: press<->bench, squat<->deadlift. Any lift
/// not in the map pairs with itself.
pub fn paired_lift(lift_key: &str, pairing: Pairing) -> &str {
    match pairing {
        Pairing::Same => lift_key,
        Pairing::Opposite => match lift_key {
            "press" => "bench",
            "bench" => "press",
            "squat" => "deadlift",
            "deadlift" => "squat",
            other => other,
        },
    }
}

/// A template's declared rules, resolved from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub supplemental: SupplementalRule,
}

/// Look up a template's declared rules.
pub fn template(id: TemplateId) -> Template {
    let supplemental = match id {
        TemplateId::Bbb => SupplementalRule::default(),
        _ => SupplementalRule::None,
    };
    Template { id, supplemental }
}

/// Default assistance slots a template prescribes for a main-lift day.
///
/// Used by config normalization to fill days the user left unconfigured;
/// a day that is explicitly configured always wins.
pub fn default_assistance(id: TemplateId, lift_key: &str) -> Vec<AssistanceExercise> {
    fn slot(name: &str, sets: u32, reps: RepScheme) -> AssistanceExercise {
        AssistanceExercise {
            name: name.to_string(),
            sets,
            reps,
        }
    }

    match id {
        TemplateId::Bbb => {
            let name = match lift_key {
                "press" => "Chin-ups",
                "bench" => "Dumbbell Row",
                "deadlift" => "Hanging Leg Raise",
                "squat" => "Leg Curl",
                _ => return Vec::new(),
            };
            vec![slot(name, 5, RepScheme::Fixed(10))]
        }
        TemplateId::Triumvirate => match lift_key {
            "press" => vec![
                slot("Dips", 5, RepScheme::Fixed(15)),
                slot("Chin-ups", 5, RepScheme::Fixed(10)),
            ],
            "deadlift" => vec![
                slot("Good Mornings", 5, RepScheme::Fixed(12)),
                slot("Hanging Leg Raises", 5, RepScheme::Fixed(15)),
            ],
            "bench" => vec![
                slot("Dumbbell Bench Press", 5, RepScheme::Fixed(15)),
                slot("Dumbbell Row", 5, RepScheme::Fixed(10)),
            ],
            "squat" => vec![
                slot("Leg Press", 5, RepScheme::Fixed(15)),
                slot("Leg Curl", 5, RepScheme::Fixed(10)),
            ],
            _ => Vec::new(),
        },
        TemplateId::PeriodizationBible => vec![
            slot("Assistance 1", 5, RepScheme::Range(10, 15)),
            slot("Assistance 2", 3, RepScheme::Range(8, 12)),
            slot("Assistance 3", 3, RepScheme::Range(8, 12)),
            slot("Assistance 4", 2, RepScheme::Range(15, 20)),
            slot("Core", 2, RepScheme::Range(10, 15)),
        ],
        TemplateId::Bodyweight => vec![
            slot("Chin-ups", 1, RepScheme::Amrap),
            slot("Dips or Push-ups", 1, RepScheme::Amrap),
            slot("Hanging Leg Raises", 1, RepScheme::Amrap),
        ],
        TemplateId::JackShit => Vec::new(),
    }
}

/// Bounds of the per-exercise assistance volume check, in reps.
pub const ASSISTANCE_VOLUME_RANGE: (u32, u32) = (20, 80);

/// Flag assistance items whose minimum volume falls outside 20-80 reps.
///
/// AMRAP-style schemes have no bounded volume and are skipped. Warnings are
/// advisory; the program still generates.
pub fn check_assistance_volume(items: &[AssistanceExercise]) -> Vec<ValidationWarning> {
    let (lo, hi) = ASSISTANCE_VOLUME_RANGE;
    items
        .iter()
        .filter_map(|item| {
            let min_reps = item.reps.min_reps()?;
            let volume = item.sets * min_reps;
            if volume < lo {
                Some(format!(
                    "{}: {} total reps is below the {}-{} assistance range",
                    item.name, volume, lo, hi
                ))
            } else if volume > hi {
                Some(format!(
                    "{}: {} total reps is above the {}-{} assistance range",
                    item.name, volume, lo, hi
                ))
            } else {
                None
            }
        })
        .collect()
}

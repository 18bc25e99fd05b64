//! Program configuration: on-disk shape, defaults, and normalization.
//!
//! All optional fields and defaults are resolved in one place
//! ([`ProgramConfig::normalize`]) so the generators never see a partially
//! specified program.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cycle::rounding::RoundingPolicy;
use crate::cycle::templates::{self, SupplementalRule, TemplateId};
use crate::cycle::types::{AssistanceExercise, LoadingOption, RoundingMode, Units};
use crate::error::{ConfigError, ValidationWarning};

/// Default training-max fraction of 1RM.
pub const DEFAULT_TM_PCT: f64 = 0.90;

/// Default warm-up ladder: 40/50/60% x 5/5/3.
pub const DEFAULT_WARMUP_PERCENTAGES: [f64; 3] = [40.0, 50.0, 60.0];
pub const DEFAULT_WARMUP_REPS: [u32; 3] = [5, 5, 3];

/// Per-lift maxes. Training max wins over a derived one when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LiftConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_rep_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_max: Option<f64>,
}

/// Rounding settings as stored on disk; units come from the program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundingConfig {
    pub increment: f64,
    #[serde(default)]
    pub mode: RoundingMode,
}

/// Warm-up percent/rep ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupScheme {
    pub percentages: Vec<f64>,
    pub reps: Vec<u32>,
}

impl Default for WarmupScheme {
    fn default() -> Self {
        Self {
            percentages: DEFAULT_WARMUP_PERCENTAGES.to_vec(),
            reps: DEFAULT_WARMUP_REPS.to_vec(),
        }
    }
}

/// One scheduled training day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// Stable key used to attach assistance work
    pub id: String,
    /// Main lift trained this day
    pub lift: String,
}

/// Weekly schedule: an ordered list of training days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub days: Vec<ScheduleDay>,
}

impl Default for Schedule {
    fn default() -> Self {
        // Canonical 4-day order, press first
        let days = ["press", "deadlift", "bench", "squat"]
            .iter()
            .enumerate()
            .map(|(i, lift)| ScheduleDay {
                id: format!("day{}", i + 1),
                lift: (*lift).to_string(),
            })
            .collect();
        Self { days }
    }
}

fn default_true() -> bool {
    true
}

/// Program configuration as authored by the user or the planner UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProgramConfig {
    /// Stable identity, assigned when the program is first created
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Creation timestamp; never changes after construction
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub units: Units,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<RoundingConfig>,
    /// Training-max fraction of 1RM (0.85 or 0.90)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tm_pct: Option<f64>,
    #[serde(default)]
    pub loading_option: LoadingOption,
    #[serde(default)]
    pub lifts: BTreeMap<String, LiftConfig>,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default = "default_true")]
    pub include_deload: bool,
    #[serde(default)]
    pub template: TemplateId,
    /// Overrides the template's supplemental rule when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplemental: Option<SupplementalRule>,
    /// Assistance work keyed by schedule-day id
    #[serde(default)]
    pub assistance: BTreeMap<String, Vec<AssistanceExercise>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warmup_scheme: Option<WarmupScheme>,
    #[serde(default = "default_true")]
    pub include_warmups: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            units: Units::default(),
            rounding: None,
            tm_pct: None,
            loading_option: LoadingOption::default(),
            lifts: BTreeMap::new(),
            schedule: Schedule::default(),
            include_deload: true,
            template: TemplateId::default(),
            supplemental: None,
            assistance: BTreeMap::new(),
            warmup_scheme: None,
            include_warmups: true,
        }
    }
}

impl ProgramConfig {
    /// Load a program config from a TOML or JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(format!("{}: {e}", path.display())))?;
        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))
        } else {
            toml::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))
        }
    }

    /// Resolve every default and derived value into a [`Program`].
    pub fn normalize(&self) -> Program {
        let rounding = match self.rounding {
            Some(cfg) => RoundingPolicy::new(cfg.increment, cfg.mode, self.units),
            None => RoundingPolicy::default_for(self.units),
        };

        let tm_pct = self.tm_pct.unwrap_or(DEFAULT_TM_PCT);

        // Effective TM: explicit TM wins, otherwise derived from 1RM and
        // snapped to the plate increment.
        let training_maxes = self
            .lifts
            .iter()
            .filter_map(|(key, lift)| {
                let tm = lift
                    .training_max
                    .or_else(|| lift.one_rep_max.map(|orm| rounding.round(orm * tm_pct)))?;
                (tm > 0.0 && tm.is_finite()).then(|| (key.clone(), tm))
            })
            .collect();

        let supplemental = self
            .supplemental
            .clone()
            .unwrap_or_else(|| templates::template(self.template).supplemental);

        // Per-day assistance: explicit config wins, then template defaults.
        let assistance = self
            .schedule
            .days
            .iter()
            .map(|day| {
                let items = self
                    .assistance
                    .get(&day.id)
                    .cloned()
                    .unwrap_or_else(|| templates::default_assistance(self.template, &day.lift));
                (day.id.clone(), items)
            })
            .collect();

        Program {
            units: self.units,
            rounding,
            loading_option: self.loading_option,
            training_maxes,
            schedule: self.schedule.clone(),
            include_deload: self.include_deload,
            template: self.template,
            supplemental,
            assistance,
            warmup_scheme: self.warmup_scheme.clone().unwrap_or_default(),
            include_warmups: self.include_warmups,
        }
    }
}

/// A fully resolved program: no optional fields, ready for generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub units: Units,
    pub rounding: RoundingPolicy,
    pub loading_option: LoadingOption,
    /// Effective training max per lift; lifts without a positive TM are absent
    pub training_maxes: BTreeMap<String, f64>,
    pub schedule: Schedule,
    pub include_deload: bool,
    pub template: TemplateId,
    pub supplemental: SupplementalRule,
    /// Resolved assistance per schedule-day id
    pub assistance: BTreeMap<String, Vec<AssistanceExercise>>,
    pub warmup_scheme: WarmupScheme,
    pub include_warmups: bool,
}

impl Program {
    /// Effective training max for a lift, if one is configured and positive.
    pub fn training_max(&self, lift_key: &str) -> Option<f64> {
        self.training_maxes.get(lift_key).copied()
    }

    /// Training max for a lift, failing on unknown keys.
    ///
    /// Generation itself degrades missing TMs to empty days; this strict
    /// variant is for callers that require the lift to exist, e.g. cycle-over-
    /// cycle TM progression.
    pub fn require_training_max(&self, lift_key: &str) -> Result<f64, ConfigError> {
        self.training_max(lift_key)
            .ok_or_else(|| ConfigError::UnknownLift(lift_key.to_string()))
    }

    /// Advisory checks over the resolved program.
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        for day in &self.schedule.days {
            if let Some(items) = self.assistance.get(&day.id) {
                for warning in templates::check_assistance_volume(items) {
                    warnings.push(format!("{}: {warning}", day.id));
                }
            }
            if self.training_max(&day.lift).is_none() {
                warnings.push(format!(
                    "{}: no training max for {}, day will be empty",
                    day.id, day.lift
                ));
            }
        }
        warnings
    }
}

//! Cycle types and enums.

use serde::{Deserialize, Serialize};

/// Weight unit preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Pounds
    #[default]
    Lb,
    /// Kilograms
    Kg,
}

impl Units {
    /// Default plate increment for this unit system.
    pub fn default_increment(self) -> f64 {
        match self {
            Units::Lb => 5.0,
            Units::Kg => 2.5,
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Units::Lb => write!(f, "lb"),
            Units::Kg => write!(f, "kg"),
        }
    }
}

/// How raw weights snap to the plate increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to the closest increment
    #[default]
    Nearest,
    /// Always round up
    Ceil,
    /// Always round down
    Floor,
}

/// Main-work percent ladder selection.
///
/// Option 1 is the classic 65/75/85 progression; option 2 starts heavier at
/// 75/80/85. Both share the 40/50/60 deload week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LoadingOption {
    #[default]
    One,
    Two,
}

impl TryFrom<u8> for LoadingOption {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LoadingOption::One),
            2 => Ok(LoadingOption::Two),
            other => Err(format!("loading option must be 1 or 2, got {other}")),
        }
    }
}

impl From<LoadingOption> for u8 {
    fn from(option: LoadingOption) -> u8 {
        match option {
            LoadingOption::One => 1,
            LoadingOption::Two => 2,
        }
    }
}

/// A weighted set without an AMRAP marker (warm-ups, supplemental work).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedSet {
    /// Percent of training max
    pub percent: f64,
    /// Prescribed reps
    pub reps: u32,
    /// Rounded working weight
    pub weight: f64,
    /// Unit the weight is expressed in
    pub units: Units,
}

/// A main-work set, optionally open-ended on reps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainSet {
    /// Percent of training max
    pub percent: f64,
    /// Base rep prescription
    pub reps: u32,
    /// Rounded working weight
    pub weight: f64,
    /// Unit the weight is expressed in
    pub units: Units,
    /// Whether this set is "as many reps as possible"
    pub amrap: bool,
}

impl MainSet {
    /// Rep prescription as rendered on a program card ("5", "3", "1+").
    pub fn reps_display(&self) -> String {
        if self.amrap {
            format!("{}+", self.reps)
        } else {
            self.reps.to_string()
        }
    }
}

/// Supplemental work computed from a template's fixed-percent rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplemental {
    /// Lift whose training max the weight is taken from
    pub lift_key: String,
    pub sets: u32,
    pub reps: u32,
    /// Percent of the paired lift's training max
    pub percent: f64,
    /// Rounded working weight
    pub weight: f64,
    pub units: Units,
}

/// Rep prescription for an assistance exercise.
///
/// Serialized as a bare number for fixed reps, `"10-15"` for ranges and
/// `"amrap"` for open-ended work, matching the program-card notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RepSchemeRepr", into = "RepSchemeRepr")]
pub enum RepScheme {
    Fixed(u32),
    Range(u32, u32),
    Amrap,
}

impl RepScheme {
    /// Minimum reps per set, if the scheme is bounded.
    ///
    /// AMRAP schemes return `None` and are skipped by volume checks.
    pub fn min_reps(self) -> Option<u32> {
        match self {
            RepScheme::Fixed(n) => Some(n),
            RepScheme::Range(min, _) => Some(min),
            RepScheme::Amrap => None,
        }
    }
}

impl std::fmt::Display for RepScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepScheme::Fixed(n) => write!(f, "{n}"),
            RepScheme::Range(min, max) => write!(f, "{min}-{max}"),
            RepScheme::Amrap => write!(f, "amrap"),
        }
    }
}

/// Wire form of [`RepScheme`]: number or string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RepSchemeRepr {
    Num(u32),
    Text(String),
}

impl TryFrom<RepSchemeRepr> for RepScheme {
    type Error = String;

    fn try_from(repr: RepSchemeRepr) -> Result<Self, Self::Error> {
        match repr {
            RepSchemeRepr::Num(n) => Ok(RepScheme::Fixed(n)),
            RepSchemeRepr::Text(s) => {
                let trimmed = s.trim();
                if trimmed.eq_ignore_ascii_case("amrap") || trimmed.ends_with('+') {
                    return Ok(RepScheme::Amrap);
                }
                if let Some((min, max)) = trimmed.split_once('-') {
                    let min = min.trim().parse().map_err(|_| format!("bad rep range: {s}"))?;
                    let max = max.trim().parse().map_err(|_| format!("bad rep range: {s}"))?;
                    return Ok(RepScheme::Range(min, max));
                }
                trimmed
                    .parse()
                    .map(RepScheme::Fixed)
                    .map_err(|_| format!("bad rep scheme: {s}"))
            }
        }
    }
}

impl From<RepScheme> for RepSchemeRepr {
    fn from(scheme: RepScheme) -> Self {
        match scheme {
            RepScheme::Fixed(n) => RepSchemeRepr::Num(n),
            other => RepSchemeRepr::Text(other.to_string()),
        }
    }
}

/// A single assistance exercise slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistanceExercise {
    pub name: String,
    pub sets: u32,
    pub reps: RepScheme,
}

/// One training day: warm-ups, main work, optional supplemental, assistance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Main lift trained this day
    pub lift_key: String,
    pub warmups: Vec<WeightedSet>,
    pub main_sets: Vec<MainSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplemental: Option<Supplemental>,
    pub assistance: Vec<AssistanceExercise>,
}

/// One calendar week of the cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    /// 1-based week number
    pub index: u32,
    /// Whether this is the deload week
    pub deload: bool,
    pub days: Vec<Day>,
}

/// A fully-specified multi-week training cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub weeks: Vec<Week>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rep_scheme_parsing() {
        let fixed: RepScheme = serde_json::from_str("10").unwrap();
        assert_eq!(fixed, RepScheme::Fixed(10));

        let range: RepScheme = serde_json::from_str("\"10-15\"").unwrap();
        assert_eq!(range, RepScheme::Range(10, 15));

        let amrap: RepScheme = serde_json::from_str("\"amrap\"").unwrap();
        assert_eq!(amrap, RepScheme::Amrap);

        let plus: RepScheme = serde_json::from_str("\"5+\"").unwrap();
        assert_eq!(plus, RepScheme::Amrap);
    }

    #[test]
    fn test_rep_scheme_min_reps() {
        assert_eq!(RepScheme::Fixed(10).min_reps(), Some(10));
        assert_eq!(RepScheme::Range(8, 12).min_reps(), Some(8));
        assert_eq!(RepScheme::Amrap.min_reps(), None);
    }

    #[test]
    fn test_main_set_display() {
        let set = MainSet {
            percent: 85.0,
            reps: 5,
            weight: 255.0,
            units: Units::Lb,
            amrap: true,
        };
        assert_eq!(set.reps_display(), "5+");

        let plain = MainSet { amrap: false, ..set };
        assert_eq!(plain.reps_display(), "5");
    }

    #[test]
    fn test_loading_option_roundtrip() {
        let opt: LoadingOption = serde_json::from_str("2").unwrap();
        assert_eq!(opt, LoadingOption::Two);
        assert_eq!(serde_json::to_string(&opt).unwrap(), "2");

        assert!(serde_json::from_str::<LoadingOption>("3").is_err());
    }
}

//! Stimulus quality scoring from post-session subjective feedback.

use serde::{Deserialize, Serialize};

fn clamp_rating(value: u32) -> u32 {
    value.min(3)
}

/// Subjective stimulus ratings for a session, each on a 0-3 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StimulusFeedback {
    /// Mind-muscle connection
    #[serde(default)]
    pub mmc: u32,
    #[serde(default)]
    pub pump: u32,
    /// Perceived workload disruption
    #[serde(default)]
    pub disruption: u32,
}

/// Coarse action implied by a stimulus score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StimulusAction {
    AddSets,
    Maintain,
    ReduceSets,
}

impl StimulusAction {
    pub fn label(&self) -> &'static str {
        match self {
            StimulusAction::AddSets => "add_sets",
            StimulusAction::Maintain => "maintain",
            StimulusAction::ReduceSets => "reduce_sets",
        }
    }
}

/// Scored stimulus with the implied set-count move.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StimulusScore {
    /// Sum of the three clamped ratings, 0-9
    pub score: u32,
    pub action: StimulusAction,
    pub set_change: i32,
    pub advice: String,
    /// Ratings after clamping, as actually scored
    pub breakdown: StimulusFeedback,
}

/// Sum the three ratings (clamped to 0-3 each) into a 0-9 score and map it
/// onto an action: low scores add sets, high scores trim them.
///
/// The excessive tier advises removing 1-2 sets but commits to a -1 delta;
/// the wider range is display-only.
pub fn score_stimulus(feedback: &StimulusFeedback) -> StimulusScore {
    let breakdown = StimulusFeedback {
        mmc: clamp_rating(feedback.mmc),
        pump: clamp_rating(feedback.pump),
        disruption: clamp_rating(feedback.disruption),
    };
    let score = breakdown.mmc + breakdown.pump + breakdown.disruption;

    let (action, set_change, advice) = if score <= 3 {
        (
            StimulusAction::AddSets,
            2,
            format!("Stimulus too low ({score}/9) - add 2 sets next session"),
        )
    } else if score <= 6 {
        (
            StimulusAction::Maintain,
            0,
            format!("Stimulus adequate ({score}/9) - keep sets the same"),
        )
    } else {
        (
            StimulusAction::ReduceSets,
            -1,
            format!("Stimulus excessive ({score}/9) - remove 1-2 sets next session"),
        )
    };

    StimulusScore {
        score,
        action,
        set_change,
        advice,
        breakdown,
    }
}
